//! Read-only views of a grid handed to renderers and targeting strategies.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::grid::CellState;

/// Copy of a grid's cell states, indexed by `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl GridSnapshot {
    /// Wrap row-major cell states (`cells[y][x]`).
    pub fn from_cells(cells: [[CellState; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn rows(&self) -> &[[CellState; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Every `(x, y)` with the given state, in row-major order.
    pub fn cells_in(&self, state: CellState) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter().filter(move |&(_, _, s)| s == state).map(|(x, y, _)| (x, y))
    }

    /// Cells a shot could still land on.
    pub fn unresolved(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter()
            .filter(|&(_, _, s)| !s.is_resolved())
            .map(|(x, y, _)| (x, y))
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells_in(state).count()
    }

    fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, &state)| (x, y, state))
        })
    }
}

impl fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {}", (b'A' + x as u8) as char)?;
        }
        for (y, row) in self.cells.iter().enumerate() {
            write!(f, "\n{:2} ", y + 1)?;
            for state in row {
                let ch = match state {
                    CellState::Empty => '.',
                    CellState::ShipPart => 'S',
                    CellState::Miss => 'o',
                    CellState::Hit => 'X',
                    CellState::SunkPart => '#',
                };
                write!(f, " {}", ch)?;
            }
        }
        Ok(())
    }
}
