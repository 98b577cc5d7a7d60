//! One side's board: cell states, placed ships and the no-touch rule.

use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, Ship, BB};
use crate::snapshot::GridSnapshot;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    ShipPart,
    Miss,
    Hit,
    SunkPart,
}

impl CellState {
    /// `true` once a shot has landed on the cell.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Miss | CellState::Hit | CellState::SunkPart)
    }
}

/// A square board exclusively owning its ships.
///
/// Invariant: no two ships share a cell or touch each other, diagonals
/// included. Every placement goes through [`Grid::check_placement`].
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
    occupied: BB,
}

impl Grid {
    /// Empty grid with no ships.
    pub fn new() -> Self {
        Grid {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            occupied: BB::new(),
        }
    }

    /// Drop every ship and shot.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// State at (`x`, `y`), `None` when out of bounds.
    pub fn cell(&self, x: usize, y: usize) -> Option<CellState> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    pub(crate) fn set_cell(&mut self, x: usize, y: usize, state: CellState) {
        self.cells[y][x] = state;
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Mask of every ship cell, struck or not.
    pub fn occupied(&self) -> BB {
        self.occupied
    }

    /// The ship covering (`x`, `y`), if any.
    pub fn ship_at(&self, x: usize, y: usize) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.contains(x, y))
    }

    /// Build the ship described by the arguments and check it against the
    /// bounds, overlap and no-touch rules.
    pub fn check_placement(
        &self,
        x: usize,
        y: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Ship, BoardError> {
        let ship = Ship::new(x, y, length, orientation)?;
        if !(ship.mask() & self.occupied).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        if !(ship.mask() & self.occupied.halo()).is_empty() {
            return Err(BoardError::ShipTooClose);
        }
        Ok(ship)
    }

    /// Whether a ship of `length` fits at (`x`, `y`).
    pub fn can_place(&self, x: usize, y: usize, length: usize, orientation: Orientation) -> bool {
        self.check_placement(x, y, length, orientation).is_ok()
    }

    /// Place a ship. All-or-nothing: on error the grid is unchanged.
    pub fn place(
        &mut self,
        x: usize,
        y: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = self.check_placement(x, y, length, orientation)?;
        for (cx, cy) in ship.cells() {
            self.set_cell(cx, cy, CellState::ShipPart);
        }
        self.occupied = self.occupied | ship.mask();
        self.ships.push(ship);
        log::trace!("placed {:?}", ship);
        Ok(())
    }

    /// Remove the ship covering (`x`, `y`) and return its length, or 0 when
    /// the cell holds no ship.
    pub fn remove_ship_at(&mut self, x: usize, y: usize) -> usize {
        let Some(pos) = self.ships.iter().position(|ship| ship.contains(x, y)) else {
            return 0;
        };
        let ship = self.ships.remove(pos);
        for (cx, cy) in ship.cells() {
            self.set_cell(cx, cy, CellState::Empty);
        }
        self.occupied = self.occupied & !ship.mask();
        ship.length()
    }

    /// `true` when every cell of every ship is `SunkPart`.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(|ship| {
            ship.cells()
                .all(|(x, y)| self.cells[y][x] == CellState::SunkPart)
        })
    }

    /// Cells no shot has landed on yet.
    pub fn unresolved_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|state| !state.is_resolved())
            .count()
    }

    /// Read-only copy of the cell states. With `reveal == false` unstruck
    /// ship cells are reported as `Empty`.
    pub fn snapshot(&self, reveal: bool) -> GridSnapshot {
        let mut cells = self.cells;
        if !reveal {
            for state in cells.iter_mut().flatten() {
                if *state == CellState::ShipPart {
                    *state = CellState::Empty;
                }
            }
        }
        GridSnapshot::from_cells(cells)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ ships: {:?} }}", self.ships)?;
        write!(f, "{}", self.snapshot(true))
    }
}
