//! Shot resolution against a grid.

use crate::common::{BoardError, ShotOutcome};
use crate::grid::{CellState, Grid};

impl Grid {
    /// Resolve a shot at (`x`, `y`).
    ///
    /// Shooting an already resolved cell returns `Repeat` and changes nothing.
    /// Sinking a ship turns its cells into `SunkPart` and marks every empty
    /// cell around it as `Miss`; the no-touch rule guarantees no live ship
    /// sits in that perimeter.
    pub fn shoot(&mut self, x: usize, y: usize) -> Result<ShotOutcome, BoardError> {
        let state = self.cell(x, y).ok_or(BoardError::OutOfBounds { x, y })?;
        match state {
            CellState::Miss | CellState::Hit | CellState::SunkPart => Ok(ShotOutcome::Repeat),
            CellState::Empty => {
                self.set_cell(x, y, CellState::Miss);
                Ok(ShotOutcome::Miss)
            }
            CellState::ShipPart => {
                let ship = *self.ship_at(x, y).ok_or(BoardError::UnknownShip { x, y })?;
                self.set_cell(x, y, CellState::Hit);

                let afloat = ship
                    .cells()
                    .any(|(cx, cy)| self.cell(cx, cy) != Some(CellState::Hit));
                if afloat {
                    return Ok(ShotOutcome::Hit);
                }

                for (cx, cy) in ship.cells() {
                    self.set_cell(cx, cy, CellState::SunkPart);
                }
                for (px, py) in ship.mask().halo().iter_set_bits() {
                    if self.cell(px, py) == Some(CellState::Empty) {
                        self.set_cell(px, py, CellState::Miss);
                    }
                }
                log::debug!("sunk {:?}", ship);
                Ok(ShotOutcome::Sunk(ship))
            }
        }
    }
}
