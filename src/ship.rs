//! Ship geometry backed by a `BitBoard` mask.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, MAX_SHIP_LENGTH};

/// Bitboard sized for one grid.
pub type BB = BitBoard<u128, BOARD_SIZE>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along increasing `x`.
    Horizontal,
    /// Extends along increasing `y`.
    Vertical,
}

impl From<bool> for Orientation {
    /// `true` means horizontal.
    fn from(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A placed ship: a straight run of cells that never changes once created.
///
/// Damage is not tracked here; the owning grid's cell states are the single
/// source of truth for hits.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    x: usize,
    y: usize,
    length: usize,
    orientation: Orientation,
    #[cfg_attr(feature = "std", serde(skip))]
    mask: BB,
}

impl Ship {
    /// Build the ship whose first cell is (`x`, `y`), checking that every cell
    /// lies on the board.
    pub fn new(
        x: usize,
        y: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(BoardError::InvalidLength { length });
        }
        let (end_x, end_y) = match orientation {
            Orientation::Horizontal => (x.saturating_add(length - 1), y),
            Orientation::Vertical => (x, y.saturating_add(length - 1)),
        };
        if end_x >= BOARD_SIZE || end_y >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { x: end_x, y: end_y });
        }

        let mask = BB::from_cells(Self::span(x, y, length, orientation))?;
        Ok(Ship {
            x,
            y,
            length,
            orientation,
            mask,
        })
    }

    fn span(
        x: usize,
        y: usize,
        length: usize,
        orientation: Orientation,
    ) -> impl Iterator<Item = (usize, usize)> {
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        })
    }

    /// First cell of the ship.
    pub fn origin(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }

    /// Cells from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        Self::span(self.x, self.y, self.length, self.orientation)
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y).unwrap_or(false)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: ({}, {}), length: {}, orientation: {:?} }}",
            self.x, self.y, self.length, self.orientation
        )
    }
}
