use alloc::vec::Vec;

use crate::common::BoardError;

/// Side length of every grid.
pub const BOARD_SIZE: usize = 10;

/// Longest ship that fits on the board.
pub const MAX_SHIP_LENGTH: usize = BOARD_SIZE;

/// One four, two threes, three twos and four singles.
pub const STANDARD_FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Random placement attempts per ship before fleet generation gives up.
pub const PLACEMENT_ATTEMPTS: usize = 3000;

/// Ordered list of ship lengths a side must place before battle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct FleetSpec {
    lengths: Vec<usize>,
}

impl FleetSpec {
    /// Validate a fleet: non-empty, every length in `1..=MAX_SHIP_LENGTH`,
    /// and no more ship cells than the board has.
    pub fn new(lengths: &[usize]) -> Result<Self, BoardError> {
        if lengths.is_empty() {
            return Err(BoardError::InvalidFleet);
        }
        if let Some(&bad) = lengths
            .iter()
            .find(|&&len| len == 0 || len > MAX_SHIP_LENGTH)
        {
            return Err(BoardError::InvalidLength { length: bad });
        }
        if lengths.iter().sum::<usize>() > BOARD_SIZE * BOARD_SIZE {
            return Err(BoardError::InvalidFleet);
        }
        Ok(Self {
            lengths: lengths.to_vec(),
        })
    }

    /// The standard ten-ship fleet.
    pub fn standard() -> Self {
        Self {
            lengths: STANDARD_FLEET.to_vec(),
        }
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Number of ships in the fleet.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// How many ships of `length` the fleet contains.
    pub fn count(&self, length: usize) -> usize {
        self.lengths.iter().filter(|&&l| l == length).count()
    }

    /// Total number of cells occupied by the whole fleet.
    pub fn total_cells(&self) -> usize {
        self.lengths.iter().sum()
    }
}

impl Default for FleetSpec {
    fn default() -> Self {
        Self::standard()
    }
}
