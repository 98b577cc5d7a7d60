//! Randomized fleet generation and placement bookkeeping.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::BoardError;
use crate::config::{FleetSpec, BOARD_SIZE, MAX_SHIP_LENGTH, PLACEMENT_ATTEMPTS};
use crate::grid::Grid;
use crate::ship::Orientation;

/// Try up to `attempts` random positions for a ship of `length` and return
/// the first one the grid accepts. Does not modify the grid.
pub fn random_placement<R: Rng + ?Sized>(
    grid: &Grid,
    length: usize,
    attempts: usize,
    rng: &mut R,
) -> Result<(usize, usize, Orientation), BoardError> {
    if length == 0 || length > MAX_SHIP_LENGTH {
        return Err(BoardError::InvalidLength { length });
    }
    for _ in 0..attempts {
        let orientation = Orientation::from(rng.random::<bool>());
        let (max_x, max_y) = match orientation {
            Orientation::Horizontal => (BOARD_SIZE - length, BOARD_SIZE - 1),
            Orientation::Vertical => (BOARD_SIZE - 1, BOARD_SIZE - length),
        };
        let x = rng.random_range(0..=max_x);
        let y = rng.random_range(0..=max_y);
        if grid.can_place(x, y, length, orientation) {
            return Ok((x, y, orientation));
        }
    }
    Err(BoardError::UnableToPlaceShip { length })
}

/// Reset `grid` and fill it with the whole fleet at random positions,
/// longest ships first.
///
/// If a ship cannot be placed within [`PLACEMENT_ATTEMPTS`] tries the grid is
/// reset again and `UnableToPlaceShip` is returned, so a partial fleet is
/// never left behind.
pub fn randomize_fleet<R: Rng + ?Sized>(
    grid: &mut Grid,
    fleet: &FleetSpec,
    rng: &mut R,
) -> Result<(), BoardError> {
    grid.reset();
    let mut lengths: Vec<usize> = fleet.lengths().to_vec();
    lengths.sort_unstable_by(|a, b| b.cmp(a));

    for length in lengths {
        let placed = random_placement(grid, length, PLACEMENT_ATTEMPTS, rng)
            .and_then(|(x, y, orientation)| grid.place(x, y, length, orientation));
        if let Err(err) = placed {
            log::warn!("fleet generation gave up on a ship of length {}", length);
            grid.reset();
            return Err(err);
        }
    }
    Ok(())
}

/// Per-length count of ships still to be placed on one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetTracker {
    required: [usize; MAX_SHIP_LENGTH + 1],
    remaining: [usize; MAX_SHIP_LENGTH + 1],
}

impl FleetTracker {
    /// Tracker with the whole fleet still to place.
    pub fn new(fleet: &FleetSpec) -> Self {
        let mut required = [0usize; MAX_SHIP_LENGTH + 1];
        for &length in fleet.lengths() {
            required[length] += 1;
        }
        Self {
            required,
            remaining: required,
        }
    }

    /// Ships of `length` still to place.
    pub fn remaining(&self, length: usize) -> usize {
        self.remaining.get(length).copied().unwrap_or(0)
    }

    pub fn total_remaining(&self) -> usize {
        self.remaining.iter().sum()
    }

    pub fn is_complete(&self) -> bool {
        self.total_remaining() == 0
    }

    /// Count one ship of `length` as placed. Returns `false` when none was
    /// left to place.
    pub fn take(&mut self, length: usize) -> bool {
        match self.remaining.get_mut(length) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Return a removed ship of `length` to the pool.
    pub fn restore(&mut self, length: usize) {
        if let Some(count) = self.remaining.get_mut(length) {
            if *count < self.required[length] {
                *count += 1;
            }
        }
    }

    /// Everything placed at once, e.g. after randomizing.
    pub fn mark_complete(&mut self) {
        self.remaining = [0; MAX_SHIP_LENGTH + 1];
    }

    /// Everything back to unplaced, e.g. after clearing the grid.
    pub fn reset(&mut self) {
        self.remaining = self.required;
    }
}
