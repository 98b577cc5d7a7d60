use rand::rngs::SmallRng;

use crate::{
    ai,
    common::BoardError,
    config::FleetSpec,
    fleet,
    grid::Grid,
    player::Player,
    snapshot::GridSnapshot,
};

/// Default opponent: random fleet, hunt-then-random targeting.
#[derive(Debug, Default, Clone, Copy)]
pub struct HuntPlayer;

impl HuntPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for HuntPlayer {
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut Grid,
        fleet: &FleetSpec,
    ) -> Result<(), BoardError> {
        fleet::randomize_fleet(grid, fleet, rng)
    }

    fn select_target(&mut self, rng: &mut SmallRng, view: &GridSnapshot) -> Option<(usize, usize)> {
        ai::choose_target(view, rng)
    }
}
