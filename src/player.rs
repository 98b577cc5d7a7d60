use rand::rngs::SmallRng;

use crate::{
    common::{BoardError, ShotOutcome},
    config::FleetSpec,
    grid::Grid,
    snapshot::GridSnapshot,
};

/// Strategy driving one side of a session.
///
/// A Player is responsible for:
/// - Placing its fleet onto an empty grid
/// - Selecting the next cell to shoot on the enemy grid
/// - Optionally observing the outcome of its shots
pub trait Player {
    /// Place the whole fleet onto the provided grid.
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut Grid,
        fleet: &FleetSpec,
    ) -> Result<(), BoardError>;

    /// Choose the next target given a concealed view of the enemy grid.
    /// `None` when no unresolved cell is left.
    fn select_target(&mut self, rng: &mut SmallRng, view: &GridSnapshot) -> Option<(usize, usize)>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: (usize, usize), _outcome: &ShotOutcome) {}
}
