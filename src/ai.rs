// Hunt-then-random targeting for the opponent.
// Works on a concealed snapshot, so unstruck ships look like open water.

use alloc::vec::Vec;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::config::BOARD_SIZE;
use crate::grid::CellState;
use crate::snapshot::GridSnapshot;

/// Orthogonal steps tried around a hit: right, left, down, up.
const STEPS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Pick the next cell to shoot: finish a wounded ship if there is one,
/// otherwise any unresolved cell uniformly at random. `None` means every
/// cell is resolved.
pub fn choose_target<R: Rng + ?Sized>(view: &GridSnapshot, rng: &mut R) -> Option<(usize, usize)> {
    hunt_target(view, rng).or_else(|| random_target(view, rng))
}

/// Unresolved orthogonal neighbour of a `Hit` cell. Hits are visited in a
/// random order; the first open neighbour wins.
pub fn hunt_target<R: Rng + ?Sized>(view: &GridSnapshot, rng: &mut R) -> Option<(usize, usize)> {
    let mut hits: Vec<(usize, usize)> = view.cells_in(CellState::Hit).collect();
    hits.shuffle(rng);

    hits.into_iter().find_map(|(x, y)| {
        STEPS.iter().find_map(|&(dx, dy)| {
            let nx = x.checked_add_signed(dx).filter(|&v| v < BOARD_SIZE)?;
            let ny = y.checked_add_signed(dy).filter(|&v| v < BOARD_SIZE)?;
            match view.get(nx, ny) {
                Some(state) if !state.is_resolved() => Some((nx, ny)),
                _ => None,
            }
        })
    })
}

/// Uniform choice among all unresolved cells.
pub fn random_target<R: Rng + ?Sized>(view: &GridSnapshot, rng: &mut R) -> Option<(usize, usize)> {
    let open: Vec<(usize, usize)> = view.unresolved().collect();
    open.choose(rng).copied()
}
