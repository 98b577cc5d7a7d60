#![allow(dead_code)]

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use seabattle::{
    BoardError, FleetSpec, Grid, GridSnapshot, Orientation, Player, Session, ShotOutcome, Side,
};

/// A legal standard fleet using rows 0, 2 and 4 only; rows 5..10 stay open water.
pub const STANDARD_LAYOUT: [(usize, usize, usize); 10] = [
    (0, 0, 4),
    (5, 0, 3),
    (0, 2, 3),
    (4, 2, 2),
    (7, 2, 2),
    (0, 4, 2),
    (3, 4, 1),
    (5, 4, 1),
    (7, 4, 1),
    (9, 4, 1),
];

pub fn place_layout(grid: &mut Grid, layout: &[(usize, usize, usize)]) -> Result<(), BoardError> {
    for &(x, y, len) in layout {
        grid.place(x, y, len, Orientation::Horizontal)?;
    }
    Ok(())
}

pub fn place_session_layout(session: &mut Session, side: Side, layout: &[(usize, usize, usize)]) {
    for &(x, y, len) in layout {
        session
            .place_ship(side, x, y, len, Orientation::Horizontal)
            .unwrap();
    }
}

/// Opponent with a fixed layout and a fixed list of targets.
pub struct ScriptedPlayer {
    pub layout: Vec<(usize, usize, usize)>,
    pub targets: VecDeque<(usize, usize)>,
}

impl ScriptedPlayer {
    pub fn new(layout: &[(usize, usize, usize)], targets: &[(usize, usize)]) -> Self {
        Self {
            layout: layout.to_vec(),
            targets: targets.iter().copied().collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn place_ships(
        &mut self,
        _rng: &mut SmallRng,
        grid: &mut Grid,
        _fleet: &FleetSpec,
    ) -> Result<(), BoardError> {
        place_layout(grid, &self.layout)
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _view: &GridSnapshot) -> Option<(usize, usize)> {
        self.targets.pop_front()
    }

    fn handle_shot_result(&mut self, _coord: (usize, usize), _outcome: &ShotOutcome) {}
}

/// Opponent that fires at the same cell every time.
pub struct StuckPlayer {
    pub layout: Vec<(usize, usize, usize)>,
    pub target: (usize, usize),
}

impl Player for StuckPlayer {
    fn place_ships(
        &mut self,
        _rng: &mut SmallRng,
        grid: &mut Grid,
        _fleet: &FleetSpec,
    ) -> Result<(), BoardError> {
        place_layout(grid, &self.layout)
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _view: &GridSnapshot) -> Option<(usize, usize)> {
        Some(self.target)
    }
}

/// Opponent that places one ship and then reports a failure.
pub struct BrokenPlacer;

impl Player for BrokenPlacer {
    fn place_ships(
        &mut self,
        _rng: &mut SmallRng,
        grid: &mut Grid,
        _fleet: &FleetSpec,
    ) -> Result<(), BoardError> {
        grid.place(0, 0, 4, Orientation::Horizontal)?;
        Err(BoardError::InvalidFleet)
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _view: &GridSnapshot) -> Option<(usize, usize)> {
        None
    }
}
