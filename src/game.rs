use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    ai,
    common::{BoardError, GameError, GameOutcome, Phase, ShotOutcome, Side},
    config::FleetSpec,
    fleet::{self, FleetTracker},
    grid::Grid,
    player::Player,
    player_ai::HuntPlayer,
    ship::Orientation,
    snapshot::GridSnapshot,
};

/// Record of one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotReport {
    /// Side that fired.
    pub actor: Side,
    pub x: usize,
    pub y: usize,
    pub outcome: ShotOutcome,
    /// Phase after the shot.
    pub phase: Phase,
    /// Set when the shot ended the game.
    pub winner: Option<GameOutcome>,
    /// Side holding the turn after the shot.
    pub next_turn: Side,
}

/// A player shot together with the opponent shots it handed control to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnReport {
    pub shot: ShotReport,
    /// Opponent shots applied before the reply stopped.
    pub replies: Vec<ShotReport>,
    /// Why the reply stopped early, if it did. The player shot and the
    /// listed replies are applied either way.
    pub reply_error: Option<GameError>,
}

/// Two grids, the phase machine and the turn hand-off rule.
///
/// The player side is driven by the caller; the opponent side by a
/// [`Player`] strategy ([`HuntPlayer`] unless replaced). Both grids are owned
/// here and only change through the methods below.
pub struct Session {
    fleet: FleetSpec,
    grids: [Grid; 2],
    trackers: [FleetTracker; 2],
    phase: Phase,
    outcome: Option<GameOutcome>,
    turn: Side,
    rng: SmallRng,
    opponent: Box<dyn Player>,
}

impl Session {
    /// New session seeded from the operating system.
    #[cfg(feature = "std")]
    pub fn new(fleet: FleetSpec) -> Self {
        Self::with_rng(fleet, SmallRng::from_rng(&mut rand::rng()))
    }

    /// New session with a reproducible random source.
    pub fn with_seed(fleet: FleetSpec, seed: u64) -> Self {
        Self::with_rng(fleet, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(fleet: FleetSpec, rng: SmallRng) -> Self {
        let tracker = FleetTracker::new(&fleet);
        Self {
            trackers: [tracker.clone(), tracker],
            fleet,
            grids: [Grid::new(), Grid::new()],
            phase: Phase::Preparation,
            outcome: None,
            turn: Side::Player,
            rng,
            opponent: Box::new(HuntPlayer::new()),
        }
    }

    /// Replace the opponent strategy.
    pub fn with_opponent(mut self, opponent: Box<dyn Player>) -> Self {
        self.opponent = opponent;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Winner once the phase is `Ended`.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Side allowed to fire next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn fleet(&self) -> &FleetSpec {
        &self.fleet
    }

    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side.index()]
    }

    /// Cell states of `side`'s grid; unstruck ships are hidden unless
    /// `reveal` is set.
    pub fn snapshot(&self, side: Side, reveal: bool) -> GridSnapshot {
        self.grids[side.index()].snapshot(reveal)
    }

    /// Ships of `length` that `side` still has to place.
    pub fn remaining(&self, side: Side, length: usize) -> usize {
        self.trackers[side.index()].remaining(length)
    }

    pub fn total_remaining(&self, side: Side) -> usize {
        self.trackers[side.index()].total_remaining()
    }

    pub fn is_fleet_complete(&self, side: Side) -> bool {
        self.trackers[side.index()].is_complete()
    }

    fn require(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::PhaseViolation {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Place one ship of `length` for `side`. Only during preparation, and
    /// only while a ship of that length is still unplaced.
    pub fn place_ship(
        &mut self,
        side: Side,
        x: usize,
        y: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.require(Phase::Preparation)?;
        let i = side.index();
        if self.trackers[i].remaining(length) == 0 {
            return Err(GameError::NoShipsRemaining { length });
        }
        self.grids[i].place(x, y, length, orientation)?;
        self.trackers[i].take(length);
        log::debug!("{:?} placed length {} at ({}, {})", side, length, x, y);
        Ok(())
    }

    /// Remove the ship covering (`x`, `y`) and return its length to the pool.
    /// Returns 0 when the cell holds no ship.
    pub fn remove_ship(&mut self, side: Side, x: usize, y: usize) -> Result<usize, GameError> {
        self.require(Phase::Preparation)?;
        let i = side.index();
        let length = self.grids[i].remove_ship_at(x, y);
        if length > 0 {
            self.trackers[i].restore(length);
            log::debug!("{:?} removed length {} at ({}, {})", side, length, x, y);
        }
        Ok(length)
    }

    /// Replace `side`'s grid with a randomly generated full fleet.
    pub fn randomize(&mut self, side: Side) -> Result<(), GameError> {
        self.require(Phase::Preparation)?;
        let i = side.index();
        match fleet::randomize_fleet(&mut self.grids[i], &self.fleet, &mut self.rng) {
            Ok(()) => {
                self.trackers[i].mark_complete();
                Ok(())
            }
            Err(err) => {
                self.trackers[i].reset();
                Err(fleet_error(side, err))
            }
        }
    }

    /// Empty `side`'s grid and make its whole fleet placeable again.
    pub fn clear(&mut self, side: Side) -> Result<(), GameError> {
        self.require(Phase::Preparation)?;
        self.grids[side.index()].reset();
        self.trackers[side.index()].reset();
        Ok(())
    }

    /// Back to preparation with two empty grids. Fleet, random source and
    /// opponent strategy are kept.
    pub fn reset(&mut self) {
        for grid in self.grids.iter_mut() {
            grid.reset();
        }
        for tracker in self.trackers.iter_mut() {
            tracker.reset();
        }
        self.phase = Phase::Preparation;
        self.outcome = None;
        self.turn = Side::Player;
        log::debug!("session reset");
    }

    /// Enter battle. The player fleet must be complete; the opponent fleet is
    /// generated by the opponent strategy unless it was already completed.
    /// The player fires first.
    pub fn start_battle(&mut self) -> Result<(), GameError> {
        self.require(Phase::Preparation)?;
        let remaining = self.trackers[Side::Player.index()].total_remaining();
        if remaining > 0 {
            return Err(GameError::FleetIncomplete {
                side: Side::Player,
                remaining,
            });
        }

        let o = Side::Opponent.index();
        if !self.trackers[o].is_complete() {
            self.grids[o].reset();
            if let Err(err) = self
                .opponent
                .place_ships(&mut self.rng, &mut self.grids[o], &self.fleet)
            {
                self.grids[o].reset();
                return Err(fleet_error(Side::Opponent, err));
            }

            let mut check = FleetTracker::new(&self.fleet);
            let extra = self.grids[o]
                .ships()
                .iter()
                .filter(|ship| !check.take(ship.length()))
                .count();
            if extra > 0 || !check.is_complete() {
                self.grids[o].reset();
                return Err(GameError::FleetIncomplete {
                    side: Side::Opponent,
                    remaining: check.total_remaining(),
                });
            }
            self.trackers[o].mark_complete();
        }

        self.phase = Phase::Battle;
        self.turn = Side::Player;
        self.outcome = None;
        log::info!("battle started with {} ships per side", self.fleet.len());
        Ok(())
    }

    /// Fire one shot from `actor` at the other side's grid.
    ///
    /// `Repeat` changes nothing, `Miss` passes the turn, `Hit` and `Sunk`
    /// keep it. Sinking the last ship ends the game.
    pub fn fire(&mut self, actor: Side, x: usize, y: usize) -> Result<ShotReport, GameError> {
        self.require(Phase::Battle)?;
        if actor != self.turn {
            return Err(GameError::NotYourTurn { expected: self.turn });
        }

        let target = &mut self.grids[actor.other().index()];
        let outcome = target.shoot(x, y).map_err(GameError::Board)?;
        log::debug!("{:?} fired at ({}, {}): {:?}", actor, x, y, outcome);

        match outcome {
            ShotOutcome::Repeat => {}
            ShotOutcome::Miss => self.turn = actor.other(),
            ShotOutcome::Hit | ShotOutcome::Sunk(_) => {
                if target.all_ships_sunk() {
                    self.phase = Phase::Ended;
                    self.outcome = Some(GameOutcome::won_by(actor));
                    log::info!("game over: {:?}", self.outcome);
                }
            }
        }

        Ok(ShotReport {
            actor,
            x,
            y,
            outcome,
            phase: self.phase,
            winner: self.outcome,
            next_turn: self.turn,
        })
    }

    /// One opponent shot chosen by the opponent strategy from the concealed
    /// view of the player grid.
    ///
    /// When the strategy gives up or names a cell off the board, the
    /// hunt-then-random heuristic picks from the same view instead, so the
    /// opponent can always finish its turn while the battle runs.
    pub fn opponent_step(&mut self) -> Result<ShotReport, GameError> {
        self.require(Phase::Battle)?;
        if self.turn != Side::Opponent {
            return Err(GameError::NotYourTurn { expected: self.turn });
        }
        let view = self.snapshot(Side::Player, false);
        let chosen = self
            .opponent
            .select_target(&mut self.rng, &view)
            .filter(|&(x, y)| view.get(x, y).is_some());
        let (x, y) = match chosen {
            Some(cell) => cell,
            None => {
                log::warn!("opponent strategy gave no usable target, using the heuristic");
                ai::choose_target(&view, &mut self.rng).ok_or(GameError::NoTarget)?
            }
        };
        let report = self.fire(Side::Opponent, x, y)?;
        self.opponent.handle_shot_result((x, y), &report.outcome);
        Ok(report)
    }

    /// Let the opponent fire until it misses or the game ends.
    ///
    /// Bounded by the number of unresolved player cells, so a strategy that
    /// keeps repeating shots cannot stall the caller. Returns an empty list
    /// when the player holds the turn.
    pub fn opponent_turn(&mut self) -> Result<Vec<ShotReport>, GameError> {
        self.require(Phase::Battle)?;
        let mut replies = Vec::new();
        self.run_opponent(&mut replies)?;
        Ok(replies)
    }

    fn run_opponent(&mut self, replies: &mut Vec<ShotReport>) -> Result<(), GameError> {
        let mut budget = self.grids[Side::Player.index()].unresolved_count();
        while budget > 0 && self.phase == Phase::Battle && self.turn == Side::Opponent {
            replies.push(self.opponent_step()?);
            budget -= 1;
        }
        Ok(())
    }

    /// Player shot followed by the opponent's reply when the shot missed.
    ///
    /// Only a rejected player shot is an `Err`; a failing reply is reported
    /// in [`TurnReport::reply_error`] next to the shots already applied.
    pub fn player_shot(&mut self, x: usize, y: usize) -> Result<TurnReport, GameError> {
        let shot = self.fire(Side::Player, x, y)?;
        let mut replies = Vec::new();
        let reply_error = if self.phase == Phase::Battle && self.turn == Side::Opponent {
            self.run_opponent(&mut replies).err()
        } else {
            None
        };
        Ok(TurnReport {
            shot,
            replies,
            reply_error,
        })
    }
}

fn fleet_error(side: Side, err: BoardError) -> GameError {
    match err {
        BoardError::UnableToPlaceShip { length } => GameError::FleetGeneration { side, length },
        other => GameError::from(other),
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("fleet", &self.fleet)
            .field("phase", &self.phase)
            .field("outcome", &self.outcome)
            .field("turn", &self.turn)
            .field("player", &self.grids[Side::Player.index()])
            .field("opponent", &self.grids[Side::Opponent.index()])
            .finish()
    }
}
