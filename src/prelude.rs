//! Commonly used types and utilities for ease of import.

pub use crate::{
    choose_target, CellState, FleetSpec, GameError, GameOutcome, Grid, GridSnapshot, HuntPlayer,
    Orientation, Phase, Player, Session, ShotOutcome, ShotReport, Side, TurnReport,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
