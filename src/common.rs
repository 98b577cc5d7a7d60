//! Common types for the engine: sides, phases, shot outcomes and errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::ship::Ship;

/// One of the two boards of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The side being shot at when `self` fires.
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Fleets are being placed; no shots permitted.
    Preparation,
    Battle,
    Ended,
}

/// Winner of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    PlayerWon,
    OpponentWon,
}

impl GameOutcome {
    /// Outcome for a session in which `side` sank the last enemy ship.
    pub fn won_by(side: Side) -> Self {
        match side {
            Side::Player => GameOutcome::PlayerWon,
            Side::Opponent => GameOutcome::OpponentWon,
        }
    }
}

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// The cell was already resolved; nothing changed.
    Repeat,
    Miss,
    /// Struck a ship that still has unstruck cells.
    Hit,
    /// Struck the last live cell of a ship.
    Sunk(Ship),
}

impl ShotOutcome {
    /// `true` for `Hit` and `Sunk`, the outcomes that keep the turn.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk(_))
    }
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Coordinate lies outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// Ship would cover a cell occupied by another ship.
    ShipOverlaps,
    /// Ship would touch another ship, diagonals included.
    ShipTooClose,
    /// Ship length is zero or longer than the board.
    InvalidLength { length: usize },
    /// A ship cell has no owning ship record.
    UnknownShip { x: usize, y: usize },
    /// Fleet specification is empty or cannot fit on the board.
    InvalidFleet,
    /// Random placement exhausted its attempts for a ship.
    UnableToPlaceShip { length: usize },
}

impl BoardError {
    /// Errors that reject a placement and leave the grid unchanged.
    pub fn is_invalid_placement(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBounds { .. }
                | BoardError::ShipOverlaps
                | BoardError::ShipTooClose
                | BoardError::InvalidLength { .. }
        )
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { x, y } => BoardError::OutOfBounds { x, y },
            other => BoardError::BitBoard(other),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "bitboard error: {}", e),
            BoardError::OutOfBounds { x, y } => write!(f, "cell ({}, {}) is out of bounds", x, y),
            BoardError::ShipOverlaps => write!(f, "ship placement overlaps another ship"),
            BoardError::ShipTooClose => write!(f, "ship placement touches another ship"),
            BoardError::InvalidLength { length } => write!(f, "invalid ship length {}", length),
            BoardError::UnknownShip { x, y } => write!(f, "no ship record owns cell ({}, {})", x, y),
            BoardError::InvalidFleet => write!(f, "fleet specification cannot be placed"),
            BoardError::UnableToPlaceShip { length } => {
                write!(f, "unable to place ship of length {}", length)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by session operations. None of them is fatal; the session
/// is unchanged and the caller may retry with valid input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameError {
    /// Placement rejected by the grid.
    InvalidPlacement(BoardError),
    /// Any other grid error.
    Board(BoardError),
    /// Operation not allowed in the current phase.
    PhaseViolation { expected: Phase, actual: Phase },
    /// Battle cannot start until every ship of `side` is placed.
    FleetIncomplete { side: Side, remaining: usize },
    /// No ship of this length is left to place.
    NoShipsRemaining { length: usize },
    /// The other side holds the turn.
    NotYourTurn { expected: Side },
    /// The targeting strategy found no unresolved cell.
    NoTarget,
    /// Randomized fleet generation gave up on a ship.
    FleetGeneration { side: Side, length: usize },
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        if err.is_invalid_placement() {
            GameError::InvalidPlacement(err)
        } else {
            GameError::Board(err)
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidPlacement(e) => write!(f, "invalid placement: {}", e),
            GameError::Board(e) => write!(f, "{}", e),
            GameError::PhaseViolation { expected, actual } => write!(
                f,
                "operation requires phase {:?} but session is in {:?}",
                expected, actual
            ),
            GameError::FleetIncomplete { side, remaining } => {
                write!(f, "{:?} fleet has {} ships left to place", side, remaining)
            }
            GameError::NoShipsRemaining { length } => {
                write!(f, "no ship of length {} left to place", length)
            }
            GameError::NotYourTurn { expected } => write!(f, "it is {:?}'s turn", expected),
            GameError::NoTarget => write!(f, "no unresolved cell left to target"),
            GameError::FleetGeneration { side, length } => write!(
                f,
                "could not generate {:?} fleet: ship of length {} did not fit",
                side, length
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
