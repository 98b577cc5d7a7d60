#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
pub mod prelude;
mod ship;
mod shot;
mod snapshot;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
pub use player_ai::*;
pub use ship::*;
pub use snapshot::*;
