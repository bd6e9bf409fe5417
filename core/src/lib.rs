//! Board and game-state engine for single-player Minesweeper.
//!
//! A [`GameSession`] turns reveal requests from a front-end into state
//! transitions. The [`MineField`] is generated lazily on the first reveal so
//! the first cell opened is never a mine.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub use cell::*;
pub use config::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod cell;
mod config;
mod error;
mod field;
mod generator;
mod session;
mod types;
