//! # Arcade Games
//!
//! Game windows for the arcade demo.
//!
//! This crate provides the window model and the per-game settings:
//! - Plain windows with geometry, flags, and an area-based memory figure
//! - Game settings (shared fields plus one extra field per game)
//! - Game windows that own their settings and perform actions
//!
//! Supported games are Rock-Paper-Scissors, Tic-Tac-Toe, and Sudoku.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod game_window;
pub mod settings;
pub mod window;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::game_window::*;
    pub use crate::settings::*;
    pub use crate::window::*;
}

pub use prelude::*;
