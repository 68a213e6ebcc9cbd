//! # Arcade Demo
//!
//! Console driver for the game windows. Opens one window per game from the
//! embedded scenario and prints a status line for every action.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod scenario;
pub mod session;

pub use scenario::{ScenarioConfig, WindowSpec};
pub use session::Session;
