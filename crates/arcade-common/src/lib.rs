//! # Arcade Common
//!
//! Shared types for the arcade window demo:
//! - Window identities issued from a process-wide counter
//! - Window geometry
//! - Error types for the ambient edges of the program
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod geometry;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::geometry::*;
    pub use crate::ids::*;
}

pub use prelude::*;
