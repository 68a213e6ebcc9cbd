//! Error types for the arcade workspace.
//!
//! The window and settings model itself never fails. These types cover the
//! ambient edges: loading the scenario description and writing the report.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum ArcadeError {
    /// Scenario loading errors
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading a scenario description.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The description could not be parsed
    #[error("Failed to parse scenario: {0}")]
    Parse(String),

    /// The description contains no windows
    #[error("Scenario contains no windows")]
    Empty,

    /// A window's settings failed validation
    #[error("Invalid scenario: {0}")]
    Invalid(String),
}

/// Result type alias for arcade operations.
pub type ArcadeResult<T> = Result<T, ArcadeError>;
