//! Window geometry.

use serde::{Deserialize, Serialize};

/// Default window height in pixels.
pub const DEFAULT_HEIGHT: i32 = 600;
/// Default window width in pixels.
pub const DEFAULT_WIDTH: i32 = 800;

/// Height and width of a window.
///
/// Values are stored as given. Zero or negative sizes are legal and simply
/// produce a degenerate area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    /// Height in pixels
    pub height: i32,
    /// Width in pixels
    pub width: i32,
}

impl Geometry {
    /// Creates a new geometry.
    #[must_use]
    pub const fn new(height: i32, width: i32) -> Self {
        Self { height, width }
    }

    /// Returns `height * width`, widened so it cannot overflow.
    #[must_use]
    pub const fn area(self) -> i64 {
        self.height as i64 * self.width as i64
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}
