//! Plain windows.

use arcade_common::{Geometry, WindowId};
use tracing::debug;

/// A window with geometry, flags, and a memory figure.
///
/// The memory figure is the window's area. Game windows wrap a `Window` and
/// replace the figure with their own computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    id: WindowId,
    geometry: Geometry,
    memory_needed: i64,
    admin_rights: bool,
    shown: bool,
}

impl Window {
    /// Create a shown window and compute its memory.
    ///
    /// Geometry is not validated; degenerate sizes give degenerate memory.
    #[must_use]
    pub fn new(height: i32, width: i32, admin_rights: bool) -> Self {
        let mut window = Self {
            id: WindowId::next(),
            geometry: Geometry::new(height, width),
            memory_needed: 0,
            admin_rights,
            shown: true,
        };
        window.memory_needed = window.calculate_memory();

        debug!(
            "Created window {} ({}), memory {}",
            window.id, window.geometry, window.memory_needed
        );
        window
    }

    /// Memory for a plain window: `height * width`.
    #[must_use]
    pub const fn calculate_memory(&self) -> i64 {
        self.geometry.area()
    }

    /// Flip between shown and hidden.
    pub fn toggle_visibility(&mut self) {
        self.shown = !self.shown;
    }

    pub(crate) fn set_memory_needed(&mut self, memory: i64) {
        self.memory_needed = memory;
    }

    /// Window identity.
    #[must_use]
    pub const fn id(&self) -> WindowId {
        self.id
    }

    /// Window geometry.
    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.geometry.height
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.geometry.width
    }

    /// Memory figure from the most recent computation.
    #[must_use]
    pub const fn memory_needed(&self) -> i64 {
        self.memory_needed
    }

    /// Whether the window was opened with administrator rights.
    #[must_use]
    pub const fn has_admin_rights(&self) -> bool {
        self.admin_rights
    }

    /// Whether the window is currently shown.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.shown
    }
}

impl Default for Window {
    fn default() -> Self {
        let geometry = Geometry::default();
        Self::new(geometry.height, geometry.width, false)
    }
}
