use serde::Serialize;

use super::reading::{read_boolean, read_integer};
use crate::keyfile::KeyFile;

pub(crate) const SECTION: &str = "window";

/// Main window geometry, restored on the next start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowConfig {
    /// Horizontal position, `-1` lets the window manager decide.
    pub x: i32,

    /// Vertical position, `-1` lets the window manager decide.
    pub y: i32,

    /// Window width in pixels.
    pub width: i32,

    /// Window height in pixels.
    pub height: i32,

    /// Whether the window was maximized.
    pub maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            x: -1,
            y: -1,
            width: 1000,
            height: 500,
            maximized: false,
        }
    }
}

impl WindowConfig {
    /// Whether a stored position should be applied to the window.
    pub fn has_position(&self) -> bool {
        self.x >= 0 && self.y >= 0
    }

    pub(crate) fn read_from(document: &KeyFile) -> Self {
        let defaults = Self::default();

        Self {
            x: read_integer(document, SECTION, "x", defaults.x),
            y: read_integer(document, SECTION, "y", defaults.y),
            width: read_integer(document, SECTION, "width", defaults.width),
            height: read_integer(document, SECTION, "height", defaults.height),
            maximized: read_boolean(document, SECTION, "maximized", defaults.maximized),
        }
    }

    pub(crate) fn write_to(&self, document: &mut KeyFile) {
        document.set_integer(SECTION, "x", self.x);
        document.set_integer(SECTION, "y", self.y);
        document.set_integer(SECTION, "width", self.width);
        document.set_integer(SECTION, "height", self.height);
        document.set_boolean(SECTION, "maximized", self.maximized);
    }
}
