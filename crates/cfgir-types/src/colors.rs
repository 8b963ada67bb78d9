//! ANSI color codes for lattice dumps.
//!
//! - Blue: section headers, type names
//! - Dim: kind ids, comments
//! - Reset: return to default

/// ANSI color palette for terminal output.
///
/// Uses only standard 16-color codes so it reads in light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// ANSI escape codes for a terminal.
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Empty strings, for pipes and snapshots.
    pub const OFF: Self = Self {
        blue: "",
        dim: "",
        reset: "",
    };

    /// Pick [`Colors::ON`] or [`Colors::OFF`].
    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// Whether this palette emits escape codes.
    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }
}
