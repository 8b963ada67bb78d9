//! Configuration for lattice dumps.

use crate::colors::Colors;

/// Which parts of the lattice to dump, and how.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) scalars: bool,
    pub(crate) references: bool,
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scalars: true,
            references: true,
            colors: Colors::OFF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include the `[scalars]` section.
    pub fn scalars(mut self, value: bool) -> Self {
        self.scalars = value;
        self
    }

    /// Include the `[references]` section.
    pub fn references(mut self, value: bool) -> Self {
        self.references = value;
        self
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn colors(&self) -> Colors {
        self.colors
    }
}
