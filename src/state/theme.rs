//! Color theme preference model.
//!
//! DESIGN
//! ======
//! The persisted contract is a single localStorage string: `"dark"` selects
//! the dark theme and any other value, including an absent key, selects
//! light. Visitors with no stored preference therefore always start light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// localStorage key holding the persisted theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Color theme for the documentation pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Default presentation; no class on the document root.
    #[default]
    Light,
    /// Dark presentation; adds the `dark` class to the document root.
    Dark,
}

impl Theme {
    /// Map a stored preference string onto a theme. Only the exact string
    /// `"dark"` selects dark; anything else falls back to light.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The string persisted to storage for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}
