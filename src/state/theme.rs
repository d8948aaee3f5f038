//! Light/dark theme preference.
//!
//! The site ships dark. Light mode is a `light` class on `<body>` plus a sun
//! glyph in the toggle; the choice is written back on every toggle.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::error::UiError;
use crate::util::preference::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse a stored preference. Anything but the two known values is absent.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Indicator glyph shown in the mode toggle.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => "\u{2600}",
            Self::Dark => "\u{263E}",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}

/// Current theme bound to the store key it persists under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeState {
    mode: Theme,
    key: String,
}

impl ThemeState {
    /// Restore the mode saved under `key`, or the dark default.
    pub fn restore<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Self {
        let mode = store
            .load(key)
            .as_deref()
            .and_then(Theme::from_stored)
            .unwrap_or_default();
        Self { mode, key: key.to_owned() }
    }

    #[must_use]
    pub fn mode(&self) -> Theme {
        self.mode
    }

    /// Mode to paint at startup. Dark is the markup default and is left alone.
    #[must_use]
    pub fn initial_render(&self) -> Option<Theme> {
        self.mode.is_light().then_some(self.mode)
    }

    /// Flip the mode and persist it.
    ///
    /// The in-memory mode flips even if the write fails, so the page still
    /// responds to the click; the error is returned for logging.
    pub fn toggle<S: PreferenceStore + ?Sized>(&mut self, store: &S) -> Result<Theme, UiError> {
        self.mode = self.mode.toggled();
        store.save(&self.key, self.mode.as_str())?;
        Ok(self.mode)
    }
}
