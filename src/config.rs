//! Site configuration.
//!
//! The defaults match the shipped site. A page may override any field with an
//! embedded JSON block:
//!
//! ```html
//! <script id="folio-config" type="application/json">
//!   { "preloader_delay_ms": 300, "log_level": "debug" }
//! </script>
//! ```
//!
//! TRADE-OFFS
//! ==========
//! A bad config block never disables the page. `load` falls back to defaults
//! and hands the error back so boot can report it once logging is running.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;

/// Element id of the optional embedded config block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Delay between the `load` event and hiding the preloader.
    pub preloader_delay_ms: u32,
    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: String,
    /// Scroll offset past which the back-to-top control is shown.
    pub back_to_top_threshold_px: f64,
    /// Visible fraction at which `.reveal` elements fire.
    pub reveal_threshold: f64,
    /// Visible fraction at which `.counter` elements start animating.
    pub counter_threshold: f64,
    /// Frame budget for a counter ramp.
    pub counter_frames: u32,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            preloader_delay_ms: 600,
            theme_storage_key: "theme".to_owned(),
            back_to_top_threshold_px: 400.0,
            reveal_threshold: 0.15,
            counter_threshold: 0.4,
            counter_frames: 60,
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON override block. Missing keys keep defaults.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `raw` when present, falling back to defaults on any error.
    ///
    /// The error, if any, is returned alongside the config so the caller can
    /// log it after the logger is installed.
    pub fn load(raw: Option<&str>) -> (Self, Option<UiError>) {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => (Self::default(), None),
            Some(raw) => match Self::from_json(raw) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
        }
    }

    pub fn validate(&self) -> Result<(), UiError> {
        check_fraction("reveal_threshold", self.reveal_threshold)?;
        check_fraction("counter_threshold", self.counter_threshold)?;
        if self.counter_frames == 0 {
            return Err(UiError::ConfigValue {
                field: "counter_frames",
                reason: "must be at least 1".to_owned(),
            });
        }
        if !self.back_to_top_threshold_px.is_finite() || self.back_to_top_threshold_px < 0.0 {
            return Err(UiError::ConfigValue {
                field: "back_to_top_threshold_px",
                reason: "must be a non-negative number".to_owned(),
            });
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(UiError::ConfigValue {
                field: "theme_storage_key",
                reason: "must not be empty".to_owned(),
            });
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(UiError::ConfigValue {
                field: "log_level",
                reason: format!("unknown level `{}`", self.log_level),
            });
        }
        Ok(())
    }

    /// Configured log level. Falls back to `Info` for an unparseable value.
    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

fn check_fraction(field: &'static str, value: f64) -> Result<(), UiError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(UiError::ConfigValue { field, reason: format!("{value} is outside [0, 1]") })
    }
}
