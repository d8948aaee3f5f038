//! Startup: config, logging, then every controller in turn.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use crate::error::UiError;

/// Outcome of installing each controller.
#[derive(Debug, Default)]
pub struct BootReport {
    installed: Vec<&'static str>,
    disabled: Vec<&'static str>,
    failed: Vec<(&'static str, String)>,
}

impl BootReport {
    /// Record and log one controller's install result.
    pub fn record(&mut self, name: &'static str, result: Result<(), UiError>) {
        match result {
            Ok(()) => self.installed.push(name),
            Err(err) if err.is_missing_hook() => {
                log::debug!("{name} disabled: {err}");
                self.disabled.push(name);
            }
            Err(err) => {
                log::warn!("{name} failed to install: {err}");
                self.failed.push((name, err.to_string()));
            }
        }
    }

    #[must_use]
    pub fn installed(&self) -> &[&'static str] {
        &self.installed
    }

    #[must_use]
    pub fn disabled(&self) -> &[&'static str] {
        &self.disabled
    }

    #[must_use]
    pub fn failed(&self) -> &[(&'static str, String)] {
        &self.failed
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} controllers installed, {} disabled, {} failed",
            self.installed.len(),
            self.disabled.len(),
            self.failed.len()
        )
    }
}

/// Read the embedded config, start logging and install every controller.
#[cfg(feature = "hydrate")]
pub fn run() {
    use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
    use crate::controllers;
    use crate::util::dom;

    let (window, doc) = match dom::window().and_then(|w| dom::document().map(|d| (w, d))) {
        Ok(pair) => pair,
        Err(err) => {
            init_logging(&SiteConfig::default());
            log::warn!("not running in a page: {err}");
            return;
        }
    };

    let raw = doc.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let (config, config_err) = SiteConfig::load(raw.as_deref());
    init_logging(&config);
    if let Some(err) = config_err {
        log::warn!("{err}; using default config");
    }

    let mut report = BootReport::default();
    report.record("preloader", controllers::preloader::install(&window, &doc, &config));
    report.record("theme", controllers::theme::install(&doc, &config));
    report.record("nav", controllers::nav::install(&doc));
    report.record("scroll", controllers::scroll::install(&window, &doc, &config));
    report.record("reveal", controllers::reveal::install(&doc, &config));
    report.record("counter", controllers::counter::install(&doc, &config));
    report.record("faq", controllers::faq::install(&doc));
    report.record("contact_form", controllers::contact_form::install(&doc));
    log::info!("{}", report.summary());
}

#[cfg(feature = "hydrate")]
fn init_logging(config: &crate::config::SiteConfig) {
    let filter = config.level_filter();
    let level = filter.to_level().unwrap_or(log::Level::Error);
    if console_log::init_with_level(level).is_ok() {
        log::set_max_level(filter);
    }
}
