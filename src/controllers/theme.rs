//! Light/dark toggle bound to `.mode-toggle` and `.mode-icon`.

use web_sys::{Document, Element, HtmlElement};

use crate::config::SiteConfig;
use crate::error::UiError;
use crate::state::theme::{Theme, ThemeState};
use crate::util::dom;
use crate::util::preference::{LocalStorageStore, MemoryStore, PreferenceStore};

pub fn install(doc: &Document, config: &SiteConfig) -> Result<(), UiError> {
    let toggle = dom::query(doc, ".mode-toggle")?;
    let icon = dom::query(doc, ".mode-icon")?;
    let body = doc.body().ok_or(UiError::missing("body"))?;

    let store: Box<dyn PreferenceStore> = match LocalStorageStore::open() {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("{err}; theme choice will not survive reload");
            Box::new(MemoryStore::new())
        }
    };

    let mut state = ThemeState::restore(&store, &config.theme_storage_key);
    if let Some(mode) = state.initial_render() {
        render(&body, &icon, mode);
    }

    dom::listen(&toggle, "click", move |_| {
        if let Err(err) = state.toggle(&store) {
            log::warn!("theme preference not saved: {err}");
        }
        render(&body, &icon, state.mode());
    })
}

fn render(body: &HtmlElement, icon: &Element, mode: Theme) {
    dom::set_class(body, "light", mode.is_light());
    icon.set_text_content(Some(mode.glyph()));
}
