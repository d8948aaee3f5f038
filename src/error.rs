//! Crate error type.
//!
//! Nothing in the interaction layer is fatal. Controllers return these errors
//! to the boot sequence, which decides whether to log them as a disabled
//! feature or as a recoverable failure.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A markup hook the controller needs is not on the page.
    #[error("missing DOM hook `{hook}`")]
    MissingHook { hook: &'static str },
    /// A browser API call threw.
    #[error("{context}: {message}")]
    Js { context: &'static str, message: String },
    /// The embedded site configuration could not be parsed.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    /// The embedded site configuration parsed but holds an unusable value.
    #[error("invalid site config value `{field}`: {reason}")]
    ConfigValue { field: &'static str, reason: String },
    #[error("localStorage is unavailable")]
    StorageUnavailable,
}

impl UiError {
    #[must_use]
    pub fn missing(hook: &'static str) -> Self {
        Self::MissingHook { hook }
    }

    /// Whether this error only means the feature is absent from the page.
    #[must_use]
    pub fn is_missing_hook(&self) -> bool {
        matches!(self, Self::MissingHook { .. })
    }

    /// Convert a thrown JS value into a `Js` error tagged with `context`.
    #[cfg(feature = "hydrate")]
    pub fn js(context: &'static str, value: &wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str("message"))
                    .map(|m| m.as_string())
                    .unwrap_or_default()
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js { context, message }
    }
}

/// Extension for `web-sys` results so thrown values carry a context string.
#[cfg(feature = "hydrate")]
pub trait JsResultExt<T> {
    fn context(self, context: &'static str) -> Result<T, UiError>;
}

#[cfg(feature = "hydrate")]
impl<T> JsResultExt<T> for Result<T, wasm_bindgen::JsValue> {
    fn context(self, context: &'static str) -> Result<T, UiError> {
        self.map_err(|value| UiError::js(context, &value))
    }
}
