use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the host page while navigating back.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global `window` exists")]
    NoWindow,

    /// A `Location` or `History` call threw.
    #[error("{op} failed: {message}")]
    Host {
        /// The host operation that failed, e.g. `history.back`.
        op: &'static str,
        /// Whatever the host threw, rendered as text.
        message: String,
    },
}

impl NavigationError {
    pub(crate) fn host(op: &'static str) -> impl FnOnce(JsValue) -> Self {
        move |value| Self::Host {
            op,
            message: value.as_string().unwrap_or_else(|| format!("{value:?}")),
        }
    }
}

impl From<NavigationError> for JsValue {
    fn from(error: NavigationError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
