//! "Smart back" navigation for the admin UI.
//!
//! Browser history is unreliable after deep links and form posts, so the back
//! button resolves the current page's logical parent from a static
//! [`PageHierarchy`] and navigates there instead.
//!
//! Built to WebAssembly, the crate exposes two globals to page scripts:
//!
//! * `smartBack()`, for inline handlers such as `onclick="smartBack()"`
//! * `getParentPage(path)`, the bare resolver
//! * `getBreadcrumb(path)` and `isRootPage(path)`, for breadcrumb bars

use wasm_bindgen::prelude::*;

/// Common imports for host integrations.
pub mod prelude;

mod browser;
mod error;
pub mod init_data;
mod navigation;

pub use browser::BrowserHost;
pub use error::NavigationError;
pub use navigation::{NavigationHost, NavigationOutcome, smart_back};
pub use smartback_router::{PageHierarchy, default_hierarchy};

/// Entry point for `smartBack()`.
///
/// # Errors
///
/// Returns the host error as a JS string when `window`, `location` or
/// `history` refuse the operation.
#[wasm_bindgen(js_name = smartBack)]
pub fn smart_back_js() -> Result<(), JsValue> {
    let host = BrowserHost::new()?;
    smart_back(&host, init_data::active_hierarchy())?;

    Ok(())
}

/// Entry point for `getParentPage(path)`; `undefined` for a root page.
#[wasm_bindgen(js_name = getParentPage)]
pub fn get_parent_page(current: &str) -> Option<String> {
    init_data::active_hierarchy()
        .resolve(current)
        .map(str::to_owned)
}

/// Entry point for `getBreadcrumb(path)`: ancestors of `path`, nearest first.
#[wasm_bindgen(js_name = getBreadcrumb)]
pub fn get_breadcrumb(current: &str) -> Vec<String> {
    init_data::active_hierarchy()
        .trail(current)
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Entry point for `isRootPage(path)`.
#[wasm_bindgen(js_name = isRootPage)]
pub fn is_root_page(path: &str) -> bool {
    init_data::active_hierarchy().is_root(path)
}

/// Installs the console logger (and panic hook, if enabled) when the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Another module on the page may already own the logger.
    let _ = console_log::init_with_level(log::Level::Info);
}
