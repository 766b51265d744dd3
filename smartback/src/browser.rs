use web_sys::Window;

use crate::error::NavigationError;
use crate::navigation::NavigationHost;

/// [`NavigationHost`] backed by the page's `window`.
#[derive(Debug, Clone)]
pub struct BrowserHost {
    window: Window,
}

impl BrowserHost {
    /// Bind to the global `window`.
    pub fn new() -> Result<Self, NavigationError> {
        let window = web_sys::window().ok_or(NavigationError::NoWindow)?;

        Ok(Self { window })
    }

    /// Bind to a specific window, e.g. an iframe's.
    pub fn from_window(window: Window) -> Self {
        Self { window }
    }
}

impl NavigationHost for BrowserHost {
    fn pathname(&self) -> Result<String, NavigationError> {
        self.window
            .location()
            .pathname()
            .map_err(NavigationError::host("location.pathname"))
    }

    fn search(&self) -> Result<String, NavigationError> {
        self.window
            .location()
            .search()
            .map_err(NavigationError::host("location.search"))
    }

    fn history_length(&self) -> Result<u32, NavigationError> {
        self.window
            .history()
            .map_err(NavigationError::host("window.history"))?
            .length()
            .map_err(NavigationError::host("history.length"))
    }

    fn assign(&self, href: &str) -> Result<(), NavigationError> {
        self.window
            .location()
            .set_href(href)
            .map_err(NavigationError::host("location.href"))
    }

    fn back(&self) -> Result<(), NavigationError> {
        self.window
            .history()
            .map_err(NavigationError::host("window.history"))?
            .back()
            .map_err(NavigationError::host("history.back"))
    }
}
