//! Page-provided hierarchy configuration, read from `window.SMART_BACK_CONFIG`.

use smartback_router::{HierarchyConfig, PageHierarchy, default_hierarchy};

/// Name of the global a host page may set to override the built-in tables.
pub const CONFIG_GLOBAL: &str = "SMART_BACK_CONFIG";

/// Build a hierarchy from a JSON config, logging and discarding it if invalid.
pub fn hierarchy_from_json(json: &str) -> Option<PageHierarchy> {
    match HierarchyConfig::from_json(json).and_then(|config| config.build()) {
        Ok(hierarchy) => {
            log::debug!(
                "using window.{CONFIG_GLOBAL} with {} pages",
                hierarchy.pages().len()
            );
            Some(hierarchy)
        }
        Err(error) => {
            log::warn!("ignoring window.{CONFIG_GLOBAL}: {error}");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod page {
    use smartback_router::PageHierarchy;
    use wasm_bindgen::JsValue;

    use super::{CONFIG_GLOBAL, hierarchy_from_json};

    /// `None` when the page sets no config or the config is invalid.
    pub(super) fn configured_hierarchy() -> Option<PageHierarchy> {
        let window = web_sys::window()?;
        let config = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
        if config.is_undefined() || config.is_null() {
            return None;
        }

        // Round-trip through JSON so serde does the validation.
        let json_string = js_sys::JSON::stringify(&config).ok()?;
        let json_str = json_string.as_string()?;

        hierarchy_from_json(&json_str)
    }
}

#[cfg(target_arch = "wasm32")]
lazy_static::lazy_static! {
    static ref PAGE_HIERARCHY: Option<PageHierarchy> = page::configured_hierarchy();
}

/// The hierarchy in effect for this page load.
///
/// The page config is read once; a reload picks up changes.
pub fn active_hierarchy() -> &'static PageHierarchy {
    #[cfg(target_arch = "wasm32")]
    {
        PAGE_HIERARCHY.as_ref().unwrap_or_else(default_hierarchy)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        default_hierarchy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_from_json() {
        let hierarchy = hierarchy_from_json(
            r#"{ "pages": [{ "path": "/" }, { "path": "/reports/", "parent": "/" }] }"#,
        )
        .unwrap();

        assert_eq!(hierarchy.resolve("/reports/"), Some("/"));
        // Sections left out keep the admin defaults.
        assert_eq!(
            hierarchy.resolve("/admin/core/project/1/change/"),
            Some("/admin/core/project/")
        );
    }

    #[test]
    fn test_invalid_config_is_discarded() {
        assert!(hierarchy_from_json("not json").is_none());
        assert!(
            hierarchy_from_json(r#"{ "details": [{ "pattern": "(", "parent": "/" }] }"#).is_none()
        );
        assert!(
            hierarchy_from_json(r#"{ "pages": [{ "path": "/" }, { "path": "/" }] }"#).is_none()
        );
    }

    #[test]
    fn test_active_hierarchy_defaults_off_browser() {
        assert_eq!(active_hierarchy().resolve("/admin/"), Some("/"));
    }
}
