//! Parent-page resolution for the admin UI's "smart back" button.
//!
//! A [`PageHierarchy`] maps the current location to the page a user most
//! plausibly came from, without trusting browser history.

mod config;
mod error;
mod hierarchy;
mod prefix_match;

pub use config::{DetailConfig, HierarchyConfig};
pub use error::ConfigError;
pub use hierarchy::{
    DetailPattern, HierarchyBuilder, MatchStep, PageEntry, PageHierarchy, QueryRule, Resolution,
};

lazy_static::lazy_static! {
    static ref DEFAULT_HIERARCHY: PageHierarchy = HierarchyConfig::default()
        .build()
        .expect("built-in admin hierarchy is valid");
}

/// The built-in admin hierarchy.
pub fn default_hierarchy() -> &'static PageHierarchy {
    &DEFAULT_HIERARCHY
}
