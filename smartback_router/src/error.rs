use thiserror::Error;

/// Reasons a page hierarchy could not be built from its configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for [`crate::HierarchyConfig`].
    #[error("invalid hierarchy config: {0}")]
    Json(#[from] serde_json::Error),

    /// A detail pattern failed to compile.
    #[error("invalid detail pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern text as configured.
        pattern: String,
        /// Compilation error from the regex engine.
        #[source]
        source: regex::Error,
    },

    /// The same path was declared twice in the page table.
    #[error("page '{0}' is declared more than once")]
    DuplicatePage(String),

    /// A query rule with an empty marker would match every query string.
    #[error("query rule for '{0}' has an empty marker")]
    EmptyQueryMarker(String),
}
