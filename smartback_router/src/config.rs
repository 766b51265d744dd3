use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::hierarchy::{PageEntry, PageHierarchy, QueryRule};

/// Serialized form of a detail pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailConfig {
    /// Regular expression tested against the path-only part.
    pub pattern: String,
    /// Listing page the pattern resolves to.
    pub parent: String,
}

/// JSON-facing description of a [`PageHierarchy`].
///
/// Every section is optional; a missing one keeps the admin defaults, so a
/// host page can replace just the query rules or just the landing page.
///
/// ```json
/// {
///   "pages": [{ "path": "/", "parent": null }, { "path": "/admin/", "parent": "/" }],
///   "details": [{ "pattern": "^/admin/core/project/[0-9]+/(change|delete)/$", "parent": "/admin/core/project/" }],
///   "query_rules": [{ "path": "/admin/core/finding/", "contains": "project__id__exact=", "parent": "/admin/core/project/" }],
///   "fallback": "/",
///   "landing": "/admin/"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Page table, in declaration order.
    pub pages: Vec<PageEntry>,
    /// Detail patterns, first match wins.
    pub details: Vec<DetailConfig>,
    /// Query-qualified overrides, first match wins.
    pub query_rules: Vec<QueryRule>,
    /// Returned when nothing matches.
    pub fallback: String,
    /// Where a root page with no history sends the user.
    pub landing: String,
}

impl HierarchyConfig {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate and build the hierarchy.
    pub fn build(&self) -> Result<PageHierarchy, ConfigError> {
        let mut builder = PageHierarchy::builder()
            .pages(self.pages.iter().cloned())
            .fallback(&self.fallback)
            .landing(&self.landing);

        for detail in &self.details {
            builder = builder.detail(&detail.pattern, &detail.parent);
        }
        for rule in &self.query_rules {
            builder = builder.query_rule(&rule.path, &rule.contains, &rule.parent);
        }

        builder.build()
    }
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            pages: ADMIN_PAGES
                .iter()
                .map(|(path, parent)| PageEntry {
                    path: (*path).to_owned(),
                    parent: parent.map(str::to_owned),
                })
                .collect(),
            details: ADMIN_DETAILS
                .iter()
                .map(|(pattern, parent)| DetailConfig {
                    pattern: (*pattern).to_owned(),
                    parent: (*parent).to_owned(),
                })
                .collect(),
            query_rules: ADMIN_QUERY_RULES
                .iter()
                .map(|(path, contains, parent)| QueryRule {
                    path: (*path).to_owned(),
                    contains: (*contains).to_owned(),
                    parent: (*parent).to_owned(),
                })
                .collect(),
            fallback: String::from("/"),
            landing: String::from("/admin/"),
        }
    }
}

// Declaration order matters: it is the tie-break order for the prefix step.
const ADMIN_PAGES: &[(&str, Option<&str>)] = &[
    ("/", None),
    ("/admin/", Some("/")),
    ("/api/", Some("/")),
    ("/api/quick-scan/", Some("/admin/")),
    ("/api/task-monitor/", Some("/admin/")),
    ("/api/error-logs/", Some("/admin/")),
    ("/api/overview/", Some("/admin/")),
    ("/admin/core/", Some("/admin/")),
    ("/admin/auth/", Some("/admin/")),
    ("/api/scan-logs/", Some("/api/task-monitor/")),
    ("/admin/core/project/", Some("/admin/")),
    ("/admin/core/finding/", Some("/admin/")),
    ("/admin/core/department/", Some("/admin/")),
    ("/admin/core/scantask/", Some("/admin/")),
    ("/admin/core/findingnote/", Some("/admin/")),
    ("/admin/core/statushistory/", Some("/admin/")),
    ("/admin/auth/user/", Some("/admin/")),
    ("/admin/auth/group/", Some("/admin/")),
    ("/admin/core/project/add/", Some("/admin/core/project/")),
    ("/admin/core/finding/add/", Some("/admin/core/finding/")),
    ("/admin/core/department/add/", Some("/admin/core/department/")),
    ("/admin/core/scantask/add/", Some("/admin/core/scantask/")),
    ("/admin/auth/user/add/", Some("/admin/auth/user/")),
    ("/admin/auth/group/add/", Some("/admin/auth/group/")),
];

// Record ids are ASCII digits only.
const ADMIN_DETAILS: &[(&str, &str)] = &[
    (r"^/admin/core/project/[0-9]+/(change|delete)/$", "/admin/core/project/"),
    (r"^/admin/core/finding/[0-9]+/(change|delete)/$", "/admin/core/finding/"),
    (r"^/admin/core/department/[0-9]+/(change|delete)/$", "/admin/core/department/"),
    (r"^/admin/core/scantask/[0-9]+/(change|delete)/$", "/admin/core/scantask/"),
    (r"^/admin/auth/user/[0-9]+/(change|delete)/$", "/admin/auth/user/"),
    (r"^/admin/auth/group/[0-9]+/(change|delete)/$", "/admin/auth/group/"),
];

const ADMIN_QUERY_RULES: &[(&str, &str, &str)] = &[
    ("/admin/core/finding/", "project__id__exact=", "/admin/core/project/"),
    ("/admin/core/project/", "department__id__exact=", "/"),
];
