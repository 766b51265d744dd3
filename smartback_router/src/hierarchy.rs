use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use smartback_utils::split_path_query;

use crate::error::ConfigError;
use crate::prefix_match::{longest_prefix_parent, order_by_length};

/// One row of the page table: a canonical path and its logical parent.
///
/// A `None` parent marks a root page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Canonical path, without query string.
    pub path: String,
    /// Logical parent, or `None` for a root page.
    #[serde(default)]
    pub parent: Option<String>,
}

/// Recognizes single-record pages (`/<listing>/<id>/change/` and friends).
#[derive(Debug, Clone)]
pub struct DetailPattern {
    regex: Regex,
    parent: String,
}

impl DetailPattern {
    /// Compile `pattern` into a matcher that resolves to `parent`.
    pub fn new(pattern: &str, parent: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::Pattern {
            pattern: pattern.to_owned(),
            source,
        })?;

        Ok(Self {
            regex,
            parent: parent.to_owned(),
        })
    }

    /// The pattern text this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Listing page a matching path resolves to.
    pub fn parent(&self) -> &str {
        &self.parent
    }

    fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// Overrides the parent of `path` when the raw query contains `contains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRule {
    /// Exact path-only the rule applies to.
    pub path: String,
    /// Substring that must occur in the raw query string.
    pub contains: String,
    /// Parent returned when the rule applies.
    pub parent: String,
}

impl QueryRule {
    fn applies(&self, path: &str, query: &str) -> bool {
        self.path == path && query.contains(self.contains.as_str())
    }
}

/// Which resolution step produced a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStep {
    /// The path is a key of the page table.
    Exact,
    /// A query rule overrode the page table or matched an unlisted path.
    QueryRule,
    /// A detail pattern matched.
    Detail,
    /// A declared page strictly prefixes the path.
    Prefix,
    /// Nothing matched; the fallback destination was used.
    Fallback,
}

/// Outcome of [`PageHierarchy::resolve_with_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Parent path, or `None` when the current page is a declared root.
    pub parent: Option<&'a str>,
    /// Step that decided the result.
    pub step: MatchStep,
}

/// Immutable page-to-parent map for the admin UI.
///
/// Built once (see [`crate::default_hierarchy`] or [`HierarchyBuilder`]) and
/// shared by reference. Declaration order is significant for detail patterns,
/// query rules and equal-length prefix candidates, and is preserved throughout.
#[derive(Debug, Clone)]
pub struct PageHierarchy {
    pages: Vec<PageEntry>,
    index: HashMap<String, usize>,
    by_length: Vec<usize>,
    details: Vec<DetailPattern>,
    query_rules: Vec<QueryRule>,
    fallback: String,
    landing: String,
}

impl PageHierarchy {
    /// Start an empty hierarchy with `/` as fallback and `/admin/` as landing page.
    pub fn builder() -> HierarchyBuilder {
        HierarchyBuilder::default()
    }

    /// Resolves the logical parent of `current`.
    ///
    /// `current` is a path optionally followed by `?` and a raw query string,
    /// e.g. `location.pathname + location.search`.
    ///
    /// # Returns
    ///
    /// `None` only when the path-only part is declared as a root page. Any
    /// other input yields a path, falling back to [`Self::fallback`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// let hierarchy = smartback_router::default_hierarchy();
    ///
    /// assert_eq!(hierarchy.resolve("/admin/core/project/42/change/"), Some("/admin/core/project/"));
    /// assert_eq!(hierarchy.resolve("/"), None);
    /// ```
    pub fn resolve(&self, current: &str) -> Option<&str> {
        self.resolve_with_step(current).parent
    }

    /// Like [`Self::resolve`], also reporting which step matched.
    ///
    /// Steps run in this order, first hit wins:
    ///
    /// 1. exact page-table key (a query rule for that key may override it)
    /// 2. detail patterns, in declaration order
    /// 3. query rules, in declaration order
    /// 4. longest declared non-root page that strictly prefixes the path
    /// 5. the fallback destination
    pub fn resolve_with_step(&self, current: &str) -> Resolution<'_> {
        let (path, query) = split_path_query(current);

        if let Some(&index) = self.index.get(path) {
            if let Some(rule) = self.query_rule_for(path, query) {
                return Resolution {
                    parent: Some(rule.parent.as_str()),
                    step: MatchStep::QueryRule,
                };
            }

            return Resolution {
                parent: self.pages[index].parent.as_deref(),
                step: MatchStep::Exact,
            };
        }

        if let Some(detail) = self.details.iter().find(|detail| detail.matches(path)) {
            return Resolution {
                parent: Some(detail.parent.as_str()),
                step: MatchStep::Detail,
            };
        }

        if let Some(rule) = self.query_rule_for(path, query) {
            return Resolution {
                parent: Some(rule.parent.as_str()),
                step: MatchStep::QueryRule,
            };
        }

        if let Some(parent) = longest_prefix_parent(&self.pages, &self.by_length, path) {
            return Resolution {
                parent: Some(parent),
                step: MatchStep::Prefix,
            };
        }

        Resolution {
            parent: Some(self.fallback.as_str()),
            step: MatchStep::Fallback,
        }
    }

    /// Breadcrumb trail from `current` upwards, nearest ancestor first.
    ///
    /// Stops at a declared root or as soon as a destination repeats, so it
    /// terminates even when the fallback is not itself a root.
    pub fn trail(&self, current: &str) -> Vec<&str> {
        let mut trail: Vec<&str> = Vec::new();
        let mut next = self.resolve(current);

        while let Some(parent) = next {
            if trail.contains(&parent) {
                break;
            }
            trail.push(parent);
            next = self.resolve(parent);
        }

        trail
    }

    /// `true` if `path` is declared with no parent.
    pub fn is_root(&self, path: &str) -> bool {
        self.index
            .get(path)
            .is_some_and(|&index| self.pages[index].parent.is_none())
    }

    /// Page table in declaration order.
    pub fn pages(&self) -> &[PageEntry] {
        &self.pages
    }

    /// Detail patterns in declaration order.
    pub fn details(&self) -> &[DetailPattern] {
        &self.details
    }

    /// Query rules in declaration order.
    pub fn query_rules(&self) -> &[QueryRule] {
        &self.query_rules
    }

    /// Destination when nothing in the tables matches.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Destination of last resort when a root page has no history to go back to.
    pub fn landing(&self) -> &str {
        &self.landing
    }

    fn query_rule_for(&self, path: &str, query: &str) -> Option<&QueryRule> {
        if query.is_empty() {
            return None;
        }

        self.query_rules.iter().find(|rule| rule.applies(path, query))
    }
}

/// Collects pages, patterns and rules, then validates them into a [`PageHierarchy`].
#[derive(Debug)]
pub struct HierarchyBuilder {
    pages: Vec<PageEntry>,
    details: Vec<(String, String)>,
    query_rules: Vec<QueryRule>,
    fallback: String,
    landing: String,
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self {
            pages: Vec::new(),
            details: Vec::new(),
            query_rules: Vec::new(),
            fallback: String::from("/"),
            landing: String::from("/admin/"),
        }
    }
}

impl HierarchyBuilder {
    /// Declare `path` with logical parent `parent`.
    pub fn page(mut self, path: &str, parent: &str) -> Self {
        self.pages.push(PageEntry {
            path: path.to_owned(),
            parent: Some(parent.to_owned()),
        });
        self
    }

    /// Declare `path` as a root page.
    pub fn root(mut self, path: &str) -> Self {
        self.pages.push(PageEntry {
            path: path.to_owned(),
            parent: None,
        });
        self
    }

    /// Append already-formed page entries.
    pub fn pages(mut self, pages: impl IntoIterator<Item = PageEntry>) -> Self {
        self.pages.extend(pages);
        self
    }

    /// Append a detail pattern; compiled in [`Self::build`].
    pub fn detail(mut self, pattern: &str, parent: &str) -> Self {
        self.details.push((pattern.to_owned(), parent.to_owned()));
        self
    }

    /// Append a query-qualified rule.
    pub fn query_rule(mut self, path: &str, contains: &str, parent: &str) -> Self {
        self.query_rules.push(QueryRule {
            path: path.to_owned(),
            contains: contains.to_owned(),
            parent: parent.to_owned(),
        });
        self
    }

    /// Destination when nothing matches; `/` unless set.
    pub fn fallback(mut self, fallback: &str) -> Self {
        fallback.clone_into(&mut self.fallback);
        self
    }

    /// Last-resort destination for a root page without history; `/admin/` unless set.
    pub fn landing(mut self, landing: &str) -> Self {
        landing.clone_into(&mut self.landing);
        self
    }

    /// Validate and freeze.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::DuplicatePage`] if a path is declared twice
    /// * [`ConfigError::Pattern`] if a detail pattern does not compile
    /// * [`ConfigError::EmptyQueryMarker`] if a query rule has nothing to look for
    pub fn build(self) -> Result<PageHierarchy, ConfigError> {
        let mut index = HashMap::with_capacity(self.pages.len());
        for (position, entry) in self.pages.iter().enumerate() {
            if index.insert(entry.path.clone(), position).is_some() {
                return Err(ConfigError::DuplicatePage(entry.path.clone()));
            }
        }

        let details = self
            .details
            .iter()
            .map(|(pattern, parent)| DetailPattern::new(pattern, parent))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(rule) = self.query_rules.iter().find(|rule| rule.contains.is_empty()) {
            return Err(ConfigError::EmptyQueryMarker(rule.path.clone()));
        }

        let by_length = order_by_length(&self.pages);

        Ok(PageHierarchy {
            pages: self.pages,
            index,
            by_length,
            details,
            query_rules: self.query_rules,
            fallback: self.fallback,
            landing: self.landing,
        })
    }
}
