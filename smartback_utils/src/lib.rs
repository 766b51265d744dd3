#![allow(missing_docs)]

// Purely syntactic URL helpers. Nothing here decodes, normalizes or
// canonicalizes trailing slashes.

/// Split `current` on the first `?` into the path-only part and the raw query.
///
/// The query is empty when no `?` is present.
pub fn split_path_query(current: &str) -> (&str, &str) {
    match current.split_once('?') {
        Some((path, query)) => (path, query),
        None => (current, ""),
    }
}

/// `true` when `prefix` starts `path` and `path` is longer than it.
pub fn is_strict_prefix(prefix: &str, path: &str) -> bool {
    path.len() > prefix.len() && path.starts_with(prefix)
}

/// Join `location.pathname` and `location.search` the way the browser would
/// print them back as a relative URL.
pub fn join_location(pathname: &str, search: &str) -> String {
    if search.is_empty() {
        pathname.to_owned()
    } else if search.starts_with('?') {
        format!("{pathname}{search}")
    } else {
        format!("{pathname}?{search}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path_query() {
        assert_eq!(split_path_query("/admin/"), ("/admin/", ""));
        assert_eq!(
            split_path_query("/admin/core/finding/?project__id__exact=5"),
            ("/admin/core/finding/", "project__id__exact=5")
        );
        // Only the first `?` separates.
        assert_eq!(split_path_query("/a/?b=1?c=2"), ("/a/", "b=1?c=2"));
        assert_eq!(split_path_query("?q=1"), ("", "q=1"));
        assert_eq!(split_path_query(""), ("", ""));
    }

    #[test]
    fn test_is_strict_prefix() {
        assert!(is_strict_prefix("/admin/", "/admin/core/"));
        assert!(!is_strict_prefix("/admin/", "/admin/"));
        assert!(!is_strict_prefix("/admin/core/finding/", "/admin/core/findingnote/"));
        assert!(is_strict_prefix("", "/"));
    }

    #[test]
    fn test_join_location() {
        assert_eq!(join_location("/admin/", ""), "/admin/");
        assert_eq!(join_location("/admin/", "?a=1"), "/admin/?a=1");
        assert_eq!(join_location("/admin/", "a=1"), "/admin/?a=1");
    }
}
