// Fallback ancestor lookup over the page table.
//
// A declared page is treated as a structural ancestor of any path it is a
// strict string prefix of. Candidates are tried from the longest key down:
// 1. "/admin/core/project/" beats "/admin/" for "/admin/core/project/export/"
// 2. equal keys never match ("/admin/" is not its own ancestor)
// 3. "/admin/core/finding/" is not an ancestor of "/admin/core/findingnote/"
// 4. declared roots are skipped, so a path under "/" alone falls through
use smartback_utils::is_strict_prefix;

use crate::hierarchy::PageEntry;

/// Page indices ordered by descending path length.
///
/// `sort_by` is stable, so keys of equal length keep their declaration order.
pub(crate) fn order_by_length(pages: &[PageEntry]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..pages.len()).collect();
    order.sort_by(|&a, &b| pages[b].path.len().cmp(&pages[a].path.len()));

    order
}

/// Parent of the longest non-root page that strictly prefixes `path`.
pub(crate) fn longest_prefix_parent<'a>(
    pages: &'a [PageEntry],
    order: &[usize],
    path: &str,
) -> Option<&'a str> {
    order
        .iter()
        .map(|&index| &pages[index])
        .filter(|entry| is_strict_prefix(&entry.path, path))
        .find_map(|entry| entry.parent.as_deref())
}
