//! Route activation matching.
//!
//! A node's route is matched against the current path segment by segment.
//! `:name` segments in a route match any single path segment, so
//! `/patients/:id` matches `/patients/42`. Among siblings the most specific
//! match wins; see [`active_index`].

use super::node::{MatchMode, MenuNode};

/// How specific a route match is. Larger is more specific.
///
/// Ordered by matched segment count first, then by how many of those
/// segments were literals rather than parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    pub segments: usize,
    pub literals: usize,
}

/// Normalize a current path for matching and cache keys.
///
/// Drops any query string or fragment, collapses empty segments and trailing
/// slashes, and guarantees a leading `/`. An empty path is the root.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let segments: Vec<&str> = segments(&path[..end]).collect();
    format!("/{}", segments.join("/"))
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Match a route pattern against a path.
///
/// Returns the match specificity, or `None` when the route does not apply.
///
/// Pattern: "/labs/:id", mode: Prefix
/// Path: "/labs/17/complete"
/// Result: Some(Specificity { segments: 2, literals: 1 })
pub fn match_route(pattern: &str, mode: MatchMode, path: &str) -> Option<Specificity> {
    let pattern_parts: Vec<&str> = segments(pattern).collect();
    let path = normalize_path(path);
    let path_parts: Vec<&str> = segments(&path).collect();

    // A prefix `/` would claim every path.
    let mode = if pattern_parts.is_empty() {
        MatchMode::Exact
    } else {
        mode
    };

    let length_ok = match mode {
        MatchMode::Exact => pattern_parts.len() == path_parts.len(),
        MatchMode::Prefix => pattern_parts.len() <= path_parts.len(),
    };
    if !length_ok {
        return None;
    }

    let mut literals = 0;
    for (pat, actual) in pattern_parts.iter().zip(path_parts.iter()) {
        if pat.starts_with(':') {
            continue;
        }
        if pat != actual {
            return None;
        }
        literals += 1;
    }

    Some(Specificity {
        segments: pattern_parts.len(),
        literals,
    })
}

/// Fill a route's `:param` segments from `path`.
///
/// Routes without parameters are returned as-is. A parametric route is only
/// a navigation target when `path` supplies every parameter, i.e. when the
/// route is a segment prefix of `path`; otherwise `None`.
///
/// Pattern: "/labs/:id"
/// Path: "/labs/17/complete"
/// Result: Some("/labs/17")
pub fn fill_route(pattern: &str, path: &str) -> Option<String> {
    if !segments(pattern).any(|seg| seg.starts_with(':')) {
        return Some(pattern.to_string());
    }

    let path = normalize_path(path);
    let mut path_parts = segments(&path);
    let mut filled = Vec::new();
    for pat in segments(pattern) {
        let actual = path_parts.next()?;
        if !pat.starts_with(':') && pat != actual {
            return None;
        }
        filled.push(actual);
    }

    Some(format!("/{}", filled.join("/")))
}

/// Whether `node` matches `path` on its own, ignoring its siblings.
pub fn is_active(node: &MenuNode, path: &str) -> bool {
    match_route(&node.route, node.match_mode, path).is_some()
}

/// Pick the active node among one level of siblings.
///
/// The most specific match wins; on a tie the earlier sibling wins. Returns
/// the winner's position in `siblings`, or `None` if nothing matches.
pub fn active_index<'a, I>(siblings: I, path: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a MenuNode>,
{
    let mut best: Option<(usize, Specificity)> = None;

    for (idx, node) in siblings.into_iter().enumerate() {
        let Some(spec) = match_route(&node.route, node.match_mode, path) else {
            continue;
        };
        if best.is_none_or(|(_, current)| spec > current) {
            best = Some((idx, spec));
        }
    }

    best.map(|(idx, _)| idx)
}
