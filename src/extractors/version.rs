//! Version-floor resolution for range specifiers.
//!
//! Given a loosely structured range like `">=1.2.0 <2.0.0"` or `"^1.x"`,
//! [`resolve_floor`] picks the smallest concrete version mentioned in it.
//! This is a best-effort floor over the versions a spec names, not a range
//! solver.

/// Clause characters that can appear in a version/range token.
fn is_range_clause(clause: &str) -> bool {
    !clause.is_empty()
        && clause.chars().all(|c| {
            c.is_ascii_digit() || matches!(c, '.' | '-' | '<' | '>' | '^' | '=' | '~' | 'x' | 'X')
        })
}

/// Reduce a clause to a bare version: wildcard components become `0`,
/// operator characters are stripped.
fn bare_version(clause: &str) -> String {
    clause
        .chars()
        .map(|c| if c == 'x' || c == 'X' { '0' } else { c })
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-'))
        .collect()
}

/// Prerelease suffix of a candidate. A suffixed version sorts below the
/// same release without one.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Pre {
    Tagged(Vec<Option<u64>>),
    Release,
}

/// Ordering key for a bare version candidate.
///
/// Dot components compare numerically; a missing or non-numeric component
/// sorts below any numeric one.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FloorKey {
    release: Vec<Option<u64>>,
    pre: Pre,
}

/// Build the ordering key for a bare candidate, rejecting only tokens with
/// no numeric content at all.
fn floor_key(bare: &str) -> Option<FloorKey> {
    let (release, pre) = match bare.split_once('-') {
        Some((release, pre)) => (release, Some(pre)),
        None => (bare, None),
    };
    let release: Vec<Option<u64>> = release.split('.').map(|part| part.parse().ok()).collect();
    if !release.iter().any(Option::is_some) {
        return None;
    }
    let pre = match pre {
        Some(pre) => Pre::Tagged(pre.split('.').map(|part| part.parse().ok()).collect()),
        None => Pre::Release,
    };
    Some(FloorKey { release, pre })
}

/// Smallest concrete version a range specifier mentions.
///
/// Returns `None` when the spec contains nothing version-like (`"latest"`,
/// `"*"`, an empty string); callers treat that as "version unknown" and
/// fall back to the bare package name.
pub fn resolve_floor(spec: &str) -> Option<String> {
    spec.split_whitespace()
        .filter(|clause| is_range_clause(clause))
        .map(bare_version)
        .filter_map(|bare| floor_key(&bare).map(|key| (key, bare)))
        .min_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, bare)| bare)
}
