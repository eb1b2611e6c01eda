//! Import token classification and candidate generation.
//!
//! A token such as `@theme/buttons` turns into at most two candidates: the
//! token itself and its `_partial` form. Each candidate may carry one alias
//! segment, which is split off here and resolved by the session.

use std::sync::LazyLock;

use regex::Regex;

/// Tokens the host pipeline passes through untouched: plain CSS and remote URLs.
static EXTERNAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.css$|^https?://").expect("external pattern is valid"));

/// `@name` at the start of a path segment, followed by `/` or end of input.
static ALIAS_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|/)(@[^/]+)(?:/|$)").expect("alias pattern is valid"));

/// Whether the token is left to the host as an external reference.
///
/// External tokens are never alias-expanded, never rewritten to partials and
/// never probed against directory entries.
pub fn is_external(token: &str) -> bool {
    EXTERNAL.is_match(token)
}

/// Rewrite the final path segment to the `_partial` naming convention.
///
/// `foo/bar` becomes `foo/_bar`, `bar` becomes `_bar`. A token ending in `/`
/// or whose final segment is itself an alias (`@theme`) has no partial form
/// and is returned unchanged: an alias segment names a directory, so neither
/// `_@theme` nor `@_theme` is ever a file to probe.
pub fn partial_name(token: &str) -> String {
    let (dir, file) = match token.rfind('/') {
        Some(idx) => token.split_at(idx + 1),
        None => ("", token),
    };

    if file.is_empty() || file.starts_with('@') {
        return token.to_string();
    }

    format!("{dir}_{file}")
}

/// Find the first alias segment in a candidate.
pub fn find_alias(candidate: &str) -> Option<&str> {
    ALIAS_SEGMENT
        .captures(candidate)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A lookup candidate derived from an import token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Path fragment appended to directory entries.
    pub path: String,
    /// Alias segment that was removed from `path`, if any.
    pub alias: Option<String>,
}

impl Candidate {
    /// Split the alias segment off a raw candidate.
    ///
    /// The alias segment and the separators around it are removed and
    /// leading/trailing slashes are trimmed: `@theme/_buttons` gives path
    /// `_buttons` with alias `@theme`.
    pub fn parse(raw: &str) -> Self {
        let Some(alias) = find_alias(raw) else {
            return Self {
                path: raw.to_string(),
                alias: None,
            };
        };

        let mut removed = false;
        let path = raw
            .split('/')
            .filter(|segment| {
                if !removed && *segment == alias {
                    removed = true;
                    return false;
                }
                true
            })
            .collect::<Vec<_>>()
            .join("/")
            .trim_matches('/')
            .to_string();

        Self {
            path,
            alias: Some(alias.to_string()),
        }
    }
}

/// Build the ordered candidate list for a token.
///
/// External tokens produce no candidates. Otherwise the verbatim candidate
/// comes first and the partial candidate second; the partial is dropped when
/// it is identical to the verbatim one.
pub fn candidates(token: &str) -> Vec<Candidate> {
    if is_external(token) {
        return Vec::new();
    }

    let partial = partial_name(token);
    let mut out = vec![Candidate::parse(token)];
    if partial != token {
        out.push(Candidate::parse(&partial));
    }
    out
}
