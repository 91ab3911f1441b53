//! Fuzzy application-name matching.
//!
//! A candidate matches a target when the candidate's normalized form contains
//! the normalized target (or its alias) as a substring. A short target like
//! "code" will therefore also match longer unrelated names containing it;
//! that over-matching is a deliberate usability trade-off.

use super::types::AliasMap;

/// Canonical form of an application name for comparison: lowercased with all
/// whitespace removed. Pure; empty input yields empty output.
pub fn normalize(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect()
}

/// Filter `candidates` down to those matching `target` or its alias,
/// preserving input order. Neither input is mutated; an empty result is a
/// normal outcome, not an error.
pub fn match_applications<'a>(
    target: &str,
    candidates: &'a [String],
    aliases: &AliasMap,
) -> Vec<&'a str> {
    let target = normalize(target);
    let alias = aliases
        .get(&target)
        .map(|alias| normalize(alias))
        .unwrap_or_else(|| target.clone());

    candidates
        .iter()
        .filter(|candidate| {
            let candidate = normalize(candidate);
            candidate.contains(&target) || candidate.contains(&alias)
        })
        .map(String::as_str)
        .collect()
}
