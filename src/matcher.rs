//! Approximate name lookup for human-entered city and country values.

use similar::TextDiff;

/// Similarity threshold below which a candidate is not considered a match.
pub const DEFAULT_CUTOFF: f64 = 0.8;

/// Returns the candidate most similar to `query`, provided its similarity
/// ratio reaches `cutoff`.
///
/// The ratio is the longest-matching-blocks measure over characters,
/// case-sensitive as given. Ties break toward the earliest candidate: a later
/// one replaces the current best only on a strictly greater ratio, so slice
/// order decides between equals.
pub fn best_match<'a>(query: &str, candidates: &[&'a str], cutoff: f64) -> Option<&'a str> {
    let mut best: Option<(&'a str, f64)> = None;
    for &candidate in candidates {
        let ratio = f64::from(TextDiff::from_chars(query, candidate).ratio());
        if ratio < cutoff {
            continue;
        }
        if best.is_none_or(|(_, best_ratio)| ratio > best_ratio) {
            best = Some((candidate, ratio));
        }
    }
    best.map(|(candidate, _)| candidate)
}
