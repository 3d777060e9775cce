//! Match scoring for kitchen search.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## SCORE_HIERARCHY
//! The tiers MUST stay strictly ordered:
//!
//! ```text
//! Exact (1.0) > NamePrefix (0.8) > WordExact (0.7)
//!             > WordPrefix (0.6) > NameSubstring (0.5) > InfoSubstring (0.3)
//! ```
//!
//! The constants are a behavioral contract carried over from the production
//! ranking; retuning them reorders every user's search results. Treat them
//! as frozen.
//!
//! ## MATCH_TYPE_THRESHOLDS
//! Classification derives from score, never stored independently:
//! score >= 0.7 → name, 0.5 <= score < 0.7 → partial, below → info.

use crate::types::MatchType;
use crate::utils::normalize;

/// Kitchen name equals the query.
pub const SCORE_EXACT: f64 = 1.0;
/// Kitchen name starts with the query.
pub const SCORE_NAME_PREFIX: f64 = 0.8;
/// Some whitespace-delimited word of the name equals the query.
pub const SCORE_WORD_EXACT: f64 = 0.7;
/// Some word of the name starts with the query.
pub const SCORE_WORD_PREFIX: f64 = 0.6;
/// The query appears somewhere inside the name.
pub const SCORE_NAME_SUBSTRING: f64 = 0.5;
/// The query appears only in the free-text info.
pub const SCORE_INFO_SUBSTRING: f64 = 0.3;

/// Score a kitchen against an already-normalized query.
///
/// `name` and `info` arrive raw from the catalog and are normalized here;
/// the query is normalized once per search, not once per kitchen. Returns
/// the highest applicable tier, or 0.0 when nothing matches (callers drop
/// zero scores).
pub fn match_score(name: &str, info: &str, query: &str) -> f64 {
    let name = normalize(name);

    if name == query {
        return SCORE_EXACT;
    }
    if name.starts_with(query) {
        return SCORE_NAME_PREFIX;
    }
    if name.split_whitespace().any(|word| word == query) {
        return SCORE_WORD_EXACT;
    }
    if name.split_whitespace().any(|word| word.starts_with(query)) {
        return SCORE_WORD_PREFIX;
    }
    if name.contains(query) {
        return SCORE_NAME_SUBSTRING;
    }
    if normalize(info).contains(query) {
        return SCORE_INFO_SUBSTRING;
    }
    0.0
}

/// Classify a non-zero score for presentation.
pub fn match_type(score: f64) -> MatchType {
    if score >= SCORE_WORD_EXACT {
        MatchType::Name
    } else if score >= SCORE_NAME_SUBSTRING {
        MatchType::Partial
    } else {
        MatchType::Info
    }
}
