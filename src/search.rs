//! The kitchen ranker: where the rubber meets the road.
//!
//! Every (customer, kitchen) pair in the catalog gets scored against the
//! query, zero scores are dropped, and the survivors are stable-sorted
//! descending and truncated. Pure over its inputs: no state, no mutation,
//! safe to call on every keystroke (debounce at the call site if you care
//! about wasted cycles, not here).

use crate::scoring::{match_score, match_type};
use crate::types::{Customer, SearchResult};
use crate::utils::normalize;

/// Result-list cap used when the caller has no opinion.
pub const DEFAULT_LIMIT: usize = 10;

/// Rank all kitchens across all customers against a free-text query.
///
/// Returns at most `max_results` hits, best first. Ties keep catalog order
/// (stable sort). An empty or whitespace-only query returns no results
/// without ranking anything.
pub fn rank_kitchens(
    customers: &[Customer],
    query: &str,
    max_results: usize,
) -> Vec<SearchResult> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    for customer in customers {
        for kitchen in &customer.kitchens {
            let score = match_score(&kitchen.kitchen_name, &kitchen.info, &query);
            if score > 0.0 {
                results.push(SearchResult {
                    customer_id: customer.customer_id.clone(),
                    kitchen_id: kitchen.kitchen_id,
                    kitchen_name: kitchen.kitchen_name.clone(),
                    info: kitchen.info.clone(),
                    match_type: match_type(score),
                    match_score: score,
                });
            }
        }
    }

    // Stable: equal scores keep their catalog order.
    results.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(max_results);
    results
}

/// [`rank_kitchens`] with the default result cap.
pub fn rank_kitchens_default(customers: &[Customer], query: &str) -> Vec<SearchResult> {
    rank_kitchens(customers, query, DEFAULT_LIMIT)
}
