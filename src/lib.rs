//! Kitchen search and daily menus for the Jamix menu service.
//!
//! This crate finds cafeteria kitchens by name across the menu service's
//! public catalog, ranks them with a fixed heuristic score table, and browses
//! a kitchen's daily menus. The ranker is a pure function over the fetched
//! catalog; everything stateful (HTTP, the favorites file) lives at the
//! edges.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ client.rs  │────▶│  types.rs   │────▶│  search.rs   │
//! │ catalog.rs │     │ (Customer,  │     │(rank_kitchens│
//! │ (data in)  │     │  Kitchen)   │     │  scoring.rs) │
//! └────────────┘     └─────────────┘     └──────────────┘
//!       │                                       │
//!       ▼                                       ▼
//! ┌────────────┐                         ┌──────────────┐
//! │  menu.rs   │                         │ SearchResult │
//! │ (day pick, │                         │  (plain data │
//! │  summary)  │                         │   out)       │
//! └────────────┘                         └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use keittio::{rank_kitchens_default, JamixClient};
//!
//! # async fn run() -> Result<(), keittio::Error> {
//! let client = JamixClient::new();
//! let customers = client.fetch_customers().await?;
//! for hit in rank_kitchens_default(&customers, "keskuskeittiö") {
//!     println!("{} ({:.1})", hit.kitchen_name, hit.match_score);
//! }
//! # Ok(())
//! # }
//! ```

mod catalog;
mod client;
mod error;
mod favorites;
pub mod menu;
mod scoring;
mod search;
mod types;
mod utils;

// Re-exports for the public API
pub use catalog::{find_kitchen, load_catalog, read_catalog};
pub use client::{JamixClient, DEFAULT_BASE_URL};
pub use error::Error;
pub use favorites::{Favorite, Favorites};
pub use scoring::{
    match_score, match_type, SCORE_EXACT, SCORE_INFO_SUBSTRING, SCORE_NAME_PREFIX,
    SCORE_NAME_SUBSTRING, SCORE_WORD_EXACT, SCORE_WORD_PREFIX,
};
pub use search::{rank_kitchens, rank_kitchens_default, DEFAULT_LIMIT};
pub use types::{Customer, Kitchen, MatchType, SearchResult};
pub use utils::normalize;

#[cfg(test)]
mod tests {
    //! Property tests for the ranker's guarantees: capped length, ordering,
    //! determinism, and totality over arbitrary catalogs and queries.

    use super::*;
    use proptest::prelude::*;

    fn kitchen_strategy() -> impl Strategy<Value = Kitchen> {
        (
            proptest::string::string_regex("[a-zåäö ]{0,12}").unwrap(),
            0i64..1000,
            proptest::string::string_regex("[a-zåäö ]{0,20}").unwrap(),
        )
            .prop_map(|(name, id, info)| Kitchen {
                kitchen_name: name,
                kitchen_id: id,
                info,
                ..Kitchen::default()
            })
    }

    fn catalog_strategy() -> impl Strategy<Value = Vec<Customer>> {
        prop::collection::vec(
            (
                "[0-9]{1,5}",
                prop::collection::vec(kitchen_strategy(), 1..4),
            )
                .prop_map(|(customer_id, kitchens)| Customer {
                    customer_id,
                    kitchens,
                }),
            0..6,
        )
    }

    proptest! {
        #[test]
        fn result_length_never_exceeds_limit(
            customers in catalog_strategy(),
            query in "[a-zåäö]{0,8}",
            limit in 1usize..20,
        ) {
            prop_assert!(rank_kitchens(&customers, &query, limit).len() <= limit);
        }

        #[test]
        fn blank_queries_return_nothing(
            customers in catalog_strategy(),
            query in "[ \t]{0,5}",
        ) {
            prop_assert!(rank_kitchens_default(&customers, &query).is_empty());
        }

        #[test]
        fn ranking_is_deterministic(
            customers in catalog_strategy(),
            query in "[a-zåäö]{1,8}",
        ) {
            let first = rank_kitchens_default(&customers, &query);
            let second = rank_kitchens_default(&customers, &query);
            prop_assert_eq!(
                format!("{:?}", first),
                format!("{:?}", second)
            );
        }

        #[test]
        fn scores_are_non_increasing(
            customers in catalog_strategy(),
            query in "[a-zåäö]{1,8}",
        ) {
            let results = rank_kitchens_default(&customers, &query);
            for pair in results.windows(2) {
                prop_assert!(pair[0].match_score >= pair[1].match_score);
            }
        }

        #[test]
        fn every_result_has_positive_score_and_matching_type(
            customers in catalog_strategy(),
            query in "[a-zåäö]{1,8}",
        ) {
            for result in rank_kitchens_default(&customers, &query) {
                prop_assert!(result.match_score > 0.0);
                prop_assert!(result.match_score <= 1.0);
                prop_assert_eq!(result.match_type, match_type(result.match_score));
            }
        }

        #[test]
        fn normalize_is_idempotent(text in "\\PC{0,24}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
