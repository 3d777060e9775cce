//! The building blocks of the kitchen catalog.
//!
//! These types mirror the JSON the menu service's public catalog endpoint
//! returns, wire names and all (`camelCase`, `kitchenName`, ...). Every text
//! field defaults to empty on deserialization: the catalog is third-party
//! data and a kitchen with a missing name must score as a non-match, not
//! abort the whole search.
//!
//! # Invariants
//!
//! - **SearchResult**: `match_score` is in `(0.0, 1.0]` and `match_type` is
//!   derived from it. Zero-score kitchens are never materialized as results.
//! - **Customer**: `kitchens` preserves the catalog's iteration order, which
//!   is what breaks score ties during ranking.

use serde::{Deserialize, Serialize};

use crate::menu::MenuType;

/// A single cafeteria/serving location with its own menu.
///
/// `info` is free-text filled in by the kitchen operator; it often mentions
/// opening hours or specialties, so it participates in search at low weight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Kitchen {
    pub kitchen_name: String,
    pub kitchen_id: i64,
    pub address: String,
    pub city: String,
    pub email: String,
    pub phone: String,
    pub info: String,
    pub menu_types: Vec<MenuType>,
}

/// An organizational account that owns one or more kitchens.
///
/// This is the menu service's vocabulary: a "customer" is a school district
/// or company, not an end user of this tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub customer_id: String,
    pub kitchens: Vec<Kitchen>,
}

/// How a kitchen matched the query, for presentation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// The kitchen name itself matched (exact, prefix, or whole word).
    Name,
    /// The query appeared somewhere inside the name.
    Partial,
    /// Only the free-text info mentioned the query.
    Info,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Name => "name",
            MatchType::Partial => "partial",
            MatchType::Info => "info",
        }
    }
}

/// One ranked hit. Produced fresh on every query, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub customer_id: String,
    pub kitchen_id: i64,
    pub kitchen_name: String,
    pub info: String,
    pub match_type: MatchType,
    pub match_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_json_uses_wire_names() {
        let json = r#"{
            "customerId": "98765",
            "kitchens": [{
                "kitchenName": "Keskuskeittiö",
                "kitchenId": 12,
                "info": "iso keittiö"
            }]
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.customer_id, "98765");
        assert_eq!(customer.kitchens[0].kitchen_name, "Keskuskeittiö");
        assert_eq!(customer.kitchens[0].kitchen_id, 12);
        assert_eq!(customer.kitchens[0].info, "iso keittiö");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let kitchen: Kitchen = serde_json::from_str(r#"{"kitchenId": 7}"#).unwrap();
        assert_eq!(kitchen.kitchen_name, "");
        assert_eq!(kitchen.info, "");
        assert!(kitchen.menu_types.is_empty());
    }

    #[test]
    fn match_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchType::Partial).unwrap(),
            "\"partial\""
        );
        assert_eq!(MatchType::Name.as_str(), "name");
    }
}
