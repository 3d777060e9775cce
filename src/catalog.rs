//! Offline catalog loading and lookup.
//!
//! The ranker takes the catalog as a plain slice and does not care where it
//! came from. Besides the live endpoint, a catalog can be loaded from a JSON
//! file or stdin; the payload shape is identical.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::Error;
use crate::types::{Customer, Kitchen};

/// Deserialize a catalog payload from any reader.
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<Customer>, Error> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a catalog from a file path, with `-` meaning stdin.
pub fn load_catalog(path: &Path) -> Result<Vec<Customer>, Error> {
    if path == Path::new("-") {
        read_catalog(io::stdin().lock())
    } else {
        read_catalog(BufReader::new(File::open(path)?))
    }
}

/// Find a kitchen by id, together with the customer that owns it.
pub fn find_kitchen(customers: &[Customer], kitchen_id: i64) -> Option<(&Customer, &Kitchen)> {
    customers.iter().find_map(|customer| {
        customer
            .kitchens
            .iter()
            .find(|kitchen| kitchen.kitchen_id == kitchen_id)
            .map(|kitchen| (customer, kitchen))
    })
}
