//! Error type for the fallible edges: network, disk, JSON.
//!
//! The ranker itself is total and never appears here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to the menu service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("menu service returned HTTP {status}")]
    Api { status: u16 },

    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
