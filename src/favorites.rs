//! Starred kitchens, persisted as a small JSON file.
//!
//! The web incarnation of this tool keeps stars in browser local storage;
//! here they live in a flat file wherever the caller points us. A missing
//! file is an empty set; a corrupt file is an error rather than silent loss.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One starred kitchen. The name is denormalized into the file so the list
/// renders without refetching the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub customer_id: String,
    pub kitchen_id: i64,
    pub kitchen_name: String,
}

/// The favorites set, bound to its backing file.
#[derive(Debug)]
pub struct Favorites {
    entries: Vec<Favorite>,
    path: PathBuf,
}

impl Favorites {
    /// Load from `path`. A file that does not exist yet yields an empty set.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { entries, path })
    }

    /// Write the set back to its file as pretty JSON.
    pub fn save(&self) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Star a kitchen. Returns `false` when it was already starred.
    pub fn star(&mut self, favorite: Favorite) -> bool {
        if self
            .entries
            .iter()
            .any(|entry| entry.kitchen_id == favorite.kitchen_id)
        {
            return false;
        }
        self.entries.push(favorite);
        true
    }

    /// Remove a kitchen by id. Returns the removed entry, if any.
    pub fn unstar(&mut self, kitchen_id: i64) -> Option<Favorite> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.kitchen_id == kitchen_id)?;
        Some(self.entries.remove(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Favorite> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
