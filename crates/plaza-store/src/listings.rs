// Durable listing collection, shared by every user of the installation.
//
// The whole collection is serialized into a single JSON file. The in-memory
// vector is the authority and the RwLock serializes writers, so two
// near-simultaneous appends both land; every persist snapshots the full
// current state.

use crate::StoreError;
use plaza_types::models::Listing;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::warn;

pub struct ListingStore {
    listings: RwLock<Vec<Listing>>,
    file_path: PathBuf,
}

#[derive(serde::Serialize, serde::Deserialize, Default)]
struct ListingsFile {
    listings: Vec<Listing>,
}

impl ListingStore {
    /// Open the store backed by `path`, loading the collection if present.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let listings = if path.exists() {
            let content = fs::read_to_string(path)?;
            let file: ListingsFile = serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Failed to parse listings, starting fresh: {}", e);
                ListingsFile::default()
            });
            file.listings
        } else {
            Vec::new()
        };

        Ok(Self {
            listings: RwLock::new(listings),
            file_path: path.to_path_buf(),
        })
    }

    /// All listings in insertion order.
    pub fn load_all(&self) -> Vec<Listing> {
        self.listings.read().unwrap().clone()
    }

    pub fn append_and_persist(&self, listing: Listing) -> Result<(), StoreError> {
        {
            let mut listings = self.listings.write().unwrap();
            listings.push(listing);
        }
        self.persist()
    }

    /// Remove the listing with `id`. Unknown ids are a no-op; the file is
    /// not rewritten.
    pub fn remove_and_persist(&self, id: &str) -> Result<(), StoreError> {
        let removed = {
            let mut listings = self.listings.write().unwrap();
            let before = listings.len();
            listings.retain(|l| l.id != id);
            listings.len() != before
        };

        if removed {
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        let file = ListingsFile {
            listings: self.listings.read().unwrap().clone(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}
