pub mod listings;
pub mod session;

pub use listings::ListingStore;
pub use session::SessionStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
