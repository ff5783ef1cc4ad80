pub mod client;
pub mod credentials;
pub mod error;
pub mod query;
pub mod remote;
pub mod validate;

pub use client::{Client, ListingDraft};
pub use credentials::CredentialStore;
pub use error::CoreError;
pub use query::SortMode;
pub use remote::RemoteClient;
