use thiserror::Error;

/// Every failure an operation can surface to a screen. Nothing here is
/// fatal: callers keep their state and decide whether to re-prompt, suggest
/// another email, or invite a retry.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed or missing input, recovered locally.
    #[error("{0}")]
    Validation(String),

    /// An account with the given email already exists.
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// Wrong credentials. One generic message so the caller cannot tell
    /// which field was wrong.
    #[error("invalid email or password")]
    AuthFailure,

    /// The remote service could not be reached or answered uselessly.
    /// The message invites a retry; nothing retries automatically.
    #[error("service unavailable: {0}")]
    RemoteUnavailable(String),

    /// A durable read or write failed. The operation is abandoned; writes
    /// are whole-collection overwrites so there is no partial state to
    /// roll back.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<plaza_store::StoreError> for CoreError {
    fn from(e: plaza_store::StoreError) -> Self {
        CoreError::Storage(e.to_string())
    }
}

impl From<anyhow::Error> for CoreError {
    fn from(e: anyhow::Error) -> Self {
        CoreError::Storage(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        CoreError::RemoteUnavailable(e.to_string())
    }
}
