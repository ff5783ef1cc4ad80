use serde::{Deserialize, Serialize};

// -- Auth --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    /// Base64-encoded profile photo, decoded server-side into a blob.
    #[serde(default)]
    pub photo: Option<String>,
    /// Account kind; the server defaults this to "user" when absent.
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The subset of account fields the server hands back on login. No session
/// token is issued; the client trusts these fields as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: RemoteUser,
}

// -- Listings --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListingRequest {
    pub title: String,
    pub description: String,
    /// Free-form price text; the server parses it with `price::parse_display_price`.
    pub price: String,
    pub phone: String,
    #[serde(default)]
    pub party_size: Option<String>,
}

// -- Shared --

/// Body shape for every non-2xx response and for listing-creation acks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}
