use serde::{Deserialize, Serialize};

/// Surrogate identifier assigned by the credential store on insert.
pub type AccountId = i64;

/// A registered user's identity record. The stored password hash never
/// leaves the database layer, so it is not part of this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
}

/// The fields cached for the currently active user. A trusted mirror of the
/// most recent successful login, never re-validated against the credential
/// store. Every field is independently absent until a login populates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionFields {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone_display: Option<String>,
    pub avatar_ref: Option<String>,
}

/// A user-submitted project shown in the shared feed.
///
/// `id` is the creation timestamp in milliseconds rendered as a decimal
/// string; the feed's "most recent" ordering parses it back out.
/// `display_price` is the free-form text the user typed ("1.500,00").
/// The owner fields were introduced across revisions, so all of them except
/// `owner_name` deserialize as absent from older collection files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub display_price: String,
    pub created_at_display: String,
    pub owner_name: String,
    #[serde(default)]
    pub owner_avatar_ref: Option<String>,
    #[serde(default)]
    pub owner_email: Option<String>,
    #[serde(default)]
    pub owner_phone: Option<String>,
    #[serde(default)]
    pub party_size: Option<String>,
}
