/// Database row types; these map directly to SQLite rows.
/// Distinct from the plaza-types API models to keep the DB layer independent.

pub struct AccountRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string, never a plaintext password.
    pub password: String,
    pub phone: Option<String>,
    pub photo: Option<Vec<u8>>,
    pub role: String,
    pub created_at: String,
}

pub struct ListingRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub value: f64,
    pub phone: String,
    pub party_size: i64,
    pub created_at: String,
}
