use crate::Database;
use crate::models::{AccountRow, ListingRow};
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

impl Database {
    // -- Accounts --

    pub fn insert_account(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        phone: Option<&str>,
        photo: Option<&[u8]>,
        role: &str,
    ) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO accounts (name, email, password, phone, photo, role)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![name, email, password_hash, phone, photo, role],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn account_by_email(&self, email: &str) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| query_account_by_email(conn, email))
    }

    pub fn account_by_id(&self, id: i64) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    &format!("{ACCOUNT_COLUMNS} WHERE id = ?1"),
                    [id],
                    account_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    // -- Listings --

    pub fn insert_listing(
        &self,
        title: &str,
        description: &str,
        value: f64,
        phone: &str,
        party_size: i64,
    ) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO listings (title, description, value, phone, party_size)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![title, description, value, phone, party_size],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn listing_by_id(&self, id: i64) -> Result<Option<ListingRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, title, description, value, phone, party_size, created_at
                     FROM listings WHERE id = ?1",
                    [id],
                    |row| {
                        Ok(ListingRow {
                            id: row.get(0)?,
                            title: row.get(1)?,
                            description: row.get(2)?,
                            value: row.get(3)?,
                            phone: row.get(4)?,
                            party_size: row.get(5)?,
                            created_at: row.get(6)?,
                        })
                    },
                )
                .optional()?;
            Ok(row)
        })
    }
}

const ACCOUNT_COLUMNS: &str =
    "SELECT id, name, email, password, phone, photo, role, created_at FROM accounts";

fn query_account_by_email(conn: &Connection, email: &str) -> Result<Option<AccountRow>> {
    let mut stmt = conn.prepare(&format!("{ACCOUNT_COLUMNS} WHERE email = ?1"))?;

    let row = stmt.query_row([email], account_from_row).optional()?;

    Ok(row)
}

fn account_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AccountRow> {
    Ok(AccountRow {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
        phone: row.get(4)?,
        photo: row.get(5)?,
        role: row.get(6)?,
        created_at: row.get(7)?,
    })
}
