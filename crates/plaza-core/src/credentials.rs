use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use tracing::info;

use plaza_db::Database;
use plaza_db::models::AccountRow;
use plaza_types::models::{Account, AccountId};

use crate::error::CoreError;
use crate::validate;

const DEFAULT_ROLE: &str = "user";

/// Durable account records. Passwords are stored as salted Argon2id hashes
/// and verified in constant time; the hash never leaves this module.
pub struct CredentialStore {
    db: Database,
}

impl CredentialStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create an account, failing on invalid input or a taken email.
    /// The duplicate pre-check and the UNIQUE index map to the same error,
    /// so a racing second insert cannot slip through as a storage failure.
    pub fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> Result<AccountId, CoreError> {
        validate::registration(name, email, password)?;

        if self.db.account_by_email(email)?.is_some() {
            return Err(CoreError::DuplicateEmail);
        }

        let hash = hash_password(password)?;

        match self.db.insert_account(name, email, &hash, phone, None, DEFAULT_ROLE) {
            Ok(id) => {
                info!("Account created for {}", email);
                Ok(id)
            }
            Err(e) if Database::is_constraint_violation(&e) => Err(CoreError::DuplicateEmail),
            Err(e) => Err(e.into()),
        }
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<Account>, CoreError> {
        Ok(self.db.account_by_email(email)?.map(account_from_row))
    }

    /// Verify a claimed credential. `None` for an unknown email or a wrong
    /// password; the caller turns both into the same generic auth failure.
    pub fn verify(&self, email: &str, password: &str) -> Result<Option<Account>, CoreError> {
        let Some(row) = self.db.account_by_email(email)? else {
            return Ok(None);
        };

        let parsed = PasswordHash::new(&row.password)
            .map_err(|e| CoreError::Storage(format!("stored hash unreadable: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(Some(account_from_row(row))),
            Err(argon2::password_hash::Error::Password) => Ok(None),
            Err(e) => Err(CoreError::Storage(e.to_string())),
        }
    }
}

pub(crate) fn hash_password(password: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| CoreError::Storage(e.to_string()))
}

fn account_from_row(row: AccountRow) -> Account {
    Account {
        id: row.id,
        name: row.name,
        email: row.email,
        phone: row.phone,
        role: row.role,
    }
}
