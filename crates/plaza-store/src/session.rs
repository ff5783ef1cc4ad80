// Session and avatar storage.
//
// The session is a handful of key-value fields cached for the active user;
// avatars are image references keyed by the owning account's email. Both
// live in JSON files under the store directory and survive restarts.

use crate::StoreError;
use plaza_types::models::SessionFields;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::warn;

pub struct SessionStore {
    fields: RwLock<SessionFields>,
    avatars: RwLock<HashMap<String, String>>,
    session_path: PathBuf,
    avatars_path: PathBuf,
}

#[derive(serde::Serialize, serde::Deserialize, Default)]
struct AvatarsFile {
    avatars: HashMap<String, String>,
}

impl SessionStore {
    /// Open the store in `dir`, loading any previous session from disk.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir)?;

        let session_path = dir.join("session.json");
        let avatars_path = dir.join("avatars.json");

        let fields = load_json(&session_path, "session");
        let AvatarsFile { avatars } = load_json(&avatars_path, "avatars");

        Ok(Self {
            fields: RwLock::new(fields),
            avatars: RwLock::new(avatars),
            session_path,
            avatars_path,
        })
    }

    /// Overwrite every session field. Idempotent.
    pub fn save(&self, fields: SessionFields) -> Result<(), StoreError> {
        {
            let mut current = self.fields.write().unwrap();
            *current = fields;
        }
        self.persist_session()
    }

    pub fn load(&self) -> SessionFields {
        self.fields.read().unwrap().clone()
    }

    /// Remove every session field, plus the avatar stored for the session's
    /// email.
    pub fn clear(&self) -> Result<(), StoreError> {
        let email = {
            let mut current = self.fields.write().unwrap();
            std::mem::take(&mut *current).email
        };
        self.persist_session()?;

        if let Some(email) = email {
            let removed = self.avatars.write().unwrap().remove(&email).is_some();
            if removed {
                self.persist_avatars()?;
            }
        }
        Ok(())
    }

    /// Store the avatar reference for `email`, replacing any previous one.
    pub fn save_avatar(&self, email: &str, image_ref: &str) -> Result<(), StoreError> {
        {
            let mut avatars = self.avatars.write().unwrap();
            avatars.insert(email.to_string(), image_ref.to_string());
        }
        self.persist_avatars()
    }

    pub fn load_avatar(&self, email: &str) -> Option<String> {
        self.avatars.read().unwrap().get(email).cloned()
    }

    fn persist_session(&self) -> Result<(), StoreError> {
        let fields = self.fields.read().unwrap();
        let content = serde_json::to_string_pretty(&*fields)?;
        fs::write(&self.session_path, content)?;
        Ok(())
    }

    fn persist_avatars(&self) -> Result<(), StoreError> {
        let file = AvatarsFile {
            avatars: self.avatars.read().unwrap().clone(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        fs::write(&self.avatars_path, content)?;
        Ok(())
    }
}

/// Read a JSON file, falling back to the default on a missing file and
/// logging (not failing) on a corrupt one.
fn load_json<T: serde::de::DeserializeOwned + Default>(path: &Path, what: &str) -> T {
    if !path.exists() {
        return T::default();
    }
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Failed to parse {}, starting fresh: {}", what, e);
            T::default()
        }),
        Err(e) => {
            warn!("Failed to read {}, starting fresh: {}", what, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("plaza_session_{}", name));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn fields(name: &str, email: &str) -> SessionFields {
        SessionFields {
            display_name: Some(name.to_string()),
            email: Some(email.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn save_load_round_trip() {
        let store = SessionStore::open(&test_dir("round_trip")).unwrap();

        store.save(fields("A", "a@b.com")).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.display_name.as_deref(), Some("A"));
        assert_eq!(loaded.email.as_deref(), Some("a@b.com"));
        assert_eq!(loaded.phone_display, None);
        assert_eq!(loaded.avatar_ref, None);
    }

    #[test]
    fn clear_leaves_all_fields_absent() {
        let store = SessionStore::open(&test_dir("clear")).unwrap();

        store.save(fields("A", "a@b.com")).unwrap();
        store.clear().unwrap();

        assert_eq!(store.load(), SessionFields::default());
    }

    #[test]
    fn clear_removes_the_session_emails_avatar() {
        let store = SessionStore::open(&test_dir("clear_avatar")).unwrap();

        store.save_avatar("a@b.com", "file:///avatars/a.png").unwrap();
        store.save_avatar("other@b.com", "file:///avatars/o.png").unwrap();
        store.save(fields("A", "a@b.com")).unwrap();

        store.clear().unwrap();

        assert_eq!(store.load_avatar("a@b.com"), None);
        // Only the session's own avatar goes away.
        assert!(store.load_avatar("other@b.com").is_some());
    }

    #[test]
    fn avatar_overwrite_keeps_one_per_email() {
        let store = SessionStore::open(&test_dir("avatar_overwrite")).unwrap();

        store.save_avatar("a@b.com", "ref-1").unwrap();
        store.save_avatar("a@b.com", "ref-2").unwrap();

        assert_eq!(store.load_avatar("a@b.com").as_deref(), Some("ref-2"));
    }

    #[test]
    fn session_survives_reopen() {
        let dir = test_dir("reopen");

        {
            let store = SessionStore::open(&dir).unwrap();
            store.save(fields("A", "a@b.com")).unwrap();
            store.save_avatar("a@b.com", "ref-1").unwrap();
        }

        let store = SessionStore::open(&dir).unwrap();
        assert_eq!(store.load().display_name.as_deref(), Some("A"));
        assert_eq!(store.load_avatar("a@b.com").as_deref(), Some("ref-1"));
    }
}
