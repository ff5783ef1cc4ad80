use std::fs;
use std::path::Path;

use chrono::Utc;
use tracing::warn;

use plaza_db::Database;
use plaza_store::{ListingStore, SessionStore};
use plaza_types::api::{CreateListingRequest, RegisterRequest};
use plaza_types::models::{Listing, SessionFields};

use crate::credentials::CredentialStore;
use crate::error::CoreError;
use crate::query::{self, SortMode};
use crate::remote::RemoteClient;
use crate::validate;

/// Everything a new listing needs from the form. Owner fields are stamped
/// from the active session at publish time.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub display_price: String,
    pub party_size: Option<String>,
    pub contact_phone: Option<String>,
}

/// The one entry point screens talk to. Bundles the on-device stores and,
/// when configured, the remote service.
///
/// With a remote configured, the service is the source of truth for
/// accounts and listing submission and the device stores act as cache;
/// without one, the device stores are authoritative. Either way there is a
/// single code path per operation.
pub struct Client {
    credentials: CredentialStore,
    session: SessionStore,
    listings: ListingStore,
    remote: Option<RemoteClient>,
}

impl Client {
    /// Open all stores under one data directory: `accounts.db`,
    /// `session.json`, `avatars.json` and `listings.json`.
    pub fn open(data_dir: &Path) -> Result<Self, CoreError> {
        fs::create_dir_all(data_dir).map_err(|e| CoreError::Storage(e.to_string()))?;

        let db = Database::open(&data_dir.join("accounts.db"))?;

        Ok(Self {
            credentials: CredentialStore::new(db),
            session: SessionStore::open(data_dir)?,
            listings: ListingStore::open(&data_dir.join("listings.json"))?,
            remote: None,
        })
    }

    /// Route account and listing submission through the remote service.
    pub fn with_remote(mut self, base_url: &str) -> Result<Self, CoreError> {
        self.remote = Some(RemoteClient::new(base_url)?);
        Ok(self)
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn listings(&self) -> &ListingStore {
        &self.listings
    }

    // -- Accounts --

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> Result<(), CoreError> {
        validate::registration(name, email, password)?;

        match &self.remote {
            Some(remote) => {
                remote
                    .register(&RegisterRequest {
                        name: name.to_string(),
                        email: email.to_string(),
                        password: password.to_string(),
                        phone: phone.map(str::to_string),
                        photo: None,
                        role: None,
                    })
                    .await?;

                // Best-effort local cache so the account shows up offline.
                match self.credentials.create_account(name, email, password, phone) {
                    Ok(_) | Err(CoreError::DuplicateEmail) => {}
                    Err(e) => warn!("Could not cache account locally: {}", e),
                }
                Ok(())
            }
            None => self
                .credentials
                .create_account(name, email, password, phone)
                .map(|_| ()),
        }
    }

    /// Authenticate and populate the session. On success the session holds
    /// the account's display fields plus any avatar previously stored for
    /// that email.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionFields, CoreError> {
        validate::login_input(email, password)?;

        let (name, email, phone) = match &self.remote {
            Some(remote) => {
                let user = remote.login(email, password).await?;
                (user.name, user.email, None)
            }
            None => {
                let account = self
                    .credentials
                    .verify(email, password)?
                    .ok_or(CoreError::AuthFailure)?;
                (account.name, account.email, account.phone)
            }
        };

        let fields = SessionFields {
            display_name: Some(name),
            avatar_ref: self.session.load_avatar(&email),
            email: Some(email),
            phone_display: phone,
        };
        self.session.save(fields.clone())?;
        Ok(fields)
    }

    /// Drop the session and the session email's avatar.
    pub fn logout(&self) -> Result<(), CoreError> {
        Ok(self.session.clear()?)
    }

    /// Store an avatar for the logged-in account and reflect it in the
    /// session.
    pub fn set_avatar(&self, image_ref: &str) -> Result<(), CoreError> {
        let mut fields = self.session.load();
        let Some(email) = fields.email.clone() else {
            return Err(CoreError::Validation("no active session".into()));
        };

        self.session.save_avatar(&email, image_ref)?;
        fields.avatar_ref = Some(image_ref.to_string());
        self.session.save(fields)?;
        Ok(())
    }

    // -- Listings --

    /// Validate the draft, stamp the owner from the session, submit to the
    /// remote when configured, and append to the shared collection. The
    /// local append only happens after a successful submission, so a remote
    /// failure leaves local state untouched.
    pub async fn publish_listing(&self, draft: ListingDraft) -> Result<Listing, CoreError> {
        validate::listing_draft(&draft.title, &draft.description, &draft.display_price)?;

        let session = self.session.load();
        let now = Utc::now();

        let listing = Listing {
            id: now.timestamp_millis().to_string(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            display_price: draft.display_price.clone(),
            created_at_display: now.format("%d/%m/%Y").to_string(),
            owner_name: session
                .display_name
                .unwrap_or_else(|| "Anonymous".to_string()),
            owner_avatar_ref: session.avatar_ref,
            owner_email: session.email,
            owner_phone: draft.contact_phone.clone(),
            party_size: draft.party_size.clone(),
        };

        if let Some(remote) = &self.remote {
            remote
                .create_listing(&CreateListingRequest {
                    title: draft.title,
                    description: draft.description,
                    price: draft.display_price,
                    phone: draft.contact_phone.unwrap_or_default(),
                    party_size: draft.party_size,
                })
                .await?;
        }

        self.listings.append_and_persist(listing.clone())?;
        Ok(listing)
    }

    /// The feed as a screen renders it: filtered and sorted.
    pub fn feed(&self, search_text: &str, sort: SortMode) -> Vec<Listing> {
        query::query(&self.listings.load_all(), search_text, sort)
    }

    /// Listings owned by the logged-in account, matched on the stable email
    /// key.
    pub fn my_listings(&self) -> Vec<Listing> {
        let Some(email) = self.session.load().email else {
            return Vec::new();
        };

        self.listings
            .load_all()
            .into_iter()
            .filter(|l| l.owner_email.as_deref() == Some(email.as_str()))
            .collect()
    }

    /// Remove one of the session owner's listings. An id that no longer
    /// exists is a no-op; someone else's listing is refused.
    pub fn remove_listing(&self, id: &str) -> Result<(), CoreError> {
        let session = self.session.load();

        let all = self.listings.load_all();
        let Some(listing) = all.iter().find(|l| l.id == id) else {
            return Ok(());
        };

        let owned = match &listing.owner_email {
            Some(owner) => session.email.as_deref() == Some(owner.as_str()),
            // Rows written before the stable owner key existed only carry
            // the display name.
            None => session.display_name.as_deref() == Some(listing.owner_name.as_str()),
        };
        if !owned {
            return Err(CoreError::Validation(
                "only the listing's owner can remove it".into(),
            ));
        }

        Ok(self.listings.remove_and_persist(id)?)
    }
}
