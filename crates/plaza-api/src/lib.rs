pub mod auth;
pub mod error;
pub mod listings;

use std::sync::Arc;

use axum::{Router, routing::post};

use plaza_db::Database;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}

/// The full HTTP surface: registration, login, listing submission.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/listings", post(listings::create_listing))
        .with_state(state)
}
