use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use tracing::info;

use plaza_types::api::{LoginRequest, LoginResponse, RegisterRequest, RemoteUser};

use crate::AppState;
use crate::error::ApiError;

const DEFAULT_ROLE: &str = "user";

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Every field including the phone is required here, unlike the
    // on-device store. No pattern or length checks beyond presence.
    let phone = req.phone.as_deref().unwrap_or("");
    if req.name.trim().is_empty()
        || req.email.trim().is_empty()
        || req.password.is_empty()
        || phone.trim().is_empty()
    {
        return Err(ApiError::BadRequest("all fields are required".into()));
    }

    if state.db.account_by_email(&req.email)?.is_some() {
        return Err(ApiError::BadRequest("email already registered".into()));
    }

    let photo = match &req.photo {
        Some(encoded) => Some(
            B64.decode(encoded)
                .map_err(|_| ApiError::BadRequest("photo is not valid base64".into()))?,
        ),
        None => None,
    };

    // Hash with Argon2id; the plaintext is never stored.
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?
        .to_string();

    let role = req.role.as_deref().unwrap_or(DEFAULT_ROLE);

    state.db.insert_account(
        &req.name,
        &req.email,
        &password_hash,
        Some(phone),
        photo.as_deref(),
        role,
    )?;

    info!("Registered account for {}", req.email);
    Ok((StatusCode::CREATED, Json(serde_json::json!({}))))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest("email and password are required".into()));
    }

    let Some(row) = state.db.account_by_email(&req.email)? else {
        return Err(ApiError::Unauthorized);
    };

    let parsed =
        PasswordHash::new(&row.password).map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;

    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed)
        .map_err(|_| ApiError::Unauthorized)?;

    Ok(Json(LoginResponse {
        user: RemoteUser {
            name: row.name,
            email: row.email,
        },
    }))
}
