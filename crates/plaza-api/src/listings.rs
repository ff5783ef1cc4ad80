use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::info;

use plaza_types::api::{CreateListingRequest, MessageBody};
use plaza_types::price::parse_display_price;

use crate::AppState;
use crate::error::ApiError;

pub async fn create_listing(
    State(state): State<AppState>,
    Json(req): Json<CreateListingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.title.trim().is_empty()
        || req.description.trim().is_empty()
        || req.price.trim().is_empty()
        || req.phone.trim().is_empty()
    {
        return Err(ApiError::BadRequest("required fields are missing".into()));
    }

    let value = parse_display_price(&req.price);
    let party_size: i64 = req
        .party_size
        .as_deref()
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(1);

    let id = state
        .db
        .insert_listing(&req.title, &req.description, value, &req.phone, party_size)?;

    info!("Listing {} created: {}", id, req.title);
    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: "listing created".into(),
        }),
    ))
}
