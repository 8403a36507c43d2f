//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short alias for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "ttl": 7 }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "alias": "1xCrcw",
///   "short_url": "https://s.example.com/1xCrcw",
///   "long_url": "https://example.com",
///   "ttl": 1704672000
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON for the request, the
/// URL is invalid or the TTL is out of range.
/// Returns 502 Bad Gateway if the store rejects the write.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let record = state
        .link_service
        .shorten(payload.url, payload.ttl)
        .await?;

    let short_url = state.link_service.short_url(&state.base_url, &record.alias);

    Ok(Json(ShortenResponse::from_record(record, short_url)))
}
