//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its long URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias is unknown or expired.
/// Returns 502 Bad Gateway if the store lookup fails.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve(&alias).await?;

    Ok(Redirect::temporary(&long_url))
}
