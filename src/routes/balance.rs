//! Bearer-gated balance lookup handler.
//!
//! Validates the `Authorization` header against the configured shared secret
//! and returns the configured account values. Each request is evaluated
//! independently against in-memory configuration; there is no other state.

use axum::{extract::State, http::header, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::auth;
use crate::error::AppError;
use crate::state::AppState;

/// Successful balance check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub user: String,
    pub balance: String,
}

/// Balance check handler.
///
/// Requires `Authorization: Bearer <token>` where the token equals the
/// configured secret. Responds 401 with a JSON error body otherwise.
#[instrument(name = "balance::check", skip(state, headers))]
pub async fn check(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<BalanceResponse>, AppError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::MalformedAuthHeader)?;

    let token = auth::parse_bearer(header)?;

    if !auth::token_matches(token, &state.config.secret_token) {
        tracing::warn!("Balance check rejected: token mismatch");
        return Err(AppError::InvalidToken);
    }

    Ok(Json(BalanceResponse {
        user: state.config.user.clone(),
        balance: state.config.balance.clone(),
    }))
}
