//! Authentication middleware for bearer token validation

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use tracing::warn;
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// Authenticated user information
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
}

/// Authentication middleware
///
/// Rejects the request with 401 unless it carries a valid bearer token
/// whose user still exists; otherwise inserts an [`AuthUser`] into the
/// request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let bearer = req
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or(ApiError::Unauthorized)?;

    let claims = state
        .jwt_service
        .validate_token(bearer.token())
        .map_err(|e| {
            warn!("Failed to validate token: {}", e);
            ApiError::Unauthorized
        })?;

    // The username is re-read from storage since it may have changed since issuance
    let user = state
        .user_repository
        .find_by_id(claims.sub)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    req.extensions_mut().insert(AuthUser {
        id: user.id,
        username: user.username,
    });

    Ok(next.run(req).await)
}
