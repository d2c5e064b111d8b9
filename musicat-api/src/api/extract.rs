//! Request extractors
//!
//! `ValidatedJson` and `ApiPath` turn malformed bodies, failed field checks
//! and unparseable path segments into 400s with the usual error body. `AuthenticatedUser` guards the mutating routes
//! with a bearer session token; public and protected methods share paths,
//! so this is an extractor rather than a router layer.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::AUTHORIZATION, request::Parts},
    Json,
};
use musicat_common::auth::verify_token;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::validation::Validate;
use crate::error::ApiError;
use crate::AppState;

/// JSON body that parsed and passed [`Validate`]
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(ApiError::BadRequest)?;
        Ok(Self(value))
    }
}

/// Path parameters; a segment that does not parse is a 400
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Caller identified by `Authorization: Bearer <token>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Expected a Bearer token".to_string()))?;

        let user_id = verify_token(token.trim(), &state.token_secret).map_err(|e| {
            debug!("Rejected token: {}", e);
            ApiError::Unauthorized(e.to_string())
        })?;

        Ok(Self { user_id })
    }
}
