//! Session tokens
//!
//! HS256 JSON Web Tokens signed with the service secret. The subject is the
//! user id; `exp` is checked on every verification.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Tokens are valid for 24 hours
pub const TOKEN_LIFETIME_SECS: i64 = 24 * 60 * 60;

/// Token issue / validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a JWT, or claims of the wrong shape
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match
    #[error("Invalid token signature")]
    BadSignature,

    /// Expiry time has passed
    #[error("Token expired")]
    Expired,

    /// Token could not be signed
    #[error("Cannot sign token: {0}")]
    Signing(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Issue a token for `user_id`, valid for [`TOKEN_LIFETIME_SECS`]
pub fn issue_token(user_id: i64, secret: &str) -> Result<String, TokenError> {
    issue_token_at(user_id, secret, now_secs())
}

fn issue_token_at(user_id: i64, secret: &str, now: i64) -> Result<String, TokenError> {
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + TOKEN_LIFETIME_SECS,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Verify a token and return the user id it was issued for
pub fn verify_token(token: &str, secret: &str) -> Result<i64, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => TokenError::BadSignature,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        })?;

    data.claims.sub.parse().map_err(|_| TokenError::Malformed)
}
