//! Credential handling
//!
//! Pure functions only: password hashing and session token issue/verify.
//! No HTTP framework dependencies; the service wraps these in its own
//! extractor.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password, HASH_COST};
pub use token::{issue_token, verify_token, TokenError, TOKEN_LIFETIME_SECS};
