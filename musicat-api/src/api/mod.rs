//! HTTP API handlers for musicat-api
//!
//! Reads are public. Creating, replacing and deleting rows, and managing
//! song credits, need a session token from `/register` or `/login`.

pub mod albums;
pub mod artists;
pub mod auth;
pub mod bands;
pub mod extract;
pub mod health;
pub mod lookups;
pub mod songs;
pub mod validation;

pub use extract::{AuthenticatedUser, ValidatedJson};
pub use health::health_routes;
