//! # Musicat Common Library
//!
//! Shared code for the musicat catalog service including:
//! - Database bootstrap (schema, pragmas, seeding)
//! - Row models and the optional `Reference` wrapper
//! - Reference enums (sex, title)
//! - Configuration loading
//! - Credential hashing and session tokens

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod lookup;
pub mod reference;

pub use error::{Error, Result};
pub use lookup::{Sex, Title};
pub use reference::Reference;
