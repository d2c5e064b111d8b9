//! Entity Repository
//!
//! Parameterized queries for the catalog tables. Fetch-by-id returns
//! `Option` ("no rows" is not an error); every mutation runs in a
//! transaction under [`unit_of_work`].

pub mod albums;
pub mod artists;
pub mod bands;
pub mod lookups;
pub mod songs;
pub mod users;

pub use musicat_common::db::unit_of_work;
