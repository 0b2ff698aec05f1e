//! Translate an incoming filter/sort request into an AQL query to be run against the database.

pub mod error;
pub mod query;
pub mod request;
