//! Business rules between the HTTP handlers and the repositories.
//!
//! Lookups return `Option`/`Vec` and never treat absence as an error; the
//! handlers decide what absence means on the wire.

pub mod orders;
pub mod reservations;
pub mod restaurant_tables;
pub mod users;

/// Shown when a delete would orphan dependent records
pub const DEPENDENTS_EXIST: &str = "Suppression impossible : des enregistrements liés existent";
