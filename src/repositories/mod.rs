//! Persistence access, one module per table.
//!
//! Functions here issue a single query each and never interpret the result;
//! existence policies live in `services`.

pub mod orders;
pub mod reservations;
pub mod restaurant_tables;
pub mod users;
