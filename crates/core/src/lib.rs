//! Domain types, error taxonomy, and pure validation rules for the
//! Highfields Community Church backend.
//!
//! Nothing in this crate performs I/O; the `db` and `api` crates build on it.

pub mod checkins;
pub mod donations;
pub mod error;
pub mod forms;
pub mod life_groups;
pub mod types;
