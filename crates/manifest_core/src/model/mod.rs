//! Domain model for accounts and yearly planning data.
//!
//! # Responsibility
//! - Define the data shapes persisted to `config.json` and the planning DB.
//! - Keep JSON field names aligned with what the GUI shell sends and reads.
//!
//! # Invariants
//! - Account identifiers are unique within `Config::accounts`.
//! - Planning documents are keyed by year string.

pub mod account;
pub mod annual;
