//! Warranty Vault Core - valuation, warranty and resale engines.
//!
//! This crate holds the business logic of the vault. It performs no IO:
//! callers load a [`VaultState`] snapshot, pass today's date explicitly and
//! persist whatever snapshot a mutating operation hands back.

pub mod advisor;
pub mod categories;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod items;
pub mod settings;
pub mod statistics;
pub mod utils;
pub mod valuation;
pub mod vault;
pub mod warranty;

pub use vault::{VaultService, VaultServiceTrait, VaultState};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
