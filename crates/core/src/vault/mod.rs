//! Vault state snapshot, stored-record loading and the read-side service.

mod migration;
mod vault_model;
mod vault_service;

pub use vault_model::VaultState;
pub use vault_service::{VaultService, VaultServiceTrait};
