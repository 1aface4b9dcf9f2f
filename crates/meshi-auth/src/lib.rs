//! Meshi Auth — registration, login and bearer-token resolution.

pub mod credentials;

pub use credentials::{hash_password, CredentialService};
