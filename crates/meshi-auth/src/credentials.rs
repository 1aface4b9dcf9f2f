//! In-memory credential service.
//!
//! One live session token per user: logging in again replaces it.

use std::collections::HashMap;

use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use tracing::info;

use meshi_core::{Error, Result};

struct UserRecord {
    password_hash: String,
    session_token: String,
}

#[derive(Default)]
struct Accounts {
    users: HashMap<String, UserRecord>,
    /// token -> username
    sessions: HashMap<String, String>,
}

pub struct CredentialService {
    accounts: RwLock<Accounts>,
}

impl CredentialService {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(Accounts::default()),
        }
    }

    /// Create an account and return its first session token.
    pub fn register(&self, name: &str, password: &str) -> Result<String> {
        let mut accounts = self.accounts.write();
        if accounts.users.contains_key(name) {
            return Err(Error::AlreadyExists("User already exists".into()));
        }

        let token = generate_session_token();
        accounts.users.insert(
            name.to_string(),
            UserRecord {
                password_hash: hash_password(password),
                session_token: token.clone(),
            },
        );
        accounts.sessions.insert(token.clone(), name.to_string());
        info!("Registered user {}", name);
        Ok(token)
    }

    /// Check credentials and issue a fresh token.
    pub fn login(&self, name: &str, password: &str) -> Result<String> {
        let mut accounts = self.accounts.write();
        let invalid = || Error::Unauthorized("Invalid credentials".into());

        let user = accounts.users.get_mut(name).ok_or_else(invalid)?;
        if user.password_hash != hash_password(password) {
            return Err(invalid());
        }

        let token = generate_session_token();
        let previous = std::mem::replace(&mut user.session_token, token.clone());
        accounts.sessions.remove(&previous);
        accounts.sessions.insert(token.clone(), name.to_string());
        info!("User {} logged in", name);
        Ok(token)
    }

    /// Username owning `token`.
    pub fn resolve(&self, token: &str) -> Result<String> {
        self.accounts
            .read()
            .sessions
            .get(token)
            .cloned()
            .ok_or_else(|| Error::Unauthorized("Invalid authentication token".into()))
    }
}

impl Default for CredentialService {
    fn default() -> Self {
        Self::new()
    }
}

/// Hex SHA-256 of a password.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// 64 hex characters from two random v4 UUIDs.
fn generate_session_token() -> String {
    format!(
        "{}{}",
        uuid::Uuid::new_v4().simple(),
        uuid::Uuid::new_v4().simple()
    )
}
