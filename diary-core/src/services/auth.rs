//! Authentication session
//!
//! The login/signup network calls live outside this crate; they hand the
//! resulting token and user here. A session counts as signed in while a
//! non-empty access token is stored.

use crate::config::{ACCESS_TOKEN_KEY, USER_KEY};
use crate::error::Result;
use crate::storage::SharedStorage;
use serde::{Deserialize, Serialize};

/// Live authentication predicate consumed by the auth guard
pub trait Authenticator: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

/// Signed-in user as returned by the login API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Any additional profile fields, kept as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Session persisted in local storage
#[derive(Clone)]
pub struct AuthSession {
    storage: SharedStorage,
}

impl AuthSession {
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }

    /// Store the token and user after a successful login
    pub fn login(&self, user: &User, access_token: &str) -> Result<()> {
        self.storage.set_item(ACCESS_TOKEN_KEY, access_token)?;
        self.storage
            .set_item(USER_KEY, &serde_json::to_string(user)?)?;

        tracing::info!("User signed in: {}", user.email);
        Ok(())
    }

    /// Forget the token and user
    pub fn logout(&self) -> Result<()> {
        self.storage.remove_item(ACCESS_TOKEN_KEY)?;
        self.storage.remove_item(USER_KEY)?;

        tracing::info!("User signed out");
        Ok(())
    }

    pub fn access_token(&self) -> Option<String> {
        match self.storage.get_item(ACCESS_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::error!("Failed to read access token: {}", e);
                None
            }
        }
    }

    /// Stored user, or `None` when absent or unreadable
    pub fn user(&self) -> Option<User> {
        let raw = match self.storage.get_item(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::error!("Failed to read user: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Failed to parse stored user: {}", e);
                None
            }
        }
    }
}

impl Authenticator for AuthSession {
    fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}
