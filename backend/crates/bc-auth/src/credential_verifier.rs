use crate::{AuthError, Result as AuthErrorResult, password};

use std::panic::Location;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use error_location::ErrorLocation;
use uuid::Uuid;

/// Stored hash for a user, as returned by the credential store
#[derive(Debug, Clone)]
pub struct StoredCredentials {
    pub user_id: Uuid,
    pub password_hash: String,
}

/// Lookup of stored credentials by (normalized) email
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_credentials(&self, email: &str) -> AuthErrorResult<Option<StoredCredentials>>;
}

/// Hash verified against when the email is unknown, so both failure paths
/// cost one Argon2 verification
static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

fn dummy_hash() -> Option<&'static str> {
    DUMMY_HASH
        .get_or_init(|| password::hash("bookclub-dummy-password").ok())
        .as_deref()
}

/// Checks an email/password pair against the credential store
#[derive(Clone)]
pub struct CredentialVerifier {
    store: Arc<dyn CredentialStore>,
}

impl CredentialVerifier {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Returns the subject id on a match and `None` otherwise. An unknown
    /// email and a wrong password are indistinguishable to the caller.
    pub async fn verify(&self, email: &str, password: &str) -> AuthErrorResult<Option<Uuid>> {
        let credentials = self.store.find_credentials(email).await?;

        let candidate = password.to_string();
        let (user_id, hashword) = match credentials {
            Some(c) => (Some(c.user_id), c.password_hash),
            None => (None, dummy_hash().unwrap_or_default().to_string()),
        };

        // Argon2 is CPU-bound; keep it off the async workers
        let matched = tokio::task::spawn_blocking(move || password::verify(&candidate, &hashword))
            .await
            .map_err(|e| AuthError::PasswordHash {
                message: format!("verification task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(user_id.filter(|_| matched))
    }
}
