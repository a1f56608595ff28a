//! Auth service - the single shared-credential gate.
//!
//! Passwords are stored and compared in plaintext, and tokens are bare
//! timestamps that any non-empty string satisfies. Kept for compatibility
//! with existing data; do not treat this as access control.

use std::sync::Arc;

use crate::domain::{
    AuthSettings, DISABLED_TOKEN, LoginRequest, LoginResponse, VerifyRequest, VerifyResponse,
};
use crate::ports::{CoreError, DocumentStore, Documents};
use crate::utils::time::now_millis;

/// Service for auth settings, login and token checks.
pub struct AuthService {
    docs: Documents,
}

impl AuthService {
    /// Create a new auth service.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            docs: Documents::new(store),
        }
    }

    /// Stored settings with the password masked.
    pub async fn settings(&self) -> Result<AuthSettings, CoreError> {
        let stored: AuthSettings = self.docs.load().await?;
        Ok(stored.masked())
    }

    /// Save settings. A masked password keeps the stored one.
    pub async fn save(&self, incoming: AuthSettings) -> Result<(), CoreError> {
        let stored: AuthSettings = self.docs.load().await?;
        let resolved = incoming.resolve_against(&stored);
        if !resolved.has_usable_credentials() {
            tracing::warn!(
                target: "homedash.api",
                username = %resolved.username,
                "Auth enabled without a username or password"
            );
        }
        Ok(self.docs.save(&resolved).await?)
    }

    /// Check credentials and mint a token.
    ///
    /// Returns [`CoreError::Unauthorized`] when auth is enabled and the
    /// credentials do not match exactly.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, CoreError> {
        let stored: AuthSettings = self.docs.load().await?;
        if !stored.is_enabled {
            return Ok(LoginResponse::granted(DISABLED_TOKEN));
        }
        if stored.credentials_match(&request.username, &request.password) {
            return Ok(LoginResponse::granted(now_millis().to_string()));
        }
        tracing::info!(target: "homedash.api", username = %request.username, "Login rejected");
        Err(CoreError::Unauthorized)
    }

    /// Any non-empty token is valid; everything is valid while auth is off.
    pub async fn verify(&self, request: &VerifyRequest) -> Result<VerifyResponse, CoreError> {
        let stored: AuthSettings = self.docs.load().await?;
        let valid = !stored.is_enabled || !request.token.is_empty();
        Ok(VerifyResponse { valid })
    }
}
