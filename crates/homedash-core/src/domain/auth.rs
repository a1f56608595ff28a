//! Shared-credential auth types.
//!
//! The dashboard has a single optional username/password gate. The password
//! is stored in plaintext and tokens are bare timestamps with no signature or
//! expiry. This is kept for compatibility with existing data files and is not
//! a security boundary.

use serde::{Deserialize, Serialize};

/// Placeholder sent instead of a stored password; means "unchanged" on write.
pub const PASSWORD_MASK: &str = "********";

/// Token handed out when auth is disabled.
pub const DISABLED_TOKEN: &str = "disabled";

/// Message returned with a rejected login.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// The `auth_settings` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSettings {
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl AuthSettings {
    /// Copy with the password replaced by [`PASSWORD_MASK`] (or `""` when unset).
    pub fn masked(&self) -> Self {
        let password = if self.password.is_empty() {
            String::new()
        } else {
            PASSWORD_MASK.to_string()
        };
        Self {
            is_enabled: self.is_enabled,
            username: self.username.clone(),
            password,
        }
    }

    /// Resolve an incoming write against the stored settings.
    ///
    /// A masked password keeps `stored.password`; anything else is taken verbatim.
    pub fn resolve_against(mut self, stored: &Self) -> Self {
        if self.password == PASSWORD_MASK {
            self.password.clone_from(&stored.password);
        }
        self
    }

    /// Strict equality check on both credentials.
    pub fn credentials_match(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Enabled auth should carry non-empty credentials. Not enforced.
    pub const fn has_usable_credentials(&self) -> bool {
        !self.is_enabled || (!self.username.is_empty() && !self.password.is_empty())
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn granted(token: impl Into<String>) -> Self {
        Self {
            success: true,
            token: Some(token.into()),
            message: None,
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            token: None,
            message: Some(INVALID_CREDENTIALS.to_string()),
        }
    }
}

/// Body of `POST /auth/verify`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub token: String,
}

/// Response of `POST /auth/verify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

/// Plain `{ "success": true }` acknowledgement for wholesale writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
}

impl Acknowledgement {
    pub const OK: Self = Self { success: true };
}
