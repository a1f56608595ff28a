//! Shared-credential login with offline fallback.
//!
//! Offline, credentials are checked against the cached auth settings and a
//! timestamp token is stored on success. Servers only ever hand out the
//! masked password, so a cache filled from the server cannot authenticate
//! offline; only settings saved from this machine can.

use homedash_core::utils::time::now_millis;
use homedash_core::{
    Acknowledgement, AuthSettings, DISABLED_TOKEN, LoginRequest, LoginResponse, PASSWORD_MASK,
    VerifyRequest, VerifyResponse,
};
use tracing::{debug, info};

use super::{AUTH_LOGIN_PATH, AUTH_SETTINGS_PATH, AUTH_VERIFY_PATH};
use crate::api::ApiClient;
use crate::cache::{CacheKey, DocumentCache};
use crate::fallback::{Synced, with_fallback};

#[derive(Clone)]
pub struct AuthClientService {
    api: ApiClient,
    cache: DocumentCache,
}

impl AuthClientService {
    pub const fn new(api: ApiClient, cache: DocumentCache) -> Self {
        Self { api, cache }
    }

    pub async fn get_auth_settings(&self) -> Synced<AuthSettings> {
        with_fallback(
            "getAuthSettings",
            self.api.get::<AuthSettings>(AUTH_SETTINGS_PATH),
            |settings| self.cache.store(CacheKey::AuthSettings, settings),
            |_| self.cache.load(CacheKey::AuthSettings).unwrap_or_default(),
        )
        .await
    }

    pub async fn save_auth_settings(&self, settings: &AuthSettings) -> Synced<()> {
        with_fallback(
            "saveAuthSettings",
            async {
                self.api
                    .put::<_, Acknowledgement>(AUTH_SETTINGS_PATH, settings)
                    .await
                    .map(|_| ())
            },
            |_| self.cache.store(CacheKey::AuthSettings, settings),
            |_| self.cache.store(CacheKey::AuthSettings, settings),
        )
        .await
    }

    /// Log in, storing the token on success.
    ///
    /// A 401 from the server is final. Any other failure falls back to the
    /// cached settings.
    pub async fn login(&self, username: &str, password: &str) -> Synced<bool> {
        let settings = self.get_auth_settings().await;
        if !settings.value.is_enabled {
            return settings.map(|_| true);
        }

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let remote = async {
            match self
                .api
                .post::<_, LoginResponse>(AUTH_LOGIN_PATH, &request)
                .await
            {
                Err(e) if e.is_unauthorized() => Ok(LoginResponse::rejected()),
                other => other,
            }
        };

        let response = with_fallback(
            "login",
            remote,
            |response| {
                if let Some(token) = accepted_token(response) {
                    self.cache.store(CacheKey::AuthToken, token);
                }
            },
            |_| self.offline_login(username, password),
        )
        .await;

        let granted = response.map(|response| accepted_token(&response).is_some());
        debug!(target: "homedash.client", granted = granted.value, source = ?granted.source, "Login finished");
        granted
    }

    fn offline_login(&self, username: &str, password: &str) -> LoginResponse {
        let Some(cached) = self.cache.load::<AuthSettings>(CacheKey::AuthSettings) else {
            return LoginResponse::granted(DISABLED_TOKEN);
        };
        if !cached.is_enabled {
            return LoginResponse::granted(DISABLED_TOKEN);
        }
        if cached.password == PASSWORD_MASK || !cached.credentials_match(username, password) {
            return LoginResponse::rejected();
        }

        let token = now_millis().to_string();
        self.cache.store(CacheKey::AuthToken, &token);
        LoginResponse::granted(token)
    }

    pub fn logout(&self) {
        self.cache.remove(CacheKey::AuthToken);
        info!(target: "homedash.client", "Logged out");
    }

    /// The stored token, if any.
    pub fn token(&self) -> Option<String> {
        self.cache.load(CacheKey::AuthToken)
    }

    pub async fn is_authenticated(&self) -> Synced<bool> {
        let settings = self.get_auth_settings().await;
        if !settings.value.is_enabled {
            return settings.map(|_| true);
        }

        let Some(token) = self.token() else {
            return settings.map(|_| false);
        };

        let verified = with_fallback(
            "isAuthenticated",
            self.api
                .post::<_, VerifyResponse>(AUTH_VERIFY_PATH, &VerifyRequest { token }),
            |_| {},
            |_| match self.cache.load::<AuthSettings>(CacheKey::AuthSettings) {
                Some(cached) if cached.is_enabled => VerifyResponse {
                    valid: self.token().is_some(),
                },
                _ => VerifyResponse { valid: true },
            },
        )
        .await;

        verified.map(|response| response.valid)
    }

    /// Load auth settings at startup, seeding the cache when offline.
    pub async fn initialize(&self) -> Synced<AuthSettings> {
        let settings = self.get_auth_settings().await;
        if !settings.is_remote() && !self.cache.contains(CacheKey::AuthSettings) {
            self.cache
                .store(CacheKey::AuthSettings, &AuthSettings::default());
        }
        settings
    }
}

fn accepted_token(response: &LoginResponse) -> Option<&str> {
    response
        .token
        .as_deref()
        .filter(|token| response.success && !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::fallback::Source;
    use crate::http::Method;
    use crate::http::testing::FakeBackend;
    use crate::services::test_support::fixture;
    use serde_json::json;

    fn enabled(password: &str) -> AuthSettings {
        AuthSettings {
            is_enabled: true,
            username: "admin".to_string(),
            password: password.to_string(),
        }
    }

    fn enabled_server() -> FakeBackend {
        FakeBackend::new().with_response(
            Method::Get,
            "/auth/settings",
            json!({"isEnabled": true, "username": "admin", "password": "********"}),
        )
    }

    #[tokio::test]
    async fn login_short_circuits_when_auth_disabled() {
        let fake = FakeBackend::new().with_response(
            Method::Get,
            "/auth/settings",
            json!({"isEnabled": false, "username": "", "password": ""}),
        );
        let (fake, api, cache) = fixture(fake);
        let service = AuthClientService::new(api, cache);

        assert_eq!(service.login("", "").await, Synced::remote(true));
        assert_eq!(fake.calls_to(Method::Post, "/auth/login"), 0);
    }

    #[tokio::test]
    async fn login_stores_server_token() {
        let fake = enabled_server().with_response(
            Method::Post,
            "/auth/login",
            json!({"success": true, "token": "1700000000000"}),
        );
        let (_, api, cache) = fixture(fake);
        let service = AuthClientService::new(api, cache);

        assert_eq!(service.login("admin", "hunter2").await, Synced::remote(true));
        assert_eq!(service.token().as_deref(), Some("1700000000000"));
    }

    #[tokio::test]
    async fn login_without_token_is_refused() {
        let fake = enabled_server().with_response(Method::Post, "/auth/login", json!({"success": true}));
        let (_, api, cache) = fixture(fake);
        let service = AuthClientService::new(api, cache);

        assert_eq!(service.login("admin", "hunter2").await, Synced::remote(false));
        assert_eq!(service.token(), None);
    }

    #[tokio::test]
    async fn unauthorized_is_final_even_with_matching_cache() {
        let fake = FakeBackend::new()
            .with_error(Method::Get, "/auth/settings", ApiError::from_status(500, ""))
            .with_error(
                Method::Post,
                "/auth/login",
                ApiError::from_status(401, r#"{"success":false,"message":"Invalid credentials"}"#),
            );
        let (_, api, cache) = fixture(fake);
        cache.store(CacheKey::AuthSettings, &enabled("hunter2"));
        let service = AuthClientService::new(api, cache);

        let result = service.login("admin", "hunter2").await;

        assert!(!result.value);
        assert_eq!(result.source, Source::Remote);
        assert_eq!(service.token(), None);
    }

    #[tokio::test]
    async fn offline_login_checks_cached_credentials() {
        let (_, api, cache) = fixture(FakeBackend::offline());
        cache.store(CacheKey::AuthSettings, &enabled("hunter2"));
        let service = AuthClientService::new(api, cache);

        assert_eq!(service.login("admin", "wrong").await, Synced::cached(false));
        assert_eq!(service.token(), None);

        assert_eq!(service.login("admin", "hunter2").await, Synced::cached(true));
        assert!(service.token().is_some());
    }

    #[tokio::test]
    async fn offline_login_never_matches_masked_password() {
        let (_, api, cache) = fixture(FakeBackend::offline());
        cache.store(CacheKey::AuthSettings, &enabled(PASSWORD_MASK));
        let service = AuthClientService::new(api, cache);

        assert_eq!(service.login("admin", PASSWORD_MASK).await, Synced::cached(false));
    }

    #[tokio::test]
    async fn server_error_on_login_degrades_to_cache() {
        let fake = enabled_server().with_error(
            Method::Post,
            "/auth/login",
            ApiError::from_status(500, r#"{"error":"Failed to login","status":500}"#),
        );
        let (_, api, cache) = fixture(fake);
        let service = AuthClientService::new(api, cache);

        // The mirrored settings carry the mask, so the offline check fails.
        assert_eq!(service.login("admin", "hunter2").await, Synced::cached(false));
    }

    #[tokio::test]
    async fn offline_without_cached_settings_allows_access() {
        let (_, api, cache) = fixture(FakeBackend::offline());
        let service = AuthClientService::new(api, cache);

        assert!(service.login("anyone", "x").await.value);
        assert!(service.is_authenticated().await.value);
    }

    #[tokio::test]
    async fn is_authenticated_offline_tracks_token_presence() {
        let (_, api, cache) = fixture(FakeBackend::offline());
        cache.store(CacheKey::AuthSettings, &enabled("hunter2"));
        let service = AuthClientService::new(api, cache.clone());

        assert!(!service.is_authenticated().await.value);

        cache.store(CacheKey::AuthToken, "1");
        assert_eq!(service.is_authenticated().await, Synced::cached(true));

        service.logout();
        assert!(!service.is_authenticated().await.value);
    }

    #[tokio::test]
    async fn is_authenticated_online_asks_server() {
        let fake = enabled_server().with_response(Method::Post, "/auth/verify", json!({"valid": true}));
        let (fake, api, cache) = fixture(fake);
        cache.store(CacheKey::AuthToken, "42");
        let service = AuthClientService::new(api, cache);

        assert_eq!(service.is_authenticated().await, Synced::remote(true));
        let verify = fake
            .calls()
            .into_iter()
            .find(|call| call.path == "/auth/verify")
            .unwrap();
        assert_eq!(verify.body, Some(json!({"token": "42"})));
    }

    #[tokio::test]
    async fn initialize_offline_seeds_default_settings() {
        let (_, api, cache) = fixture(FakeBackend::offline());
        let service = AuthClientService::new(api, cache.clone());

        let settings = service.initialize().await;

        assert_eq!(settings.source, Source::Cache);
        assert_eq!(
            cache.load::<AuthSettings>(CacheKey::AuthSettings),
            Some(AuthSettings::default())
        );
    }
}
