//! Client-side domain services.
//!
//! Each service talks to the server through [`ApiClient`](crate::ApiClient)
//! and keeps the local cache in step, falling back to it whenever the server
//! cannot be reached or answers with an error.

mod auth;
mod dashboard;
mod links;

pub use auth::AuthClientService;
pub use dashboard::DashboardSettingsService;
pub use links::LinkClientService;

pub(crate) const LINKS_PATH: &str = "/links";
pub(crate) const LINKS_ORDER_PATH: &str = "/links/order";
pub(crate) const DASHBOARD_SETTINGS_PATH: &str = "/dashboard/settings";
pub(crate) const AUTH_SETTINGS_PATH: &str = "/auth/settings";
pub(crate) const AUTH_LOGIN_PATH: &str = "/auth/login";
pub(crate) const AUTH_VERIFY_PATH: &str = "/auth/verify";

pub(crate) fn link_path(id: &str) -> String {
    format!("{LINKS_PATH}/{id}")
}
