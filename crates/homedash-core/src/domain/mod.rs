//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (files, HTTP, local cache).
//!
//! # Structure
//!
//! - `link` - Link types (`Link`, `NewLink`, `LinkCollection`, `LinkOrder`)
//! - `dashboard` - Dashboard appearance settings
//! - `auth` - Shared-credential auth settings and wire types
//! - `document` - Named persisted documents
//! - `ordering` - Display sorting, view modes and search filtering

mod auth;
mod dashboard;
mod document;
mod link;
pub mod ordering;

// Re-export link types at the domain level for convenience
pub use link::{Link, LinkCollection, LinkDraft, LinkOrder, NewLink, generate_link_id};

// Re-export settings types at the domain level for convenience
pub use dashboard::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_PRIMARY_COLOR, DEFAULT_SUBTITLE, DEFAULT_TITLE,
    DashboardSettings, DashboardSettingsUpdate,
};

// Re-export auth types at the domain level for convenience
pub use auth::{
    Acknowledgement, AuthSettings, DISABLED_TOKEN, INVALID_CREDENTIALS, LoginRequest,
    LoginResponse, PASSWORD_MASK, VerifyRequest, VerifyResponse,
};

pub use document::{Document, DocumentKind};
pub use ordering::{SortOption, ViewMode, filter_links, move_in_order, sort_links};
