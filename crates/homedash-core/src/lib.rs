#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    Acknowledgement, AuthSettings, DISABLED_TOKEN, DashboardSettings, DashboardSettingsUpdate,
    Document, DocumentKind, INVALID_CREDENTIALS, Link, LinkCollection, LinkDraft, LinkOrder,
    LoginRequest, LoginResponse, NewLink, PASSWORD_MASK, SortOption, VerifyRequest,
    VerifyResponse, ViewMode, filter_links, move_in_order, sort_links,
};
pub use ports::{CoreError, DocumentStore, Documents, RepositoryError};
pub use services::{AppCore, AuthService, DashboardService, LinkService};

// Re-export path utilities
pub use paths::{
    DirectoryCreationStrategy, PathError, ResolvedPaths, cache_dir, client_cache_path, data_root,
    documents_dir, ensure_directory,
};
