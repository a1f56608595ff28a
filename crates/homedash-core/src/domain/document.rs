//! Named persisted documents.
//!
//! Every piece of server state lives in one of four whole-file JSON documents.
//! [`DocumentKind`] names them; [`Document`] ties a typed struct to its kind.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{AuthSettings, DashboardSettings, LinkCollection, LinkOrder};

/// One of the four persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Links,
    LinksOrder,
    DashboardSettings,
    AuthSettings,
}

impl DocumentKind {
    /// Every kind, in first-run initialization order.
    pub const ALL: [Self; 4] = [
        Self::Links,
        Self::LinksOrder,
        Self::DashboardSettings,
        Self::AuthSettings,
    ];

    /// Stable storage name (also the file stem).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Links => "links",
            Self::LinksOrder => "links_order",
            Self::DashboardSettings => "dashboard_settings",
            Self::AuthSettings => "auth_settings",
        }
    }

    /// The hardcoded first-run value for this kind.
    pub fn default_value(self) -> serde_json::Value {
        // Serializing these plain structs cannot fail.
        let value = match self {
            Self::Links => serde_json::to_value(LinkCollection::default()),
            Self::LinksOrder => serde_json::to_value(LinkOrder::default()),
            Self::DashboardSettings => serde_json::to_value(DashboardSettings::default()),
            Self::AuthSettings => serde_json::to_value(AuthSettings::default()),
        };
        value.unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed document stored under a fixed [`DocumentKind`].
pub trait Document: Serialize + DeserializeOwned + Default + Send + Sync {
    const KIND: DocumentKind;
}

impl Document for LinkCollection {
    const KIND: DocumentKind = DocumentKind::Links;
}

impl Document for LinkOrder {
    const KIND: DocumentKind = DocumentKind::LinksOrder;
}

impl Document for DashboardSettings {
    const KIND: DocumentKind = DocumentKind::DashboardSettings;
}

impl Document for AuthSettings {
    const KIND: DocumentKind = DocumentKind::AuthSettings;
}
