//! Link domain types.
//!
//! These types represent dashboard links, independent of any
//! infrastructure concerns (files, HTTP, cache).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─────────────────────────────────────────────────────────────────────────────
// Link Types
// ─────────────────────────────────────────────────────────────────────────────

/// A persisted dashboard link.
///
/// `id` is assigned once at creation and never reassigned. `created_at` is
/// fixed at creation; `updated_at` is refreshed on every successful update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Stable unique identifier (UUID v4 text when generated here).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Target URL.
    pub url: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Optional image, usually a `data:` URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
    /// Last update time in epoch milliseconds.
    pub updated_at: i64,
}

/// Create payload for a link.
///
/// Callers may supply `id` and timestamps themselves (the client does);
/// anything missing is filled in by [`NewLink::into_link`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl NewLink {
    /// Materialize a full [`Link`], generating whatever the caller left out.
    ///
    /// A blank caller id counts as missing. `updated_at` defaults to
    /// `created_at`, so a fresh link always has equal timestamps.
    pub fn into_link(self, now_ms: i64) -> Link {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(generate_link_id);
        let created_at = self.created_at.unwrap_or(now_ms);
        let updated_at = self.updated_at.unwrap_or(created_at);

        Link {
            id,
            name: self.name,
            url: self.url,
            description: self.description,
            image_url: self.image_url,
            created_at,
            updated_at,
        }
    }
}

impl From<Link> for NewLink {
    fn from(link: Link) -> Self {
        Self {
            id: Some(link.id),
            name: link.name,
            url: link.url,
            description: link.description,
            image_url: link.image_url,
            created_at: Some(link.created_at),
            updated_at: Some(link.updated_at),
        }
    }
}

/// User-entered link fields, before any id or timestamp exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDraft {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl LinkDraft {
    /// Stamp a fresh id and `created_at == updated_at == now_ms`.
    pub fn stamp(self, now_ms: i64) -> Link {
        Link {
            id: generate_link_id(),
            name: self.name,
            url: self.url,
            description: self.description,
            image_url: self.image_url,
            created_at: now_ms,
            updated_at: now_ms,
        }
    }
}

/// Generate a new link identifier.
pub fn generate_link_id() -> String {
    Uuid::new_v4().to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Collection Types
// ─────────────────────────────────────────────────────────────────────────────

/// The `links` document: every link, in storage order (not display order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCollection {
    #[serde(default)]
    pub links: Vec<Link>,
}

impl LinkCollection {
    /// Position of the link with `id`, by linear scan.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.links.iter().position(|link| link.id == id)
    }

    /// Insert `link`, replacing any existing entry with the same id in place.
    pub fn upsert(&mut self, link: Link) {
        match self.position(&link.id) {
            Some(index) => self.links[index] = link,
            None => self.links.push(link),
        }
    }

    /// Replace the entry with the same id; returns false if it is absent.
    pub fn replace(&mut self, link: Link) -> bool {
        match self.position(&link.id) {
            Some(index) => {
                self.links[index] = link;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with `id`, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<Link> {
        self.position(id).map(|index| self.links.remove(index))
    }
}

/// The `links_order` document: link ids in the user's manual order.
///
/// Best-effort only. Ids may reference deleted links and live links may be
/// missing; consumers treat missing ids as "last".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkOrder {
    #[serde(default)]
    pub order: Vec<String>,
}

impl LinkOrder {
    pub const fn new(order: Vec<String>) -> Self {
        Self { order }
    }

    /// Append `id` unless it is already present.
    pub fn append_unique(&mut self, id: &str) {
        if !self.order.iter().any(|existing| existing == id) {
            self.order.push(id.to_string());
        }
    }

    /// Drop every occurrence of `id`.
    pub fn remove(&mut self, id: &str) {
        self.order.retain(|existing| existing != id);
    }
}
