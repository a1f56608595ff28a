//! Dashboard appearance settings.

use serde::{Deserialize, Serialize};

/// Default dashboard title.
pub const DEFAULT_TITLE: &str = "Services Dashboard";

/// Default dashboard subtitle.
pub const DEFAULT_SUBTITLE: &str = "Access all your local services in one place";

/// Default primary (accent) color.
pub const DEFAULT_PRIMARY_COLOR: &str = "#2563eb";

/// Default background color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// The `dashboard_settings` document. Singleton, no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSettings {
    pub title: String,
    pub subtitle: String,
    pub primary_color: String,
    pub background_color: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

/// Partial dashboard settings update.
///
/// `None` fields are left unchanged. Used by front ends that edit one field
/// at a time before writing the whole document back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSettingsUpdate {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub primary_color: Option<String>,
    pub background_color: Option<String>,
}

impl DashboardSettingsUpdate {
    /// True when no field would change.
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subtitle.is_none()
            && self.primary_color.is_none()
            && self.background_color.is_none()
    }
}

impl DashboardSettings {
    /// Apply a partial update in place.
    pub fn merge(&mut self, update: DashboardSettingsUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(subtitle) = update.subtitle {
            self.subtitle = subtitle;
        }
        if let Some(color) = update.primary_color {
            self.primary_color = color;
        }
        if let Some(color) = update.background_color {
            self.background_color = color;
        }
    }
}
