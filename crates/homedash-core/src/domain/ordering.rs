//! Display ordering and search filtering for links.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Link;

/// How the dashboard orders links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Manual order from the `links_order` document.
    #[default]
    Custom,
    /// Case-insensitive by name, ascending.
    Name,
    /// Newest `created_at` first.
    Created,
    /// Most recently `updated_at` first.
    Updated,
}

impl SortOption {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Name => "name",
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "custom" => Ok(Self::Custom),
            "name" => Ok(Self::Name),
            "created" => Ok(Self::Created),
            "updated" => Ok(Self::Updated),
            other => Err(format!("unknown sort option: {other}")),
        }
    }
}

/// How a link listing is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Name and URL only.
    #[default]
    Grid,
    /// One row per link with its description.
    List,
    /// Every field, one block per link.
    Detailed,
}

impl ViewMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
            Self::Detailed => "detailed",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            "detailed" => Ok(Self::Detailed),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

/// Keep links whose name or description contains `query`, ignoring case.
///
/// An empty query keeps everything.
pub fn filter_links(links: Vec<Link>, query: &str) -> Vec<Link> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return links;
    }
    links
        .into_iter()
        .filter(|link| {
            link.name.to_lowercase().contains(&needle)
                || link.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sort links for display.
///
/// For [`SortOption::Custom`], links follow their index in `order`; links
/// missing from `order` go last and keep their relative order. All sorts are
/// stable.
pub fn sort_links(mut links: Vec<Link>, option: SortOption, order: &[String]) -> Vec<Link> {
    match option {
        SortOption::Custom => {
            let rank: HashMap<&str, usize> = order
                .iter()
                .enumerate()
                .rev()
                .map(|(index, id)| (id.as_str(), index))
                .collect();
            links.sort_by_key(|link| rank.get(link.id.as_str()).copied().unwrap_or(usize::MAX));
        }
        SortOption::Name => links.sort_by(compare_names),
        SortOption::Created => links.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::Updated => links.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
    links
}

fn compare_names(a: &Link, b: &Link) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Move `id` to `position` (clamped) within `order`, appending it if absent.
pub fn move_in_order(mut order: Vec<String>, id: &str, position: usize) -> Vec<String> {
    order.retain(|existing| existing != id);
    let index = position.min(order.len());
    order.insert(index, id.to_string());
    order
}
