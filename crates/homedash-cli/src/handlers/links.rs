//! Links command handlers.

use anyhow::Result;
use homedash_core::{Link, LinkDraft, LinkOrder, SortOption, ViewMode};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{
    format_optional, format_timestamp, print_separator, report_source, truncate_string,
};

/// Field edits for `links update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkEdits {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    /// `Some("")` clears the image.
    pub image_url: Option<String>,
}

impl LinkEdits {
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
    }

    /// Apply the edits to `link`.
    pub fn apply(self, mut link: Link) -> Link {
        if let Some(name) = self.name {
            link.name = name;
        }
        if let Some(url) = self.url {
            link.url = url;
        }
        if let Some(description) = self.description {
            link.description = description;
        }
        if let Some(image_url) = self.image_url {
            link.image_url = Some(image_url).filter(|url| !url.is_empty());
        }
        link
    }
}

/// List links in display order.
///
/// An explicit `--sort` or `--view` is remembered; without one the last
/// choice is used.
pub async fn list(
    ctx: &CliContext,
    sort: Option<SortOption>,
    view: Option<ViewMode>,
    search: Option<&str>,
) -> Result<()> {
    let service = ctx.client().links();
    let sort = remember(sort, |s| service.set_preferred_sort(s), || service.preferred_sort());
    let view = remember(view, |v| service.set_preferred_view(v), || service.preferred_view());

    let links = service.sorted_links(sort, search.unwrap_or_default()).await;
    report_source(&links);

    if links.value.is_empty() {
        match search {
            Some(query) => println!("No links match '{query}'."),
            None => {
                println!("No links yet.");
                println!("Use 'homedash links add --name <NAME> --url <URL>' to add one.");
            }
        }
        return Ok(());
    }

    println!("{} link(s), sorted by {sort}:\n", links.value.len());
    match view {
        ViewMode::Grid => print_grid(&links.value),
        ViewMode::List => print_list(&links.value),
        ViewMode::Detailed => {
            for (index, link) in links.value.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                print_link(link);
            }
        }
    }

    Ok(())
}

fn remember<T: Copy>(explicit: Option<T>, store: impl FnOnce(T), stored: impl FnOnce() -> T) -> T {
    match explicit {
        Some(value) => {
            store(value);
            value
        }
        None => stored(),
    }
}

fn print_grid(links: &[Link]) {
    for link in links {
        println!("{:<24} {}", truncate_string(&link.name, 23), link.url);
    }
}

fn print_list(links: &[Link]) {
    println!(
        "{:<36} {:<24} {:<32} {:<16} Description",
        "ID", "Name", "URL", "Updated"
    );
    print_separator(130);

    for link in links {
        println!(
            "{:<36} {:<24} {:<32} {:<16} {}",
            link.id,
            truncate_string(&link.name, 23),
            truncate_string(&link.url, 31),
            format_timestamp(link.updated_at),
            truncate_string(&link.description, 40),
        );
    }
}

pub async fn add(ctx: &CliContext, draft: LinkDraft) -> Result<()> {
    if draft.name.trim().is_empty() || draft.url.trim().is_empty() {
        return Err(CliError::Arguments("name and url must not be empty".to_string()).into());
    }

    let added = ctx.client().links().add_link(draft).await;
    report_source(&added);
    println!("Added '{}' ({})", added.value.name, added.value.id);
    Ok(())
}

pub async fn update(ctx: &CliContext, id: &str, edits: LinkEdits) -> Result<()> {
    if edits.is_empty() {
        return Err(CliError::Arguments("nothing to update".to_string()).into());
    }

    let service = ctx.client().links();
    let current = service.get_links().await;
    let link = current
        .value
        .links
        .into_iter()
        .find(|link| link.id == id)
        .ok_or_else(|| CliError::LinkNotFound(id.to_string()))?;

    let updated = service.update_link(edits.apply(link)).await;
    report_source(&updated);
    print_link(&updated.value);
    Ok(())
}

pub async fn remove(ctx: &CliContext, id: &str) -> Result<()> {
    let removed = ctx.client().links().delete_link(id).await;
    report_source(&removed);
    println!("Removed {id}");
    Ok(())
}

pub async fn show_order(ctx: &CliContext) -> Result<()> {
    let service = ctx.client().links();
    let order = service.get_links_order().await;
    let links = service.get_links().await;
    report_source(&order);

    if order.value.order.is_empty() {
        println!("No custom order set; links appear in creation order.");
        return Ok(());
    }

    for (position, id) in order.value.order.iter().enumerate() {
        let name = links
            .value
            .links
            .iter()
            .find(|link| &link.id == id)
            .map(|link| link.name.as_str());
        println!("{position:>3}  {id}  {}", format_optional(name.as_ref(), "(missing)"));
    }
    Ok(())
}

pub async fn set_order(ctx: &CliContext, ids: Vec<String>) -> Result<()> {
    let order = LinkOrder::new(ids);
    let saved = ctx.client().links().save_links_order(&order).await;
    report_source(&saved);
    println!("Saved order of {} link(s)", order.order.len());
    Ok(())
}

pub async fn move_link(ctx: &CliContext, id: &str, position: usize) -> Result<()> {
    let order = ctx.client().links().move_link(id, position).await;
    report_source(&order);
    let index = order
        .value
        .order
        .iter()
        .position(|existing| existing == id)
        .unwrap_or(position);
    println!("Moved {id} to position {index}");
    Ok(())
}

fn print_link(link: &Link) {
    println!("ID:          {}", link.id);
    println!("Name:        {}", link.name);
    println!("URL:         {}", link.url);
    println!("Description: {}", link.description);
    println!("Image:       {}", format_optional(link.image_url.as_ref(), "--"));
    println!("Created:     {}", format_timestamp(link.created_at));
    println!("Updated:     {}", format_timestamp(link.updated_at));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> Link {
        Link {
            id: "a".to_string(),
            name: "NAS".to_string(),
            url: "http://nas.lan".to_string(),
            description: "storage".to_string(),
            image_url: Some("http://nas.lan/icon.png".to_string()),
            created_at: 1,
            updated_at: 1,
        }
    }

    #[test]
    fn edits_only_touch_given_fields() {
        let edits = LinkEdits {
            name: Some("Storage".to_string()),
            ..LinkEdits::default()
        };

        let edited = edits.apply(link());

        assert_eq!(edited.name, "Storage");
        assert_eq!(edited.url, "http://nas.lan");
        assert_eq!(edited.image_url.as_deref(), Some("http://nas.lan/icon.png"));
    }

    #[test]
    fn empty_image_url_clears_it() {
        let edits = LinkEdits {
            image_url: Some(String::new()),
            ..LinkEdits::default()
        };

        assert_eq!(edits.apply(link()).image_url, None);
    }

    #[test]
    fn remember_prefers_explicit_value() {
        let mut stored = None;
        let value = remember(Some(ViewMode::List), |v| stored = Some(v), || ViewMode::Grid);
        assert_eq!(value, ViewMode::List);
        assert_eq!(stored, Some(ViewMode::List));

        let mut touched = false;
        let fallback = remember(None, |_: ViewMode| touched = true, || ViewMode::Detailed);
        assert_eq!(fallback, ViewMode::Detailed);
        assert!(!touched);
    }

    #[test]
    fn default_edits_are_empty() {
        assert!(LinkEdits::default().is_empty());
    }
}
