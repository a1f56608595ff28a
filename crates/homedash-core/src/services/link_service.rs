//! Link service - orchestrates link and link-order operations.
//!
//! A link mutation touches two documents (`links` and `links_order`) with two
//! separate writes. There is no transaction: if the second write fails the
//! order simply drifts, which display sorting tolerates.

use std::sync::Arc;

use crate::domain::{Link, LinkCollection, LinkOrder, NewLink};
use crate::ports::{CoreError, DocumentStore, Documents};
use crate::utils::time::{next_after, now_millis};

/// Service for link operations.
pub struct LinkService {
    docs: Documents,
}

impl LinkService {
    /// Create a new link service.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            docs: Documents::new(store),
        }
    }

    /// All links, in storage order.
    pub async fn list(&self) -> Result<LinkCollection, CoreError> {
        Ok(self.docs.load().await?)
    }

    /// Store a new link and append its id to the manual order.
    pub async fn create(&self, new_link: NewLink) -> Result<Link, CoreError> {
        let link = new_link.into_link(now_millis());

        let mut collection: LinkCollection = self.docs.load().await?;
        collection.links.push(link.clone());
        self.docs.save(&collection).await?;

        let mut order: LinkOrder = self.docs.load().await?;
        order.append_unique(&link.id);
        self.docs.save(&order).await?;

        tracing::debug!(target: "homedash.api", link_id = %link.id, "Link created");
        Ok(link)
    }

    /// Replace the link stored under `id`.
    ///
    /// The path `id` and the stored `created_at` always win over the payload;
    /// `updated_at` is refreshed and strictly increases.
    pub async fn update(&self, id: &str, link: Link) -> Result<Link, CoreError> {
        let mut collection: LinkCollection = self.docs.load().await?;
        let index = collection
            .position(id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        let previous = &collection.links[index];
        let updated = Link {
            id: previous.id.clone(),
            created_at: previous.created_at,
            updated_at: next_after(previous.updated_at, now_millis()),
            ..link
        };
        collection.links[index] = updated.clone();
        self.docs.save(&collection).await?;

        tracing::debug!(target: "homedash.api", link_id = %id, "Link updated");
        Ok(updated)
    }

    /// Remove the link stored under `id` and drop it from the manual order.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        let mut collection: LinkCollection = self.docs.load().await?;
        if collection.remove(id).is_none() {
            return Err(CoreError::NotFound(id.to_string()));
        }
        self.docs.save(&collection).await?;

        let mut order: LinkOrder = self.docs.load().await?;
        order.remove(id);
        self.docs.save(&order).await?;

        tracing::debug!(target: "homedash.api", link_id = %id, "Link deleted");
        Ok(())
    }

    /// The manual display order.
    pub async fn order(&self) -> Result<LinkOrder, CoreError> {
        Ok(self.docs.load().await?)
    }

    /// Overwrite the manual order. Ids are not checked against the links.
    pub async fn set_order(&self, order: &LinkOrder) -> Result<(), CoreError> {
        Ok(self.docs.save(order).await?)
    }
}
