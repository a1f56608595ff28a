//! Link CRUD and ordering with offline fallback.

use homedash_core::utils::time::now_millis;
use homedash_core::{
    Acknowledgement, Link, LinkCollection, LinkDraft, LinkOrder, SortOption, ViewMode,
    filter_links, move_in_order, sort_links,
};
use tracing::debug;

use super::{LINKS_ORDER_PATH, LINKS_PATH, link_path};
use crate::api::ApiClient;
use crate::cache::{CacheKey, DocumentCache};
use crate::fallback::{Synced, with_fallback};

/// Client for `/links` and `/links/order`.
#[derive(Clone)]
pub struct LinkClientService {
    api: ApiClient,
    cache: DocumentCache,
}

impl LinkClientService {
    pub const fn new(api: ApiClient, cache: DocumentCache) -> Self {
        Self { api, cache }
    }

    /// All links, from the server or the cache (empty when nothing is cached).
    pub async fn get_links(&self) -> Synced<LinkCollection> {
        with_fallback(
            "getLinks",
            self.api.get::<LinkCollection>(LINKS_PATH),
            |links| self.cache.store(CacheKey::Links, links),
            |_| self.cache.load(CacheKey::Links).unwrap_or_default(),
        )
        .await
    }

    /// Stamp and create a link.
    ///
    /// Offline, the stamped link is added to the cached links and order and
    /// returned as-is.
    pub async fn add_link(&self, draft: LinkDraft) -> Synced<Link> {
        let link = draft.stamp(now_millis());
        debug!(target: "homedash.client", id = %link.id, "Adding link");

        let created = with_fallback(
            "addLink",
            self.api.post::<_, Link>(LINKS_PATH, &link),
            |saved| {
                self.cache
                    .update(CacheKey::Links, |links: &mut LinkCollection| {
                        links.upsert(saved.clone());
                    });
            },
            |_| {
                self.cache
                    .update(CacheKey::Links, |links: &mut LinkCollection| {
                        links.links.push(link.clone());
                    });
                self.cache
                    .update(CacheKey::LinksOrder, |order: &mut LinkOrder| {
                        order.append_unique(&link.id);
                    });
                link.clone()
            },
        )
        .await;

        if !created.is_remote() {
            return created;
        }

        // The server appends to the order itself; this only fills a gap.
        let id = created.value.id.clone();
        let order = self
            .update_links_order(|mut order| {
                order.append_unique(&id);
                order
            })
            .await;

        Synced {
            source: created.source.combine(order.source),
            value: created.value,
        }
    }

    /// Replace a link, stamping `updated_at` with the current time.
    pub async fn update_link(&self, mut link: Link) -> Synced<Link> {
        link.updated_at = now_millis();
        let path = link_path(&link.id);

        with_fallback(
            "updateLink",
            self.api.put::<_, Link>(&path, &link),
            |saved| {
                self.cache
                    .update(CacheKey::Links, |links: &mut LinkCollection| {
                        links.replace(saved.clone());
                    });
            },
            |_| {
                self.cache
                    .update(CacheKey::Links, |links: &mut LinkCollection| {
                        links.replace(link.clone());
                    });
                link.clone()
            },
        )
        .await
    }

    /// Delete a link and drop its id from the order.
    pub async fn delete_link(&self, id: &str) -> Synced<()> {
        let path = link_path(id);

        let deleted = with_fallback(
            "deleteLink",
            self.api.delete(&path),
            |_| {
                self.cache
                    .update(CacheKey::Links, |links: &mut LinkCollection| {
                        links.remove(id);
                    });
            },
            |_| {
                self.cache
                    .update(CacheKey::Links, |links: &mut LinkCollection| {
                        links.remove(id);
                    });
                self.cache
                    .update(CacheKey::LinksOrder, |order: &mut LinkOrder| order.remove(id));
            },
        )
        .await;

        if !deleted.is_remote() {
            return deleted;
        }

        let order = self
            .update_links_order(|mut order| {
                order.remove(id);
                order
            })
            .await;
        Synced {
            value: (),
            source: deleted.source.combine(order.source),
        }
    }

    pub async fn get_links_order(&self) -> Synced<LinkOrder> {
        with_fallback(
            "getLinksOrder",
            self.api.get::<LinkOrder>(LINKS_ORDER_PATH),
            |order| self.cache.store(CacheKey::LinksOrder, order),
            |_| self.cache.load(CacheKey::LinksOrder).unwrap_or_default(),
        )
        .await
    }

    /// Replace the order wholesale. The cache is written either way.
    pub async fn save_links_order(&self, order: &LinkOrder) -> Synced<()> {
        with_fallback(
            "saveLinksOrder",
            async {
                self.api
                    .put::<_, Acknowledgement>(LINKS_ORDER_PATH, order)
                    .await
                    .map(|_| ())
            },
            |_| self.cache.store(CacheKey::LinksOrder, order),
            |_| self.cache.store(CacheKey::LinksOrder, order),
        )
        .await
    }

    /// Read the order, apply `transform`, and save the result.
    pub async fn update_links_order<F>(&self, transform: F) -> Synced<LinkOrder>
    where
        F: FnOnce(LinkOrder) -> LinkOrder,
    {
        let current = self.get_links_order().await;
        let next = transform(current.value);
        let saved = self.save_links_order(&next).await;

        Synced {
            value: next,
            source: current.source.combine(saved.source),
        }
    }

    /// Move `id` to `position` in the custom order (clamped to the end).
    pub async fn move_link(&self, id: &str, position: usize) -> Synced<LinkOrder> {
        self.update_links_order(|order| LinkOrder::new(move_in_order(order.order, id, position)))
            .await
    }

    /// Links filtered by `query` and sorted for display.
    pub async fn sorted_links(&self, sort: SortOption, query: &str) -> Synced<Vec<Link>> {
        let links = self.get_links().await;
        let filtered = filter_links(links.value.links, query);

        if sort != SortOption::Custom {
            return Synced {
                value: sort_links(filtered, sort, &[]),
                source: links.source,
            };
        }

        let order = self.get_links_order().await;
        Synced {
            value: sort_links(filtered, sort, &order.value.order),
            source: links.source.combine(order.source),
        }
    }

    /// The last sort option chosen on this machine.
    pub fn preferred_sort(&self) -> SortOption {
        self.cache.load(CacheKey::SortOption).unwrap_or_default()
    }

    pub fn set_preferred_sort(&self, sort: SortOption) {
        self.cache.store(CacheKey::SortOption, &sort);
    }

    pub fn preferred_view(&self) -> ViewMode {
        self.cache.load(CacheKey::ViewMode).unwrap_or_default()
    }

    pub fn set_preferred_view(&self, view: ViewMode) {
        self.cache.store(CacheKey::ViewMode, &view);
    }
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

    fn link(id: &str, name: &str) -> Link {
        Link {
            id: id.to_string(),
            name: name.to_string(),
            url: format!("http://{id}.lan"),
            description: String::new(),
            image_url: None,
            created_at: 10,
            updated_at: 10,
        }
    }

    fn draft(name: &str) -> LinkDraft {
        LinkDraft {
            name: name.to_string(),
            url: "http://nas.lan".to_string(),
            ..LinkDraft::default()
        }
    }

    #[tokio::test]
    async fn get_links_mirrors_server_result() {
        let (_, api, cache) = fixture(FakeBackend::new().with_response(
            Method::Get,
            "/links",
            json!({"links": [link("a", "Alpha")]}),
        ));
        let service = LinkClientService::new(api, cache.clone());

        let links = service.get_links().await;

        assert_eq!(links.source, Source::Remote);
        assert_eq!(
            cache.load::<LinkCollection>(CacheKey::Links),
            Some(links.value)
        );
    }

    #[tokio::test]
    async fn get_links_offline_defaults_to_empty() {
        let (_, api, cache) = fixture(FakeBackend::offline());
        let service = LinkClientService::new(api, cache);

        let links = service.get_links().await;

        assert_eq!(links, Synced::cached(LinkCollection::default()));
    }

    #[tokio::test]
    async fn add_link_offline_updates_cached_links_and_order() {
        let (_, api, cache) = fixture(FakeBackend::offline());
        cache.store(CacheKey::LinksOrder, &LinkOrder::new(vec!["x".to_string()]));
        let service = LinkClientService::new(api, cache.clone());

        let added = service.add_link(draft("NAS")).await;

        assert_eq!(added.source, Source::Cache);
        assert_eq!(added.value.created_at, added.value.updated_at);
        let links: LinkCollection = cache.load(CacheKey::Links).unwrap();
        assert_eq!(links.links, vec![added.value.clone()]);
        let order: LinkOrder = cache.load(CacheKey::LinksOrder).unwrap();
        assert_eq!(order.order, vec!["x".to_string(), added.value.id]);
    }

    #[tokio::test]
    async fn add_link_online_does_not_duplicate_server_order_entry() {
        let server_link = link("srv", "NAS");
        let fake = FakeBackend::new()
            .with_response(Method::Post, "/links", json!(server_link))
            .with_response(Method::Get, "/links/order", json!({"order": ["srv"]}))
            .with_response(Method::Put, "/links/order", json!({"success": true}));
        let (fake, api, cache) = fixture(fake);
        let service = LinkClientService::new(api, cache.clone());

        let added = service.add_link(draft("NAS")).await;

        assert_eq!(added, Synced::remote(server_link.clone()));
        let saved = fake
            .calls()
            .into_iter()
            .find(|call| call.method == Method::Put)
            .unwrap();
        assert_eq!(saved.body, Some(json!({"order": ["srv"]})));
        let links: LinkCollection = cache.load(CacheKey::Links).unwrap();
        assert_eq!(links.links, vec![server_link]);
    }

    #[tokio::test]
    async fn add_link_sends_client_stamped_id() {
        let (fake, api, cache) = fixture(FakeBackend::offline());
        let service = LinkClientService::new(api, cache);

        let added = service.add_link(draft("NAS")).await;

        let body = fake.calls()[0].body.clone().unwrap();
        assert_eq!(body["id"], json!(added.value.id));
        assert_eq!(body["createdAt"], body["updatedAt"]);
    }

    #[tokio::test]
    async fn update_link_offline_replaces_cached_copy() {
        let (_, api, cache) = fixture(FakeBackend::offline());
        cache.store(
            CacheKey::Links,
            &LinkCollection {
                links: vec![link("a", "Alpha"), link("b", "Beta")],
            },
        );
        let service = LinkClientService::new(api, cache.clone());

        let mut edited = link("a", "Renamed");
        edited.updated_at = 0;
        let updated = service.update_link(edited).await;

        assert!(updated.value.updated_at > 10);
        let links: LinkCollection = cache.load(CacheKey::Links).unwrap();
        assert_eq!(links.links[0].name, "Renamed");
        assert_eq!(links.links[1].name, "Beta");
    }

    #[tokio::test]
    async fn delete_link_offline_prunes_links_and_order() {
        let (_, api, cache) = fixture(FakeBackend::offline());
        cache.store(
            CacheKey::Links,
            &LinkCollection {
                links: vec![link("a", "Alpha"), link("b", "Beta")],
            },
        );
        cache.store(
            CacheKey::LinksOrder,
            &LinkOrder::new(vec!["b".to_string(), "a".to_string()]),
        );
        let service = LinkClientService::new(api, cache.clone());

        let deleted = service.delete_link("a").await;

        assert_eq!(deleted.source, Source::Cache);
        let links: LinkCollection = cache.load(CacheKey::Links).unwrap();
        assert_eq!(links.links, vec![link("b", "Beta")]);
        let order: LinkOrder = cache.load(CacheKey::LinksOrder).unwrap();
        assert_eq!(order.order, vec!["b"]);
    }

    #[tokio::test]
    async fn delete_link_not_found_falls_back_to_cache() {
        let fake = FakeBackend::new().with_error(
            Method::Delete,
            "/links/a",
            ApiError::from_status(404, "Link not found"),
        );
        let (_, api, cache) = fixture(fake);
        cache.store(
            CacheKey::Links,
            &LinkCollection {
                links: vec![link("a", "Alpha")],
            },
        );
        let service = LinkClientService::new(api, cache.clone());

        let deleted = service.delete_link("a").await;

        assert_eq!(deleted.source, Source::Cache);
        assert_eq!(
            cache.load::<LinkCollection>(CacheKey::Links),
            Some(LinkCollection::default())
        );
    }

    #[tokio::test]
    async fn move_link_offline_rewrites_cached_order() {
        let (_, api, cache) = fixture(FakeBackend::offline());
        cache.store(
            CacheKey::LinksOrder,
            &LinkOrder::new(vec!["a".into(), "b".into(), "c".into()]),
        );
        let service = LinkClientService::new(api, cache.clone());

        let moved = service.move_link("c", 0).await;

        assert_eq!(moved.value.order, vec!["c", "a", "b"]);
        assert_eq!(cache.load::<LinkOrder>(CacheKey::LinksOrder), Some(moved.value));
    }

    #[tokio::test]
    async fn sorted_links_uses_custom_order_and_search() {
        let fake = FakeBackend::new()
            .with_response(
                Method::Get,
                "/links",
                json!({"links": [link("a", "Alpha"), link("b", "Beta"), link("c", "Gamma")]}),
            )
            .with_response(Method::Get, "/links/order", json!({"order": ["c", "a"]}));
        let (_, api, cache) = fixture(fake);
        let service = LinkClientService::new(api, cache);

        let all = service.sorted_links(SortOption::Custom, "").await;
        let ids: Vec<_> = all.value.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert!(all.is_remote());

        let found = service.sorted_links(SortOption::Name, "bet").await;
        assert_eq!(found.value, vec![link("b", "Beta")]);
    }

    #[test]
    fn preferred_sort_round_trips_through_cache() {
        let (_, api, cache) = fixture(FakeBackend::offline());
        let service = LinkClientService::new(api, cache);

        assert_eq!(service.preferred_sort(), SortOption::Custom);
        service.set_preferred_sort(SortOption::Updated);
        assert_eq!(service.preferred_sort(), SortOption::Updated);
    }

    #[test]
    fn view_mode_is_stored_under_its_own_key() {
        let (_, api, cache) = fixture(FakeBackend::offline());
        let service = LinkClientService::new(api, cache.clone());

        service.set_preferred_view(ViewMode::Detailed);

        assert_eq!(service.preferred_view(), ViewMode::Detailed);
        assert_eq!(service.preferred_sort(), SortOption::Custom);
        assert!(cache.contains(CacheKey::ViewMode));
    }
}
