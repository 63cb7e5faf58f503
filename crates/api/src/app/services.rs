//! Resource service: composes the stores, the isolation guard and the
//! listing caches into one protocol per operation.
//!
//! Everything here is HTTP-agnostic. Operations return [`ServiceError`] and
//! leave status codes to `errors.rs`.

use std::sync::Arc;
use std::time::Duration;

use tradegate_cache::{Tag, TaggedCache, keys};
use tradegate_catalog::Product;
use tradegate_clientele::{Consumer, ConsumerDraft, Partner};
use tradegate_core::{
    ConsumerId, PageRequest, PartnerId, ProductId, ServiceError, ServiceResult, authorize,
};
use tradegate_store::{
    ConsumerStore, InMemoryConsumerStore, InMemoryPartnerStore, InMemoryProductStore, PartnerStore,
    ProductStore, SeedSummary, load_demo_data,
};

/// Shared application state handed to every handler.
pub struct AppServices {
    partners: Arc<dyn PartnerStore>,
    consumers: Arc<dyn ConsumerStore>,
    products: Arc<dyn ProductStore>,
    consumer_listings: TaggedCache<Vec<Consumer>>,
    product_listings: TaggedCache<Vec<Product>>,
}

impl AppServices {
    /// In-memory stores, listing caches without expiry.
    pub fn in_memory() -> Self {
        Self::with_cache_ttl(None)
    }

    /// In-memory stores; when `ttl` is set, cached listings also expire on
    /// their own instead of living until the next invalidation.
    pub fn with_cache_ttl(ttl: Option<Duration>) -> Self {
        let (consumer_listings, product_listings) = match ttl {
            Some(ttl) => (TaggedCache::with_ttl(ttl), TaggedCache::with_ttl(ttl)),
            None => (TaggedCache::new(), TaggedCache::new()),
        };
        Self {
            partners: Arc::new(InMemoryPartnerStore::new()),
            consumers: Arc::new(InMemoryConsumerStore::new()),
            products: Arc::new(InMemoryProductStore::new()),
            consumer_listings,
            product_listings,
        }
    }

    /// Provision a partner. Partners have no HTTP surface; fixtures and
    /// tests create them here.
    pub async fn create_partner(&self, name: &str) -> ServiceResult<Partner> {
        let partner = Partner::new(name);
        self.partners.insert(partner.clone()).await?;
        Ok(partner)
    }

    /// Load the demo fixtures into the backing stores.
    pub async fn seed_demo_data(&self) -> ServiceResult<SeedSummary> {
        let summary = load_demo_data(&*self.partners, &*self.consumers, &*self.products).await?;
        Ok(summary)
    }

    /// One page of the partner's consumers, served through the listing cache.
    pub async fn list_consumers(
        &self,
        partner_id: PartnerId,
        page: PageRequest,
    ) -> ServiceResult<Vec<Consumer>> {
        let key = keys::consumer_listing(partner_id, page);
        let slice = page.slice();
        let listed = self
            .consumer_listings
            .get_or_compute(&key, Tag::consumer_listings(), || async move {
                self.consumers
                    .list_page(partner_id, slice)
                    .await
                    .map_err(ServiceError::from)
            })
            .await?;

        // An empty page is cached like any other value, but callers see it
        // as not-found: a partner with nothing to list is indistinguishable
        // from an unknown partner here.
        if listed.is_empty() {
            return Err(ServiceError::not_found("no consumers found"));
        }
        Ok(listed)
    }

    pub async fn get_consumer(
        &self,
        partner_id: PartnerId,
        consumer_id: ConsumerId,
    ) -> ServiceResult<Consumer> {
        let consumer = self
            .consumers
            .find(consumer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("consumer not found"))?;

        // Read path: a foreign consumer looks exactly like a missing one.
        if !authorize(partner_id, consumer.partner_id).is_allowed() {
            return Err(ServiceError::not_found("consumer not found"));
        }
        Ok(consumer)
    }

    pub async fn create_consumer(
        &self,
        partner_id: PartnerId,
        draft: ConsumerDraft,
    ) -> ServiceResult<Consumer> {
        if self.partners.find(partner_id).await?.is_none() {
            return Err(ServiceError::not_found("partner not found"));
        }

        let consumer = draft
            .into_consumer(partner_id)
            .map_err(ServiceError::validation)?;
        self.consumers.insert(consumer.clone()).await?;

        // Invalidate only after the write has landed and before responding,
        // so the next listing cannot serve a page missing this consumer.
        self.consumer_listings
            .invalidate(&[Tag::consumer_listings()]);
        Ok(consumer)
    }

    pub async fn delete_consumer(
        &self,
        partner_id: PartnerId,
        consumer_id: ConsumerId,
    ) -> ServiceResult<()> {
        let consumer = self
            .consumers
            .find(consumer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("consumer not found"))?;

        // Delete path: a foreign consumer is an ownership violation, not a
        // not-found.
        if !authorize(partner_id, consumer.partner_id).is_allowed() {
            return Err(ServiceError::ownership_violation(
                "consumer does not belong to this partner",
            ));
        }

        self.consumers.remove(consumer_id).await?;
        self.consumer_listings
            .invalidate(&[Tag::consumer_listings()]);
        Ok(())
    }

    /// One page of the shared catalog. An empty page is a valid result.
    pub async fn list_products(&self, page: PageRequest) -> ServiceResult<Vec<Product>> {
        let key = keys::product_listing(page);
        let slice = page.slice();
        self.product_listings
            .get_or_compute(&key, Tag::product_listings(), || async move {
                self.products
                    .list_page(slice)
                    .await
                    .map_err(ServiceError::from)
            })
            .await
    }

    pub async fn get_product(&self, product_id: ProductId) -> ServiceResult<Product> {
        self.products
            .find(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradegate_core::FieldError;

    fn draft(first: &str, last: &str, email: &str) -> ConsumerDraft {
        ConsumerDraft {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            email: Some(email.to_string()),
            ..ConsumerDraft::default()
        }
    }

    async fn partner_with_consumers(
        services: &AppServices,
        n: usize,
    ) -> (PartnerId, Vec<ConsumerId>) {
        let partner = services.create_partner("First Partner").await.unwrap();
        let mut ids = Vec::new();
        for i in 0..n {
            let consumer = services
                .create_consumer(
                    partner.id,
                    draft(&format!("First{i}"), "Martin", &format!("c{i}@example.com")),
                )
                .await
                .unwrap();
            ids.push(consumer.id);
        }
        (partner.id, ids)
    }

    #[tokio::test]
    async fn foreign_reads_look_missing_but_foreign_deletes_are_violations() {
        let services = AppServices::in_memory();
        let (owner, ids) = partner_with_consumers(&services, 1).await;
        let other = services.create_partner("Other Partner").await.unwrap();

        let read = services.get_consumer(other.id, ids[0]).await.unwrap_err();
        assert_eq!(read, ServiceError::not_found("consumer not found"));

        let delete = services.delete_consumer(other.id, ids[0]).await.unwrap_err();
        assert_eq!(
            delete,
            ServiceError::ownership_violation("consumer does not belong to this partner")
        );

        // The failed delete left the resource readable by its owner.
        assert!(services.get_consumer(owner, ids[0]).await.is_ok());
    }

    #[tokio::test]
    async fn listings_reflect_creates_after_invalidation() {
        let services = AppServices::in_memory();
        let (partner_id, _) = partner_with_consumers(&services, 2).await;
        let page = PageRequest::resolve(None, None);

        let before = services.list_consumers(partner_id, page).await.unwrap();
        assert_eq!(before.len(), 2);

        let created = services
            .create_consumer(partner_id, draft("Emma", "Durand", "emma.durand@example.com"))
            .await
            .unwrap();

        let after = services.list_consumers(partner_id, page).await.unwrap();
        assert_eq!(after.len(), 3);
        assert!(after.iter().any(|c| c.id == created.id));
    }

    #[tokio::test]
    async fn deleting_the_last_consumer_turns_the_listing_into_not_found() {
        let services = AppServices::in_memory();
        let (partner_id, ids) = partner_with_consumers(&services, 1).await;
        let page = PageRequest::resolve(None, None);

        assert_eq!(
            services.list_consumers(partner_id, page).await.unwrap().len(),
            1
        );

        services.delete_consumer(partner_id, ids[0]).await.unwrap();

        let err = services.list_consumers(partner_id, page).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("no consumers found"));
    }

    #[tokio::test]
    async fn cached_listings_never_cross_partners() {
        let services = AppServices::in_memory();
        let (partner_a, _) = partner_with_consumers(&services, 1).await;
        let (partner_b, _) = partner_with_consumers(&services, 2).await;
        let page = PageRequest::resolve(None, None);

        let listed_a = services.list_consumers(partner_a, page).await.unwrap();
        let listed_b = services.list_consumers(partner_b, page).await.unwrap();

        assert_eq!(listed_a.len(), 1);
        assert_eq!(listed_b.len(), 2);
        assert!(listed_a.iter().all(|c| c.partner_id == partner_a));
        assert!(listed_b.iter().all(|c| c.partner_id == partner_b));
    }

    #[tokio::test]
    async fn pagination_windows_follow_insertion_order() {
        let services = AppServices::in_memory();
        let (partner_id, ids) = partner_with_consumers(&services, 6).await;

        let second = services
            .list_consumers(partner_id, PageRequest::resolve(Some(2), Some(3)))
            .await
            .unwrap();
        let second_ids: Vec<ConsumerId> = second.iter().map(|c| c.id).collect();
        assert_eq!(second_ids, ids[3..6]);
    }

    #[tokio::test]
    async fn invalid_drafts_mutate_nothing() {
        let services = AppServices::in_memory();
        let (partner_id, _) = partner_with_consumers(&services, 2).await;
        let page = PageRequest::resolve(None, None);
        services.list_consumers(partner_id, page).await.unwrap();
        let cached_before = services.consumer_listings.len();

        let invalid = ConsumerDraft {
            email: None,
            ..draft("Emma", "Durand", "unused")
        };
        let err = services
            .create_consumer(partner_id, invalid)
            .await
            .unwrap_err();
        match err {
            ServiceError::ValidationFailed(errors) => {
                assert_eq!(errors, vec![FieldError::new("email", "email is required")]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }

        // Nothing was written and the cached page survived untouched.
        assert_eq!(services.consumer_listings.len(), cached_before);
        assert_eq!(
            services.list_consumers(partner_id, page).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn creating_for_an_unknown_partner_is_not_found() {
        let services = AppServices::in_memory();
        let err = services
            .create_consumer(PartnerId::new(), draft("Emma", "Durand", "emma@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("partner not found"));
    }

    #[tokio::test]
    async fn deleting_a_missing_consumer_is_not_found() {
        let services = AppServices::in_memory();
        let partner = services.create_partner("First Partner").await.unwrap();
        let err = services
            .delete_consumer(partner.id, ConsumerId::new())
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("consumer not found"));
    }

    #[tokio::test]
    async fn product_listings_tolerate_empty_pages() {
        let services = AppServices::in_memory();
        let summary = services.seed_demo_data().await.unwrap();
        assert_eq!(summary.products, 29);

        let first = services
            .list_products(PageRequest::resolve(None, None))
            .await
            .unwrap();
        assert_eq!(first.len(), 3);

        // 29 products at limit 3: page 10 holds the last two, page 11 none.
        let last = services
            .list_products(PageRequest::resolve(Some(10), None))
            .await
            .unwrap();
        assert_eq!(last.len(), 2);
        let past_the_end = services
            .list_products(PageRequest::resolve(Some(11), None))
            .await
            .unwrap();
        assert!(past_the_end.is_empty());
    }

    #[tokio::test]
    async fn get_product_distinguishes_known_from_unknown() {
        let services = AppServices::in_memory();
        services.seed_demo_data().await.unwrap();

        let listed = services
            .list_products(PageRequest::resolve(None, None))
            .await
            .unwrap();
        let known = listed[0].id;
        assert_eq!(services.get_product(known).await.unwrap().id, known);
        assert_eq!(
            services.get_product(ProductId::new()).await.unwrap_err(),
            ServiceError::not_found("product not found")
        );
    }
}
