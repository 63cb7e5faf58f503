//! In-memory stores for tests and the dev runtime.

use std::sync::RwLock;

use tradegate_catalog::Product;
use tradegate_clientele::{Consumer, Partner};
use tradegate_core::{ConsumerId, PageSlice, PartnerId, ProductId};

use crate::{ConsumerStore, PartnerStore, ProductStore, StoreError};

/// In-memory partner directory.
#[derive(Debug, Default)]
pub struct InMemoryPartnerStore {
    inner: RwLock<Vec<Partner>>,
}

impl InMemoryPartnerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PartnerStore for InMemoryPartnerStore {
    async fn find(&self, id: PartnerId) -> Result<Option<Partner>, StoreError> {
        let partners = self
            .inner
            .read()
            .map_err(|_| StoreError::poisoned("partners"))?;
        Ok(partners.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, partner: Partner) -> Result<(), StoreError> {
        let mut partners = self
            .inner
            .write()
            .map_err(|_| StoreError::poisoned("partners"))?;
        partners.push(partner);
        Ok(())
    }
}

/// In-memory consumer store. The vector's order is insertion order, so a
/// pagination window addresses the same records on every read.
#[derive(Debug, Default)]
pub struct InMemoryConsumerStore {
    inner: RwLock<Vec<Consumer>>,
}

impl InMemoryConsumerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ConsumerStore for InMemoryConsumerStore {
    async fn find(&self, id: ConsumerId) -> Result<Option<Consumer>, StoreError> {
        let consumers = self
            .inner
            .read()
            .map_err(|_| StoreError::poisoned("consumers"))?;
        Ok(consumers.iter().find(|c| c.id == id).cloned())
    }

    async fn list_page(
        &self,
        partner_id: PartnerId,
        slice: PageSlice,
    ) -> Result<Vec<Consumer>, StoreError> {
        let consumers = self
            .inner
            .read()
            .map_err(|_| StoreError::poisoned("consumers"))?;
        Ok(consumers
            .iter()
            .filter(|c| c.partner_id == partner_id)
            .skip(slice.offset)
            .take(slice.limit)
            .cloned()
            .collect())
    }

    async fn insert(&self, consumer: Consumer) -> Result<(), StoreError> {
        let mut consumers = self
            .inner
            .write()
            .map_err(|_| StoreError::poisoned("consumers"))?;
        consumers.push(consumer);
        Ok(())
    }

    async fn remove(&self, id: ConsumerId) -> Result<bool, StoreError> {
        let mut consumers = self
            .inner
            .write()
            .map_err(|_| StoreError::poisoned("consumers"))?;
        let before = consumers.len();
        consumers.retain(|c| c.id != id);
        Ok(consumers.len() < before)
    }
}

/// In-memory product catalog.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let products = self
            .inner
            .read()
            .map_err(|_| StoreError::poisoned("products"))?;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn list_page(&self, slice: PageSlice) -> Result<Vec<Product>, StoreError> {
        let products = self
            .inner
            .read()
            .map_err(|_| StoreError::poisoned("products"))?;
        Ok(products
            .iter()
            .skip(slice.offset)
            .take(slice.limit)
            .cloned()
            .collect())
    }

    async fn insert(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self
            .inner
            .write()
            .map_err(|_| StoreError::poisoned("products"))?;
        products.push(product);
        Ok(())
    }
}
