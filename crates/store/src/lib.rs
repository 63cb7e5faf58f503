//! Repository ports and their in-memory implementations.
//!
//! The service layer talks to these traits only. The in-memory stores keep
//! insertion order, which is what makes pagination windows deterministic.

use thiserror::Error;

use tradegate_catalog::Product;
use tradegate_clientele::{Consumer, Partner};
use tradegate_core::{ConsumerId, PageSlice, PartnerId, ProductId, ServiceError};

pub mod memory;
pub mod seed;

pub use memory::{InMemoryConsumerStore, InMemoryPartnerStore, InMemoryProductStore};
pub use seed::{SeedSummary, load_demo_data};

/// Store-level failure. Mapped to [`ServiceError::Upstream`] above the ports.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StoreError {
    pub fn poisoned(what: impl Into<String>) -> Self {
        Self::LockPoisoned(what.into())
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::upstream(err.to_string())
    }
}

/// Partner directory port.
#[async_trait::async_trait]
pub trait PartnerStore: Send + Sync {
    async fn find(&self, id: PartnerId) -> Result<Option<Partner>, StoreError>;
    async fn insert(&self, partner: Partner) -> Result<(), StoreError>;
}

/// Consumer persistence port. Every query is tenant-scoped.
#[async_trait::async_trait]
pub trait ConsumerStore: Send + Sync {
    async fn find(&self, id: ConsumerId) -> Result<Option<Consumer>, StoreError>;

    /// One window of `partner_id`'s consumers in stable insertion order.
    async fn list_page(
        &self,
        partner_id: PartnerId,
        slice: PageSlice,
    ) -> Result<Vec<Consumer>, StoreError>;

    async fn insert(&self, consumer: Consumer) -> Result<(), StoreError>;

    /// Remove by id; reports whether a record was present.
    async fn remove(&self, id: ConsumerId) -> Result<bool, StoreError>;
}

/// Product catalog port (shared across tenants, read-mostly).
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    async fn find(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// One window of the catalog in stable insertion order.
    async fn list_page(&self, slice: PageSlice) -> Result<Vec<Product>, StoreError>;

    async fn insert(&self, product: Product) -> Result<(), StoreError>;
}
