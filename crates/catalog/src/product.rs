use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tradegate_core::ProductId;

/// Catalog product.
///
/// Carries no owning tenant: every partner reads the same catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub model: String,
    pub brand: String,
    pub price: f64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        model: impl Into<String>,
        brand: impl Into<String>,
        price: f64,
        description: Option<String>,
    ) -> Self {
        Self {
            id: ProductId::new(),
            model: model.into(),
            brand: brand.into(),
            price,
            description,
            created_at: Utc::now(),
        }
    }
}
