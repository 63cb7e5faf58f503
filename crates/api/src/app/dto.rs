use serde::Deserialize;

use tradegate_catalog::Product;
use tradegate_clientele::{Consumer, ConsumerDraft};
use tradegate_core::{ConsumerId, PartnerId, ProductId};

// -------------------------
// Request DTOs
// -------------------------

/// `page`/`limit` query parameters, both optional.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Create payload for a consumer. Every field is optional on the wire;
/// the draft validation decides which ones are actually required.
#[derive(Debug, Deserialize)]
pub struct CreateConsumerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub post_code: Option<String>,
    pub city: Option<String>,
}

impl CreateConsumerRequest {
    pub fn into_draft(self) -> ConsumerDraft {
        ConsumerDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            address: self.address,
            post_code: self.post_code,
            city: self.city,
        }
    }
}

// -------------------------
// JSON projection helpers
// -------------------------

/// Consumer as seen by its owning partner.
pub fn consumer_to_partner_view(consumer: &Consumer) -> serde_json::Value {
    serde_json::json!({
        "id": consumer.id.to_string(),
        "first_name": consumer.first_name,
        "last_name": consumer.last_name,
        "email": consumer.email,
        "address": consumer.address,
        "post_code": consumer.post_code,
        "city": consumer.city,
        "_links": consumer_links(consumer.partner_id, consumer.id),
    })
}

pub fn product_to_view(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id.to_string(),
        "model": product.model,
        "brand": product.brand,
        "price": product.price,
        "description": product.description,
        "created_at": product.created_at.to_rfc3339(),
        "_links": product_links(product.id),
    })
}

pub fn consumer_links(partner_id: PartnerId, consumer_id: ConsumerId) -> serde_json::Value {
    let href = format!("/partners/{partner_id}/consumers/{consumer_id}");
    serde_json::json!({
        "self": { "href": href.clone() },
        "delete": { "href": href },
    })
}

pub fn product_links(product_id: ProductId) -> serde_json::Value {
    serde_json::json!({
        "self": { "href": format!("/products/{product_id}") },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumer_views_link_back_to_their_tenant_path() {
        let partner_id = PartnerId::new();
        let consumer = ConsumerDraft {
            first_name: Some("Emma".to_string()),
            last_name: Some("Durand".to_string()),
            email: Some("emma.durand@example.com".to_string()),
            ..ConsumerDraft::default()
        }
        .into_consumer(partner_id)
        .unwrap();

        let view = consumer_to_partner_view(&consumer);
        let href = format!("/partners/{partner_id}/consumers/{}", consumer.id);
        assert_eq!(view["_links"]["self"]["href"], href);
        assert_eq!(view["_links"]["delete"]["href"], href);
        assert_eq!(view["email"], "emma.durand@example.com");
    }

    #[test]
    fn product_views_carry_a_self_link() {
        let product = Product::new("X100", "Apple", 799.0, None);
        let view = product_to_view(&product);
        assert_eq!(
            view["_links"]["self"]["href"],
            format!("/products/{}", product.id)
        );
        assert_eq!(view["price"], 799.0);
    }
}
