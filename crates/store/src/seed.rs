//! Demo fixtures for local runs and black-box tests.

use tradegate_catalog::Product;
use tradegate_clientele::{Consumer, Partner};
use tradegate_core::{ConsumerId, PartnerId};

use crate::{ConsumerStore, PartnerStore, ProductStore, StoreError};

const BRANDS: [&str; 10] = [
    "Apple", "Samsung", "Huawei", "Xiaomi", "Google", "Sony", "Oppo", "OnePlus", "Motorola",
    "Vivo",
];

const FIRST_NAMES: [&str; 15] = [
    "Emma", "Lucas", "Chloe", "Hugo", "Lea", "Louis", "Jade", "Arthur", "Alice", "Jules", "Lina",
    "Paul", "Rose", "Adam", "Eva",
];

const LAST_NAMES: [&str; 13] = [
    "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand", "Leroy",
    "Moreau", "Simon", "Laurent", "Lefebvre",
];

const CITIES: [(&str, &str); 5] = [
    ("Paris", "75011"),
    ("Lyon", "69003"),
    ("Marseille", "13006"),
    ("Lille", "59000"),
    ("Nantes", "44000"),
];

const PRODUCT_COUNT: usize = 29;
const CONSUMER_COUNT: usize = 29;

/// What [`load_demo_data`] wrote, for startup logs and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub partners: usize,
    pub products: usize,
    pub consumers: usize,
    /// The partner that owns every seeded consumer.
    pub demo_partner_id: PartnerId,
}

/// Populate the stores with two partners, a phone catalog and one partner's
/// consumer book. The admin partner starts empty so tenant isolation is
/// visible out of the box.
pub async fn load_demo_data(
    partners: &dyn PartnerStore,
    consumers: &dyn ConsumerStore,
    products: &dyn ProductStore,
) -> Result<SeedSummary, StoreError> {
    let admin_partner = Partner::new("Tradegate Admin");
    let demo_partner = Partner::new("First Partner");
    let demo_partner_id = demo_partner.id;

    partners.insert(admin_partner).await?;
    partners.insert(demo_partner).await?;

    for i in 0..PRODUCT_COUNT {
        let brand = BRANDS[i % BRANDS.len()];
        let description =
            (i % 4 != 0).then(|| format!("{brand} handset, {} GB storage", 64 << (i % 3)));
        let product = Product::new(
            format!("{brand} X{}", 100 + i),
            brand,
            149.99 + 25.0 * i as f64,
            description,
        );
        products.insert(product).await?;
    }

    for i in 0..CONSUMER_COUNT {
        let first = FIRST_NAMES[i % FIRST_NAMES.len()];
        let last = LAST_NAMES[i % LAST_NAMES.len()];
        let (city, post_code) = CITIES[i % CITIES.len()];
        let has_address = i % 3 != 0;
        let consumer = Consumer {
            id: ConsumerId::new(),
            partner_id: demo_partner_id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!(
                "{}.{}@example.com",
                first.to_lowercase(),
                last.to_lowercase()
            ),
            address: has_address.then(|| format!("{} rue de la Paix", 1 + i)),
            post_code: has_address.then(|| post_code.to_string()),
            city: has_address.then(|| city.to_string()),
        };
        consumers.insert(consumer).await?;
    }

    Ok(SeedSummary {
        partners: 2,
        products: PRODUCT_COUNT,
        consumers: CONSUMER_COUNT,
        demo_partner_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryConsumerStore, InMemoryPartnerStore, InMemoryProductStore};
    use tradegate_core::PageSlice;

    #[tokio::test]
    async fn seed_populates_the_advertised_counts() {
        let partners = InMemoryPartnerStore::new();
        let consumers = InMemoryConsumerStore::new();
        let products = InMemoryProductStore::new();

        let summary = load_demo_data(&partners, &consumers, &products)
            .await
            .unwrap();

        assert_eq!(summary.partners, 2);
        assert_eq!(summary.products, 29);
        assert_eq!(summary.consumers, 29);

        let all_products = products
            .list_page(PageSlice { offset: 0, limit: 100 })
            .await
            .unwrap();
        assert_eq!(all_products.len(), 29);
    }

    #[tokio::test]
    async fn seeded_consumers_all_belong_to_the_demo_partner() {
        let partners = InMemoryPartnerStore::new();
        let consumers = InMemoryConsumerStore::new();
        let products = InMemoryProductStore::new();

        let summary = load_demo_data(&partners, &consumers, &products)
            .await
            .unwrap();

        assert!(partners.find(summary.demo_partner_id).await.unwrap().is_some());

        let owned = consumers
            .list_page(summary.demo_partner_id, PageSlice { offset: 0, limit: 100 })
            .await
            .unwrap();
        assert_eq!(owned.len(), 29);
        assert!(owned.iter().all(|c| c.partner_id == summary.demo_partner_id));
    }
}
