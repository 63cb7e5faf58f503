//! Cache key construction.
//!
//! A listing key renders the tuple (resource kind, tenant scope, page, limit)
//! as a stable string. Tenant-scoped keys always embed the partner id so a
//! cache hit can never cross tenants; the product catalog is shared and uses
//! a fixed `all` scope segment.

use tradegate_core::{PageRequest, PartnerId};

/// Key for one page of a partner's consumer listing.
pub fn consumer_listing(partner_id: PartnerId, page: PageRequest) -> String {
    format!("consumers:{}:{}:{}", partner_id, page.page, page.limit)
}

/// Key for one page of the shared product listing.
pub fn product_listing(page: PageRequest) -> String {
    format!("products:all:{}:{}", page.page, page.limit)
}
