//! Invalidation labels for cache entries.

use core::fmt;

/// Label shared by a family of cache entries, enabling bulk eviction.
///
/// Tags are coarse on purpose: one per resource kind, across every tenant and
/// every page/limit combination. Tenant isolation lives in the cache key, not
/// the tag, so a single partner's mutation evicts every partner's cached
/// listings of that kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Tag carried by every cached consumer listing.
    pub fn consumer_listings() -> Self {
        Self::new("consumer-listings")
    }

    /// Tag carried by every cached product listing.
    pub fn product_listings() -> Self {
        Self::new("product-listings")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
