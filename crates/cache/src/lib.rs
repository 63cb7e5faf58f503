//! Tag-addressable read-through cache fronting paginated listings.
//!
//! Listings are cached under stable string keys built by [`keys`]; every
//! entry carries at least one [`Tag`], and mutations evict whole tag families
//! at once rather than hunting individual keys.

pub mod keys;
pub mod tag;
pub mod tagged;

pub use tag::Tag;
pub use tagged::TaggedCache;
