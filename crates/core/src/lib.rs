//! `tradegate-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, the service error taxonomy, pagination resolution, and
//! the tenant ownership check.

pub mod error;
pub mod id;
pub mod ownership;
pub mod page;

pub use error::{FieldError, ServiceError, ServiceResult};
pub use id::{ConsumerId, PartnerId, ProductId};
pub use ownership::{Decision, authorize};
pub use page::{PageRequest, PageSlice};
