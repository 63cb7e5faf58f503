//! Clientele domain module (partners and their consumers).
//!
//! This crate contains business rules for the partner/consumer relationship,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Every consumer is owned by exactly one partner for its whole
//! lifetime.

pub mod consumer;
pub mod partner;

pub use consumer::{Consumer, ConsumerDraft};
pub use partner::Partner;
