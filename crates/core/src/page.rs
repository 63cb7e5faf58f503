//! Pagination resolution for listing endpoints.
//!
//! Listing requests arrive with optional `page`/`limit` query values; this
//! module normalizes them into a deterministic slice request. Distinct
//! page/limit pairs stay distinct all the way into cache keys, never aliased.

/// Default page when the query omits one.
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size when the query omits one.
pub const DEFAULT_LIMIT: u32 = 3;

/// Normalized paging parameters for a listing request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

/// Offset/limit window fed to a store's paginated query.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageSlice {
    pub offset: usize,
    pub limit: usize,
}

impl PageRequest {
    /// Resolve raw query values, applying defaults for absent ones.
    ///
    /// Negative values are unrepresentable at the wire (unsigned integers).
    /// `page = 0` saturates to the first page; `limit = 0` passes through and
    /// yields an empty slice. No upper clamping.
    pub fn resolve(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// The window this request addresses: `offset = (page - 1) * limit`.
    ///
    /// Arithmetic is widened to `usize`, so the product cannot overflow on
    /// 64-bit targets.
    pub fn slice(&self) -> PageSlice {
        let offset = (self.page.saturating_sub(1) as usize) * self.limit as usize;
        PageSlice {
            offset,
            limit: self.limit as usize,
        }
    }
}
