//! Paginated result envelope for list operations.

use crate::Resource;
use serde::{Deserialize, Serialize};

/// Pagination metadata reported alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total items matching the filters, across all pages.
    pub total: u64,
    /// The requested page (1-indexed).
    pub page: u32,
    /// The requested page size.
    pub limit: u32,
    /// Total number of pages (`ceil(total / limit)`).
    pub pages: u64,
}

impl PageMeta {
    /// Creates page metadata for a filtered total.
    ///
    /// `pages` is zero exactly when `total` is zero.
    #[must_use]
    pub fn new(total: u64, page: u32, limit: u32) -> Self {
        let pages = if limit > 0 {
            total.div_ceil(u64::from(limit))
        } else {
            0
        };

        Self {
            total,
            page,
            limit,
            pages,
        }
    }
}

/// A page of resources plus its pagination metadata.
///
/// This is the unit the repository caches: the envelope is already
/// paginated, so a different `page` or `limit` is a different cache
/// entry, never a re-slice of this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceList {
    /// The items on this page, in sorted order.
    pub data: Vec<Resource>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

impl ResourceList {
    /// Creates a new envelope.
    #[must_use]
    pub fn new(data: Vec<Resource>, total: u64, page: u32, limit: u32) -> Self {
        Self {
            data,
            meta: PageMeta::new(total, page, limit),
        }
    }

    /// Creates an empty envelope.
    #[must_use]
    pub fn empty(page: u32, limit: u32) -> Self {
        Self::new(Vec::new(), 0, page, limit)
    }

    /// Returns true if this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }
}
