//! Validated query parameters for list operations.

use crate::{Platform, ResourceType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Field a listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    DownloadCount,
    UpdatedAt,
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "download_count" => Ok(Self::DownloadCount),
            "updated_at" => Ok(Self::UpdatedAt),
            _ => Err(()),
        }
    }
}

/// Sort direction.
///
/// `Desc` reverses the ascending comparator, not the output sequence,
/// so ties keep their input order in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(()),
        }
    }
}

/// A validated query over the catalog.
///
/// Construction clamps `page` and `limit` into range; by the time a
/// value of this type reaches the repository every field is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceQuery {
    /// Page number (1-indexed).
    pub page: u32,
    /// Items per page.
    pub limit: u32,
    /// Filter to a single resource type, if set.
    #[serde(rename = "type")]
    pub resource_type: Option<ResourceType>,
    /// Filter to a platform (wildcard-tagged resources always match).
    pub platform: Option<Platform>,
    /// Sort field.
    pub sort_by: SortField,
    /// Sort direction.
    pub order: SortOrder,
}

impl ResourceQuery {
    /// The default page size.
    pub const DEFAULT_LIMIT: u32 = 10;
    /// The maximum allowed page size.
    pub const MAX_LIMIT: u32 = 50;

    /// Creates a query with clamped pagination and default sorting.
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, Self::MAX_LIMIT),
            resource_type: None,
            platform: None,
            sort_by: SortField::UpdatedAt,
            order: SortOrder::Desc,
        }
    }

    /// Returns the item offset for this page.
    ///
    /// Computed in u64 so extreme `page` values stay exact instead of
    /// wrapping; defensive against a hand-built `page: 0` too, which
    /// constructors already clamp to 1.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page as u64).saturating_sub(1).saturating_mul(self.limit as u64) as usize
    }

    /// Sets the resource type filter.
    #[must_use]
    pub fn with_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = Some(resource_type);
        self
    }

    /// Sets the platform filter.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Sets the sort field and direction.
    #[must_use]
    pub fn sorted_by(mut self, sort_by: SortField, order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.order = order;
        self
    }
}

impl Default for ResourceQuery {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_LIMIT)
    }
}
