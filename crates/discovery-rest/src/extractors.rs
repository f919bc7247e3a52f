//! Query-string extraction and validation.

use discovery_core::{
    DiscoveryError, DiscoveryResult, Platform, ResourceQuery, ResourceType, SortField, SortOrder,
};
use serde::Deserialize;

/// Raw query parameters for the listing endpoint, before validation.
///
/// Everything arrives as optional strings; [`ListQuery::validate`]
/// turns them into a trusted [`ResourceQuery`]. This is the single
/// place the defaulting and clamping rules the core relies on are
/// enforced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

impl ListQuery {
    /// Validates the raw parameters into a [`ResourceQuery`].
    ///
    /// Rules:
    /// - `page`/`limit`: unparseable values fall back to their
    ///   defaults; out-of-range values are clamped (`limit` to 1..=50).
    /// - `type`/`platform`: an unknown value is a `400` validation
    ///   error.
    /// - `sort_by`: unknown values silently normalize to `updated_at`.
    /// - `order`: unknown values silently normalize to `desc`
    ///   (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Validation`] for unknown `type` or
    /// `platform` values.
    pub fn validate(self) -> DiscoveryResult<ResourceQuery> {
        let page = parse_u32(self.page.as_deref(), 1);
        let limit = parse_u32(self.limit.as_deref(), ResourceQuery::DEFAULT_LIMIT);

        let mut query = ResourceQuery::new(page, limit);

        if let Some(raw) = self.resource_type.as_deref() {
            let resource_type = raw.parse::<ResourceType>().map_err(|()| {
                DiscoveryError::validation("Invalid type. Must be: theme, plugin")
            })?;
            query = query.with_type(resource_type);
        }

        if let Some(raw) = self.platform.as_deref() {
            let platform = raw.parse::<Platform>().map_err(|()| {
                DiscoveryError::validation("Invalid platform. Must be: all, windows, macos, linux")
            })?;
            query = query.with_platform(platform);
        }

        let sort_by = self
            .sort_by
            .as_deref()
            .and_then(|raw| raw.parse::<SortField>().ok())
            .unwrap_or(SortField::UpdatedAt);

        let order = self
            .order
            .as_deref()
            .and_then(|raw| raw.to_ascii_lowercase().parse::<SortOrder>().ok())
            .unwrap_or(SortOrder::Desc);

        Ok(query.sorted_by(sort_by, order))
    }
}

/// Parses a positive integer, falling back to `default` when the value
/// is missing, unparseable, or zero.
fn parse_u32(raw: Option<&str>, default: u32) -> u32 {
    match raw.map(str::parse::<u32>) {
        Some(Ok(value)) if value >= 1 => value,
        _ => default,
    }
}
