use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sort direction shared by reward and voucher listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire value for query parameters
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Sort keys accepted by the reward listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardSortBy {
    Name,
    Id,
    UpdatedAt,
    BeginsAt,
    EndsAt,
}

impl RewardSortBy {
    /// Wire value for query parameters
    pub fn as_str(self) -> &'static str {
        match self {
            RewardSortBy::Name => "name",
            RewardSortBy::Id => "id",
            RewardSortBy::UpdatedAt => "updated_at",
            RewardSortBy::BeginsAt => "begins_at",
            RewardSortBy::EndsAt => "ends_at",
        }
    }
}

/// A redeemable reward offered through the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    /// Reward identifier
    pub id: u64,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Short subtitle shown under the name
    #[serde(default)]
    pub subtitle: Option<String>,

    /// Longer description
    #[serde(default)]
    pub description: Option<String>,

    /// Start of the validity window
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,

    /// End of the validity window
    #[serde(default)]
    pub valid_to: Option<DateTime<Utc>>,

    /// Whether the authenticated customer can currently claim this reward
    #[serde(default)]
    pub eligible: Option<bool>,
}

/// A temporary hold on a reward prior to voucher issuance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardReservation {
    /// Reservation identifier, used with the voucher confirm/release endpoints
    pub id: u64,

    /// Server-side reservation state
    #[serde(default)]
    pub state: Option<String>,

    /// When the hold lapses if not confirmed
    #[serde(default)]
    pub valid_to: Option<DateTime<Utc>>,
}

/// One hit from the reward search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardSearchResult {
    /// Kind of document matched; rewards report `"reward"`
    pub document_type: String,

    /// The matched reward
    #[serde(default)]
    pub reward: Option<Reward>,
}

/// Optional filters for the reward listing endpoint.
///
/// Unset fields are omitted from the request entirely, they are never sent
/// as empty or defaulted values.
#[derive(Debug, Clone, Default)]
pub struct RewardScope {
    /// Restrict to one catalog
    pub catalog_id: Option<String>,
    /// Restrict to rewards carrying all of these tags
    pub tag_ids: Vec<String>,
    /// Only rewards affordable with the customer's current point balance
    pub filter_by_points_balance: Option<bool>,
    /// Restrict to one brand
    pub brand_id: Option<String>,
    /// Sort key
    pub sort_by: Option<RewardSortBy>,
    /// Sort direction
    pub order: Option<SortOrder>,
    /// Restrict to categories whose name starts with this prefix
    pub category_name_prefix: Option<String>,
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Page size
    pub page_size: Option<u32>,
    /// Restrict to one merchant
    pub filter_for_merchants: Option<String>,
}

impl RewardScope {
    /// Translate the scope into wire query parameters.
    ///
    /// Listing filters rename on the wire (`catalog_id` becomes
    /// `filter_for_catalogs`, `category_name_prefix` becomes `categories`)
    /// and the sort direction is sent as `order_by`, unlike voucher
    /// listings which use `order`.
    pub(crate) fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(ref catalog_id) = self.catalog_id {
            params.push(("filter_for_catalogs", catalog_id.clone()));
        }
        if !self.tag_ids.is_empty() {
            params.push(("tag_ids", self.tag_ids.join(",")));
        }
        if self.filter_by_points_balance == Some(true) {
            params.push(("filter_by_points_balance", "true".to_string()));
        }
        if let Some(ref brand_id) = self.brand_id {
            params.push(("filter_for_brands", brand_id.clone()));
        }
        if let Some(sort_by) = self.sort_by {
            params.push(("sort_by", sort_by.as_str().to_string()));
        }
        if let Some(order) = self.order {
            params.push(("order_by", order.as_str().to_string()));
        }
        if let Some(ref prefix) = self.category_name_prefix {
            params.push(("categories", prefix.clone()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size {
            params.push(("size", size.to_string()));
        }
        if let Some(ref merchants) = self.filter_for_merchants {
            params.push(("filter_for_merchants", merchants.clone()));
        }

        params
    }
}
