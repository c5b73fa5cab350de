use crate::reward::{Reward, SortOrder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default page size for voucher listings
const DEFAULT_PAGE_SIZE: u32 = 24;
/// Default page number for voucher listings
const DEFAULT_PAGE: u32 = 1;

/// Lifecycle state of a voucher. Transitions happen server-side only; the
/// SDK requests them and observes the resulting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoucherState {
    Issued,
    RedemptionInProgress,
    Redeemed,
    Released,
    Expired,
}

impl VoucherState {
    /// Wire value for query parameters
    pub fn as_str(self) -> &'static str {
        match self {
            VoucherState::Issued => "issued",
            VoucherState::RedemptionInProgress => "redemption_in_progress",
            VoucherState::Redeemed => "redeemed",
            VoucherState::Released => "released",
            VoucherState::Expired => "expired",
        }
    }
}

/// The `type` filter accepted by the voucher listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoucherType {
    Active,
    All,
    Expired,
    Gifted,
    Redeemed,
    RedemptionInProgress,
}

impl VoucherType {
    /// Wire value for query parameters
    pub fn as_str(self) -> &'static str {
        match self {
            VoucherType::Active => "active",
            VoucherType::All => "all",
            VoucherType::Expired => "expired",
            VoucherType::Gifted => "gifted",
            VoucherType::Redeemed => "redeemed",
            VoucherType::RedemptionInProgress => "redemption_in_progress",
        }
    }
}

/// Sort keys accepted by the voucher listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoucherSortBy {
    IssuedDate,
    ValidTo,
}

impl VoucherSortBy {
    /// Wire value for query parameters
    pub fn as_str(self) -> &'static str {
        match self {
            VoucherSortBy::IssuedDate => "issued_date",
            VoucherSortBy::ValidTo => "valid_to",
        }
    }
}

/// A claim on a reward held by a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    /// Voucher identifier
    pub id: u64,

    /// Current lifecycle state
    pub state: VoucherState,

    /// Redemption code, when the reward carries one
    #[serde(default)]
    pub voucher_code: Option<String>,

    /// The reward this voucher was issued against
    #[serde(default)]
    pub reward: Option<Reward>,

    /// When the voucher was issued
    #[serde(default)]
    pub issued_date: Option<DateTime<Utc>>,

    /// Start of the redemption window
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,

    /// End of the redemption window
    #[serde(default)]
    pub valid_to: Option<DateTime<Utc>>,

    /// When the voucher was redeemed, if it has been
    #[serde(default)]
    pub redemption_date: Option<DateTime<Utc>>,
}

/// Optional filters for the voucher listing endpoint.
///
/// `size` and `page` always go on the wire, falling back to 24 and 1 when
/// unset; the remaining fields are omitted entirely when unset.
#[derive(Debug, Clone, Default)]
pub struct VoucherScope {
    /// Page size, defaults to 24
    pub size: Option<u32>,
    /// Page number (1-based), defaults to 1
    pub page: Option<u32>,
    /// Filter by lifecycle state
    pub state: Option<VoucherState>,
    /// Filter by listing type
    pub voucher_type: Option<VoucherType>,
    /// Sort key
    pub sort_by: Option<VoucherSortBy>,
    /// Sort direction
    pub order: Option<SortOrder>,
}

impl VoucherScope {
    /// Translate the scope into wire query parameters
    pub(crate) fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("size", self.size.unwrap_or(DEFAULT_PAGE_SIZE).to_string()),
            ("page", self.page.unwrap_or(DEFAULT_PAGE).to_string()),
        ];

        if let Some(state) = self.state {
            params.push(("state", state.as_str().to_string()));
        }
        if let Some(voucher_type) = self.voucher_type {
            params.push(("type", voucher_type.as_str().to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            params.push(("sort_by", sort_by.as_str().to_string()));
        }
        if let Some(order) = self.order {
            params.push(("order", order.as_str().to_string()));
        }

        params
    }
}
