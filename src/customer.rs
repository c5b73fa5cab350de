use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer account as returned by the customer and POS lookup endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Internal customer identifier
    pub id: u64,

    /// External identifier the account was enrolled with
    #[serde(default)]
    pub identifier: Option<String>,

    /// Given name
    #[serde(default)]
    pub first_name: Option<String>,

    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,

    /// Email address
    #[serde(default)]
    pub email: Option<String>,

    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Account state, e.g. `active`
    #[serde(default)]
    pub state: Option<String>,

    /// When the account was created
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}
