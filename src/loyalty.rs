use serde::{Deserialize, Serialize};

/// A customer's standing in one loyalty program: running point balance plus
/// tier-qualifying points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltyProgram {
    /// Program identifier
    pub id: u64,

    /// Program display name
    #[serde(default)]
    pub name: Option<String>,

    /// Spendable point balance
    #[serde(default)]
    pub points_balance: i64,

    /// Tier-qualifying point total
    #[serde(default)]
    pub tier_points: i64,

    /// Membership number within the program
    #[serde(default)]
    pub membership_number: Option<String>,

    /// Current tier identifier
    #[serde(default)]
    pub current_membership_tier_id: Option<u64>,

    /// Current tier display name
    #[serde(default)]
    pub current_membership_tier_name: Option<String>,
}
