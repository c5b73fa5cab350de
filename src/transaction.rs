use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Target account for a POS transaction, addressed either by internal
/// numeric id or by the external identifier it was enrolled with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserAccountRef {
    /// Internal Perx account id, serialized as `{"id": n}`
    Id {
        /// Internal account id
        id: u64,
    },
    /// External identifier, serialized as `{"identifier": s}`
    Identifier {
        /// External identifier string
        identifier: String,
    },
}

impl UserAccountRef {
    /// Reference an account by its internal id
    pub fn by_id(id: u64) -> Self {
        UserAccountRef::Id { id }
    }

    /// Reference an account by its external identifier
    pub fn by_identifier(identifier: impl Into<String>) -> Self {
        UserAccountRef::Identifier {
            identifier: identifier.into(),
        }
    }
}

/// A signed point adjustment against a loyalty program balance, submitted
/// through POS access. Build one with [`make_earn_request`] or
/// [`make_burn_request`] so the sign convention holds.
///
/// [`make_earn_request`]: LoyaltyTransactionRequest::make_earn_request
/// [`make_burn_request`]: LoyaltyTransactionRequest::make_burn_request
#[derive(Debug, Clone, Serialize)]
pub struct LoyaltyTransactionRequest {
    /// Account whose balance is adjusted
    pub user_account: UserAccountRef,

    /// Program whose balance is adjusted
    pub loyalty_program_id: u64,

    /// Signed point delta: positive earns, negative burns
    pub points: i64,

    /// Extra fields merged into the request payload as-is
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl LoyaltyTransactionRequest {
    /// Build an earn request: the point delta is the positive magnitude
    pub fn make_earn_request(
        user_account: UserAccountRef,
        loyalty_program_id: u64,
        points: i64,
        properties: Map<String, Value>,
    ) -> Self {
        LoyaltyTransactionRequest {
            user_account,
            loyalty_program_id,
            points,
            properties,
        }
    }

    /// Build a burn request: the point delta is the negated magnitude
    pub fn make_burn_request(
        user_account: UserAccountRef,
        loyalty_program_id: u64,
        points: i64,
        properties: Map<String, Value>,
    ) -> Self {
        LoyaltyTransactionRequest {
            user_account,
            loyalty_program_id,
            points: -points,
            properties,
        }
    }
}

/// A recorded loyalty point transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltyTransaction {
    /// Transaction identifier
    pub id: u64,

    /// Program the points were applied to
    #[serde(default)]
    pub loyalty_program_id: Option<u64>,

    /// Signed point delta
    pub points: i64,

    /// When the transaction was recorded
    #[serde(default)]
    pub transacted_at: Option<DateTime<Utc>>,

    /// Free-form properties echoed back by the service
    #[serde(default)]
    pub properties: Option<Value>,
}

/// Purchase details nested in a generic POS transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionData {
    /// Kind of transaction, e.g. `purchase`
    pub transaction_type: String,

    /// Caller-side reference, e.g. a receipt number
    pub transaction_reference: String,

    /// Monetary amount
    pub amount: f64,

    /// ISO currency code
    pub currency: String,

    /// Free-form properties forwarded to the service
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// A generic POS transaction submission
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRequest {
    /// Account the transaction belongs to
    pub user_account: UserAccountRef,

    /// Purchase details
    pub transaction_data: TransactionData,
}

impl TransactionRequest {
    /// Build a transaction submission for the given account
    pub fn new(user_account: UserAccountRef, transaction_data: TransactionData) -> Self {
        TransactionRequest {
            user_account,
            transaction_data,
        }
    }
}

/// A recorded generic POS transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction identifier
    pub id: u64,

    /// Account the transaction was recorded against
    #[serde(default)]
    pub user_account_id: Option<u64>,

    /// Kind of transaction
    #[serde(default)]
    pub transaction_type: Option<String>,

    /// Caller-side reference
    #[serde(default)]
    pub transaction_reference: Option<String>,

    /// Monetary amount
    #[serde(default)]
    pub amount: Option<f64>,

    /// ISO currency code
    #[serde(default)]
    pub currency: Option<String>,

    /// When the transaction was recorded
    #[serde(default)]
    pub transacted_at: Option<DateTime<Utc>>,

    /// Free-form properties echoed back by the service
    #[serde(default)]
    pub properties: Option<Value>,
}
