//! # perx - Perx Loyalty Platform Client for Rust
//!
//! A typed async client for the Perx loyalty and rewards REST API. The
//! library covers OAuth2 token issuance, reward browsing and search, the
//! voucher lifecycle (issue, reserve, redeem, release), loyalty point
//! queries, and the POS earn/burn transaction surface.
//!
//! ## Features
//!
//! - Client-credential tokens, either application-wide or scoped to a
//!   single customer identifier
//! - Reward catalog browsing and full-text search with typed filter scopes
//! - Complete voucher lifecycle: issuance, reservation holds, three-way
//!   redemption, release
//! - Loyalty program balances and paginated transaction history
//! - POS operations: user account lookup and earn/burn point submissions
//! - Detailed error types separating API rejections from transport failures
//!
//! ## Basic Usage
//!
//! ```no_run
//! use perx::{Config, PerxService, RewardScope};
//!
//! # async fn run() -> Result<(), perx::PerxError> {
//! let service = PerxService::new(Config::new(
//!     "https://api.perxtech.io",
//!     "client_id",
//!     "client_secret",
//! ));
//!
//! // Issue a token for one customer, then list their rewards
//! let token = service.get_user_token("user-1001").await?;
//! let rewards = service
//!     .get_rewards(&token.access_token, &RewardScope::default())
//!     .await?;
//!
//! for reward in rewards.data {
//!     println!("{}: {:?}", reward.id, reward.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Voucher Redemption
//!
//! ```no_run
//! use perx::{Config, PerxService};
//!
//! # async fn run() -> Result<(), perx::PerxError> {
//! let service = PerxService::new(Config::new(
//!     "https://api.perxtech.io",
//!     "client_id",
//!     "client_secret",
//! ));
//! let token = service.get_user_token("user-1001").await?;
//!
//! // Issue a voucher against reward 42, then redeem it in two steps
//! let voucher = service.issue_voucher(&token.access_token, 42).await?;
//! let pending = service
//!     .redeem_voucher(&token.access_token, voucher.id, Some(false))
//!     .await?;
//! let redeemed = service
//!     .redeem_voucher(&token.access_token, pending.id, Some(true))
//!     .await?;
//!
//! println!("voucher is now {:?}", redeemed.state);
//! # Ok(())
//! # }
//! ```
//!
//! ## POS Transactions
//!
//! ```no_run
//! use perx::{Config, LoyaltyTransactionRequest, PerxService, UserAccountRef};
//! use serde_json::Map;
//!
//! # async fn run() -> Result<(), perx::PerxError> {
//! let service = PerxService::new(Config::new(
//!     "https://api.perxtech.io",
//!     "client_id",
//!     "client_secret",
//! ));
//! let token = service.get_application_token().await?;
//!
//! // Credit 121 points to user account 1001 under loyalty program 7
//! let earn = LoyaltyTransactionRequest::make_earn_request(
//!     UserAccountRef::by_id(1001),
//!     7,
//!     121,
//!     Map::new(),
//! );
//! service
//!     .submit_loyalty_transaction(&token.access_token, &earn)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod client;
pub mod customer;
pub mod error;
pub mod loyalty;
pub mod response;
pub mod rest;
pub mod reward;
pub mod token;
pub mod transaction;
pub mod voucher;

// Re-export main types for convenience
pub use category::Category;
pub use client::{Config, DebugMode};
pub use customer::Customer;
pub use error::{PerxError, Result};
pub use loyalty::LoyaltyProgram;
pub use response::{PerxList, PerxListMeta};
pub use rest::PerxService;
pub use reward::{
    Reward, RewardReservation, RewardScope, RewardSearchResult, RewardSortBy, SortOrder,
};
pub use token::Token;
pub use transaction::{
    LoyaltyTransaction, LoyaltyTransactionRequest, Transaction, TransactionData,
    TransactionRequest, UserAccountRef,
};
pub use voucher::{Voucher, VoucherScope, VoucherSortBy, VoucherState, VoucherType};

// Re-export serde_json for convenience
pub use serde_json::json;
