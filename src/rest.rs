use crate::category::Category;
use crate::client::{create_rest_client, Config, DebugMode};
use crate::customer::Customer;
use crate::error::{PerxError, Result};
use crate::loyalty::LoyaltyProgram;
use crate::response::{self, PerxList};
use crate::reward::{Reward, RewardReservation, RewardScope, RewardSearchResult};
use crate::token::{Token, TokenRequest};
use crate::transaction::{
    LoyaltyTransaction, LoyaltyTransactionRequest, Transaction, TransactionRequest,
};
use crate::voucher::{Voucher, VoucherScope};
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use std::fmt::Display;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// Default hold duration for reward reservations, sent to the server in
/// milliseconds
const DEFAULT_RESERVATION_TIMEOUT: Duration = Duration::from_secs(900);

/// Typed facade over the Perx REST API.
///
/// One method per remote endpoint; every operation is a single stateless
/// HTTP exchange. The service holds no mutable state, so one instance can
/// serve concurrent calls.
#[derive(Debug, Clone)]
pub struct PerxService {
    /// HTTP client
    pub client: Client,
    /// Configuration
    pub config: Config,
}

impl PerxService {
    /// Create a new service with the given configuration
    pub fn new(config: Config) -> Self {
        PerxService {
            client: create_rest_client(),
            config,
        }
    }

    /// Replace the HTTP client, keeping the configuration
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the debug logging mode
    pub fn with_debug(mut self, debug: DebugMode) -> Self {
        self.config.debug = debug;
        self
    }

    /// Exchange client credentials for a token scoped to one external user
    /// identifier, requesting the configured token duration.
    pub async fn get_user_token(&self, user_identifier: &str) -> Result<Token> {
        let body = serde_json::to_value(TokenRequest::user(
            &self.config.client_id,
            &self.config.client_secret,
            user_identifier,
            self.config.token_duration_seconds,
        ))?;

        let (status, text) = self
            .perform(Method::POST, "/v4/oauth/token", None, &[], Some(body))
            .await?;
        check_unauthorized(status)?;
        response::parse_checked(status, &text)
    }

    /// Exchange client credentials for an application-scoped token
    pub async fn get_application_token(&self) -> Result<Token> {
        let body = serde_json::to_value(TokenRequest::application(
            &self.config.client_id,
            &self.config.client_secret,
        ))?;

        let (status, text) = self
            .perform(Method::POST, "/v4/oauth/token", None, &[], Some(body))
            .await?;
        check_unauthorized(status)?;
        response::parse_checked(status, &text)
    }

    /// List rewards visible to the customer, filtered by the given scope
    pub async fn get_rewards(
        &self,
        user_token: &str,
        scope: &RewardScope,
    ) -> Result<PerxList<Reward>> {
        let params = scope.to_query_params();
        let (status, text) = self
            .perform(Method::GET, "/v4/rewards", Some(user_token), &params, None)
            .await?;
        response::parse_list(status, &text)
    }

    /// Full-text reward search
    pub async fn search_rewards(
        &self,
        user_token: &str,
        keyword: &str,
        page: u32,
        size: u32,
    ) -> Result<PerxList<RewardSearchResult>> {
        let params = vec![
            ("search_string", keyword.to_string()),
            ("page", page.to_string()),
            ("size", size.to_string()),
        ];
        let (status, text) = self
            .perform(Method::GET, "/v4/search", Some(user_token), &params, None)
            .await?;
        response::parse_list(status, &text)
    }

    /// Issue a voucher against a reward.
    ///
    /// The reward id is validated as an integer literal before any request
    /// goes out; a malformed id fails with a bad-request error and no
    /// network call is made.
    pub async fn issue_voucher(&self, user_token: &str, reward_id: impl Display) -> Result<Voucher> {
        let reward_id = reward_id.to_string();
        ensure_integer_literal("reward id", &reward_id)?;

        let path = format!("/v4/rewards/{}/issue", reward_id);
        let (status, text) = self
            .perform(Method::POST, &path, Some(user_token), &[], Some(json!({})))
            .await?;
        response::parse_object(status, &text)
    }

    /// Place a temporary hold on a reward prior to voucher issuance.
    ///
    /// The hold lapses after `timeout` (900 seconds when `None`); the
    /// timeout is a server-side parameter, not a local deadline. Confirm or
    /// release the returned reservation with
    /// [`confirm_reward_reservation`](Self::confirm_reward_reservation) /
    /// [`release_reward_reservation`](Self::release_reward_reservation).
    pub async fn reserve_reward(
        &self,
        user_token: &str,
        reward_id: impl Display,
        timeout: Option<Duration>,
    ) -> Result<RewardReservation> {
        let reward_id = reward_id.to_string();
        ensure_integer_literal("reward id", &reward_id)?;

        let timeout = timeout.unwrap_or(DEFAULT_RESERVATION_TIMEOUT);
        let params = vec![("timeout", timeout.as_millis().to_string())];
        let path = format!("/v4/rewards/{}/reserve", reward_id);
        let (status, text) = self
            .perform(Method::POST, &path, Some(user_token), &params, Some(json!({})))
            .await?;
        response::parse_object(status, &text)
    }

    /// Release a held reservation, returning the underlying voucher
    pub async fn release_reward_reservation(
        &self,
        user_token: &str,
        reservation_id: impl Display,
    ) -> Result<Voucher> {
        let reservation_id = reservation_id.to_string();
        ensure_integer_literal("reservation id", &reservation_id)?;

        let path = format!("/v4/vouchers/{}/release", reservation_id);
        let (status, text) = self
            .perform(Method::PATCH, &path, Some(user_token), &[], Some(json!({})))
            .await?;
        response::parse_object(status, &text)
    }

    /// Confirm a held reservation, finalizing voucher issuance
    pub async fn confirm_reward_reservation(
        &self,
        user_token: &str,
        reservation_id: impl Display,
    ) -> Result<Voucher> {
        let reservation_id = reservation_id.to_string();
        ensure_integer_literal("reservation id", &reservation_id)?;

        let path = format!("/v4/vouchers/{}/confirm", reservation_id);
        let (status, text) = self
            .perform(Method::PATCH, &path, Some(user_token), &[], Some(json!({})))
            .await?;
        response::parse_object(status, &text)
    }

    /// List the customer's vouchers, filtered by the given scope
    pub async fn get_vouchers(
        &self,
        user_token: &str,
        scope: &VoucherScope,
    ) -> Result<PerxList<Voucher>> {
        let params = scope.to_query_params();
        let (status, text) = self
            .perform(Method::GET, "/v4/vouchers", Some(user_token), &params, None)
            .await?;
        response::parse_list(status, &text)
    }

    /// Redeem a voucher.
    ///
    /// The `confirm` argument is three-way: `Some(false)` starts a
    /// redemption without finalizing it (the voucher moves to
    /// `redemption_in_progress`), `Some(true)` finalizes a previously
    /// started redemption, and `None` leaves the parameter off the wire so
    /// the server performs an immediate one-shot redemption.
    pub async fn redeem_voucher(
        &self,
        user_token: &str,
        voucher_id: impl Display,
        confirm: Option<bool>,
    ) -> Result<Voucher> {
        let voucher_id = voucher_id.to_string();
        ensure_integer_literal("voucher id", &voucher_id)?;

        let mut params = Vec::new();
        if let Some(confirm) = confirm {
            params.push(("confirm", confirm.to_string()));
        }

        let path = format!("/v4/vouchers/{}/redeem", voucher_id);
        let (status, text) = self
            .perform(Method::POST, &path, Some(user_token), &params, Some(json!({})))
            .await?;
        response::parse_object(status, &text)
    }

    /// Cancel an in-progress redemption, returning the voucher to a
    /// redeemable state
    pub async fn release_voucher(
        &self,
        user_token: &str,
        voucher_id: impl Display,
    ) -> Result<Voucher> {
        let voucher_id = voucher_id.to_string();
        ensure_integer_literal("voucher id", &voucher_id)?;

        let path = format!("/v4/vouchers/{}/release", voucher_id);
        let (status, text) = self
            .perform(Method::PATCH, &path, Some(user_token), &[], Some(json!({})))
            .await?;
        response::parse_object(status, &text)
    }

    /// Fetch one loyalty program entry for the customer
    pub async fn get_loyalty_program(
        &self,
        user_token: &str,
        program_id: impl Display,
    ) -> Result<LoyaltyProgram> {
        let program_id = program_id.to_string();
        ensure_integer_literal("loyalty program id", &program_id)?;

        let path = format!("/v4/loyalty/{}", program_id);
        let (status, text) = self
            .perform(Method::GET, &path, Some(user_token), &[], None)
            .await?;
        response::parse_object(status, &text)
    }

    /// List all loyalty program entries for the customer
    pub async fn get_loyalty_programs(&self, user_token: &str) -> Result<Vec<LoyaltyProgram>> {
        let (status, text) = self
            .perform(Method::GET, "/v4/loyalty", Some(user_token), &[], None)
            .await?;
        response::parse_object(status, &text)
    }

    /// Paginated loyalty transaction history for the authenticated customer
    pub async fn query_loyalty_transactions_history(
        &self,
        user_token: &str,
        page: u32,
        per_page: u32,
    ) -> Result<PerxList<LoyaltyTransaction>> {
        let params = vec![("page", page.to_string()), ("size", per_page.to_string())];
        let (status, text) = self
            .perform(
                Method::GET,
                "/v4/loyalty/transactions_history",
                Some(user_token),
                &params,
                None,
            )
            .await?;
        response::parse_list(status, &text)
    }

    /// Look up a customer; the id must be `me` or an integer literal
    pub async fn get_customer(
        &self,
        user_token: &str,
        customer_id: impl Display,
    ) -> Result<Customer> {
        let customer_id = customer_id.to_string();
        ensure_customer_id(&customer_id)?;

        let path = format!("/v4/customers/{}", customer_id);
        let (status, text) = self
            .perform(Method::GET, &path, Some(user_token), &[], None)
            .await?;
        response::parse_object(status, &text)
    }

    /// Look up the customer the token is scoped to
    pub async fn get_me(&self, user_token: &str) -> Result<Customer> {
        self.get_customer(user_token, "me").await
    }

    /// List reward categories.
    ///
    /// A `parent_id` of `None` omits the parent filter, listing root-level
    /// and nested categories together; a parent of 0 behaves the same way.
    pub async fn get_categories(
        &self,
        user_token: &str,
        parent_id: Option<u64>,
        page: u32,
        size: u32,
    ) -> Result<PerxList<Category>> {
        let mut params = Vec::new();
        if let Some(parent_id) = parent_id.filter(|id| *id != 0) {
            params.push(("parent_id", parent_id.to_string()));
        }
        params.push(("page", page.to_string()));
        params.push(("size", size.to_string()));

        let (status, text) = self
            .perform(Method::GET, "/v4/categories", Some(user_token), &params, None)
            .await?;
        response::parse_list(status, &text)
    }

    /// Look up a user account by numeric id through the POS surface
    pub async fn get_customer_detail(
        &self,
        application_token: &str,
        user_id: u64,
    ) -> Result<Customer> {
        let path = format!("/v4/pos/user_accounts/{}", user_id);
        let (status, text) = self
            .perform(Method::GET, &path, Some(application_token), &[], None)
            .await?;
        check_unauthorized(status)?;
        response::parse_object(status, &text)
    }

    /// Submit a generic POS transaction
    pub async fn submit_transaction(
        &self,
        application_token: &str,
        request: &TransactionRequest,
    ) -> Result<Transaction> {
        let body = serde_json::to_value(request)?;
        let (status, text) = self
            .perform(
                Method::POST,
                "/v4/pos/transactions",
                Some(application_token),
                &[],
                Some(body),
            )
            .await?;
        response::parse_object(status, &text)
    }

    /// Submit a loyalty point transaction built with the earn/burn
    /// constructors on [`LoyaltyTransactionRequest`]
    pub async fn submit_loyalty_transaction(
        &self,
        application_token: &str,
        request: &LoyaltyTransactionRequest,
    ) -> Result<LoyaltyTransaction> {
        let body = serde_json::to_value(request)?;
        let (status, text) = self
            .perform(
                Method::POST,
                "/v4/pos/loyalty_transactions",
                Some(application_token),
                &[],
                Some(body),
            )
            .await?;
        response::parse_object(status, &text)
    }

    /// Execute one HTTP exchange and hand back the raw status and body.
    ///
    /// Builds the URL from the configured base, attaches the bearer header
    /// and query/body, and logs either side when the debug mode asks for
    /// it. Status interpretation is left to the response layer.
    async fn perform(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        query: &[(&'static str, String)],
        body: Option<Value>,
    ) -> Result<(StatusCode, String)> {
        let mut url = Url::parse(&format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            path
        ))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        let mut request = self.client.request(method.clone(), url.as_str());
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(ref body) = body {
            request = request.json(body);
        }

        if self.config.debug.logs_requests() {
            debug!("REQ> {} {}", method, url);
        }

        let start = Instant::now();
        let http_response = request.send().await?;
        let status = http_response.status();
        let text = http_response.text().await?;

        if self.config.debug.logs_responses() {
            debug!(
                "RESP< {} {} => {:?} (status: {}) {}",
                method,
                url,
                start.elapsed(),
                status,
                text
            );
        }

        Ok((status, text))
    }
}

/// 401 on an auth-sensitive call maps to a distinct unauthorized error,
/// ahead of generic parsing
fn check_unauthorized(status: StatusCode) -> Result<()> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(PerxError::Unauthorized);
    }
    Ok(())
}

/// Ids are validated as ASCII digit strings before any request goes out:
/// the string form rejects negatives and decimals that a plain numeric
/// check would let through.
fn ensure_integer_literal(name: &str, value: &str) -> Result<()> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(PerxError::bad_request(format!(
            "invalid {} '{}': expected an integer literal",
            name, value
        )))
    }
}

/// Customer ids additionally accept the literal `me`
fn ensure_customer_id(value: &str) -> Result<()> {
    if value == "me" {
        return Ok(());
    }
    ensure_integer_literal("customer id", value)
}
