//! Click payment-link builders.
//!
//! Pure formatting plus one rule: the amount is floored to whole so'm and must
//! be positive and finite. Two link flavours exist: a deterministic redirect
//! link whose transaction parameter is `<user>.<plan>`, and a one-time link
//! carrying a randomized token.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;
use url::Url;

use crate::core::config::PaymentConfig;
use crate::core::errors::{NamesmithError, Result};

/// Length of the one-time transaction token, in hex characters.
pub const ONETIME_TOKEN_LEN: usize = 24;

/// What the payer is buying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: f64,
    pub plan_id: String,
    pub user_id: String,
}

impl PaymentRequest {
    pub fn new(amount: f64, plan_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            amount,
            plan_id: plan_id.into(),
            user_id: user_id.into(),
        }
    }
}

/// Floor `amount` to an integer, rejecting non-finite, non-positive and
/// out-of-range values.
pub fn normalize_amount(amount: f64) -> Result<u64> {
    let floored = amount.floor();
    // u64::MAX rounds up to 2^64 as f64, so anything at or above it would saturate
    if !floored.is_finite() || floored <= 0.0 || floored >= u64::MAX as f64 {
        return Err(NamesmithError::invalid_amount(amount));
    }
    Ok(floored as u64)
}

/// Builds payment URLs for the configured Click merchant.
#[derive(Debug, Clone)]
pub struct ClickLinkBuilder {
    config: PaymentConfig,
}

impl ClickLinkBuilder {
    pub fn new(config: PaymentConfig) -> Self {
        Self { config }
    }

    /// Deterministic redirect link; the transaction parameter is `<user>.<plan>`.
    pub fn redirect_link(&self, request: &PaymentRequest) -> Result<String> {
        let amount = normalize_amount(request.amount)?;
        let transaction = merchant_transaction_id(request);

        let mut url = Url::parse(&self.config.provider_url)?;
        url.query_pairs_mut()
            .append_pair("service_id", &self.config.service_id)
            .append_pair("merchant_id", &self.config.merchant_id)
            .append_pair("merchant_user_id", &self.config.merchant_user_id)
            .append_pair("amount", &amount.to_string())
            .append_pair("transaction_param", &transaction)
            .append_pair("additional_param3", &request.plan_id)
            .append_pair("return_url", &self.config.return_url);

        debug!(user = %request.user_id, plan = %request.plan_id, amount, "built redirect link");
        Ok(url.into())
    }

    /// One-time link with a randomized transaction token.
    ///
    /// `plan_code` defaults to the plan id.
    pub fn onetime_link(&self, request: &PaymentRequest, plan_code: Option<&str>) -> Result<String> {
        let amount = normalize_amount(request.amount)?;
        let token = onetime_token(request);
        let plan_code = plan_code.unwrap_or(request.plan_id.as_str());

        let mut url = Url::parse(&self.config.provider_url)?;
        url.query_pairs_mut()
            .append_pair("service_id", &self.config.service_id)
            .append_pair("merchant_id", &self.config.merchant_id)
            .append_pair("amount", &amount.to_string())
            .append_pair("transaction_param", &token)
            .append_pair("additional_param1", &request.user_id)
            .append_pair("additional_param2", &request.plan_id)
            .append_pair("additional_param3", plan_code)
            .append_pair("additional_param4", plan_code)
            .append_pair("param1", &request.user_id)
            .append_pair("param2", &request.plan_id)
            .append_pair("return_url", &self.config.return_url);

        debug!(user = %request.user_id, plan = %request.plan_id, amount, "built one-time link");
        Ok(url.into())
    }
}

fn merchant_transaction_id(request: &PaymentRequest) -> String {
    format!("{}.{}", request.user_id, request.plan_id)
}

fn onetime_token(request: &PaymentRequest) -> String {
    let seed = format!(
        "{}.{}.{}.{}",
        request.user_id,
        request.plan_id,
        chrono::Utc::now().timestamp_millis(),
        uuid::Uuid::new_v4()
    );
    let digest = Sha256::digest(seed.as_bytes());
    let mut hex = format!("{digest:x}");
    hex.truncate(ONETIME_TOKEN_LEN);
    hex
}
