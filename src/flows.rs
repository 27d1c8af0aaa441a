//! Storefront orchestration flows.
//!
//! Each flow is stateless and delegates to injected services through a
//! [`ShopEnv`]; dependency results are mapped to user-facing outcomes
//! 1:1, with no retries. Async flows suspend only at their single
//! dependency await.

use crate::env::ShopEnv;
use crate::errors::ServiceError;
use crate::services::{ChargeStatus, Order};
use chrono::Timelike;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Convert a USD price into `currency`.
///
/// Returns `None` when the exchange rate is not quoted.
pub fn price_in_currency<E: ShopEnv>(env: &E, price: f64, currency: &str) -> Option<f64> {
    let rate = env.exchange_rates().rate("USD", currency)?;
    Some(price * rate)
}

/// Human-readable shipping line for a destination.
pub fn shipping_info<E: ShopEnv>(env: &E, destination: &str) -> String {
    match env.shipping().quote(destination) {
        Some(quote) => format!(
            "Shipping cost: ${:.2} ({} days)",
            quote.cost, quote.estimated_days
        ),
        None => "Shipping unavailable".to_string(),
    }
}

/// Render the landing page, tracking the visit.
///
/// A tracker failure is logged and swallowed; the page renders either
/// way.
pub async fn render_home<E: ShopEnv>(env: &E) -> String {
    if let Err(e) = env.analytics().track("home").await {
        log::warn!("failed to track page view: {e}");
    }
    "<div>Welcome to the store</div>".to_string()
}

/// Outcome of submitting an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Accepted,
    Declined { reason: String },
}

impl OrderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Charge the order and report the outcome.
///
/// A failed charge and a gateway error both surface as
/// [`OrderOutcome::Declined`] with reason `"payment_error"`.
pub async fn submit_order<E: ShopEnv>(env: &E, order: &Order) -> OrderOutcome {
    match env.payments().charge(&order.card, order.total).await {
        Ok(receipt) if receipt.status == ChargeStatus::Success => OrderOutcome::Accepted,
        Ok(_) => declined(),
        Err(e) => {
            log::warn!("charge failed: {e}");
            declined()
        }
    }
}

fn declined() -> OrderOutcome {
    OrderOutcome::Declined {
        reason: "payment_error".to_string(),
    }
}

/// Register a new account.
///
/// Returns `false` when the address is not syntactically valid or the
/// welcome email cannot be sent; `true` once the welcome email is out.
pub async fn sign_up<E: ShopEnv>(env: &E, email: &str) -> bool {
    if !is_valid_email(email) {
        return false;
    }

    match env.mailer().send(email, "Welcome aboard!").await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("welcome email failed: {e}");
            false
        }
    }
}

fn is_valid_email(address: &str) -> bool {
    EMAIL_PATTERN.is_match(address)
}

/// Email a one-time login code and return the code that was sent.
pub async fn login<E: ShopEnv>(env: &E, email: &str) -> Result<String, ServiceError> {
    let code = env.security_codes().generate();
    env.mailer()
        .send(email, &format!("Your login code is {code}"))
        .await?;
    Ok(code)
}

/// Whether the storefront is currently within opening hours.
///
/// Open from `open_hour` inclusive to `close_hour` exclusive, by the
/// injected clock.
pub fn is_open<E: ShopEnv>(env: &E) -> bool {
    let hours = &env.config().hours;
    let hour = env.clock().now().hour();
    hour >= hours.open_hour && hour < hours.close_hour
}
