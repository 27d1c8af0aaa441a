//! Service trait definitions for storefront flows.
//!
//! These traits abstract over everything the flows do not own:
//! exchange rates, shipping quotes, analytics, payments, email,
//! security codes, and wall-clock time. Abstracting them enables:
//! - Unit testing flows with the doubles in [`crate::services::doubles`]
//! - Swapping providers without touching orchestration code
//! - Dependency injection through [`crate::env::ShopEnv`]
//!
//! Async traits use `async_trait` so environments can hold them as
//! trait objects. All implementations must be thread-safe
//! (`Send + Sync`); environments share them behind `Arc`.

use crate::errors::{FeedError, ServiceError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Currency exchange-rate lookup.
pub trait ExchangeRates: Send + Sync {
    /// Units of `to` bought by one unit of `from`, or `None` when the
    /// pair is not quoted.
    fn rate(&self, from: &str, to: &str) -> Option<f64>;
}

/// Shipping quote source.
pub trait ShippingProvider: Send + Sync {
    /// Quote for shipping to `destination`, or `None` when the
    /// destination is not served.
    fn quote(&self, destination: &str) -> Option<ShippingQuote>;
}

/// A shipping cost estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub cost: f64,
    pub estimated_days: u32,
}

/// Page-view analytics tracker.
#[async_trait]
pub trait Analytics: Send + Sync {
    async fn track(&self, page: &str) -> Result<(), ServiceError>;
}

/// Card payment processor.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` to `card`.
    ///
    /// A declined charge is a successful call with
    /// [`ChargeStatus::Failed`]; `Err` means the gateway itself could
    /// not process the request.
    async fn charge(&self, card: &CreditCard, amount: f64) -> Result<ChargeReceipt, ServiceError>;
}

/// The card an order is charged to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCard {
    number: String,
}

impl CreditCard {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    /// Trailing digits, safe to log.
    pub fn last_four(&self) -> &str {
        let start = self
            .number
            .char_indices()
            .rev()
            .nth(3)
            .map_or(0, |(index, _)| index);
        &self.number[start..]
    }
}

/// An order awaiting payment.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub total: f64,
    pub card: CreditCard,
}

/// Result status of a charge attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeStatus {
    Success,
    Failed,
}

/// Receipt returned by a payment gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeReceipt {
    pub status: ChargeStatus,
}

/// Outbound email delivery.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<(), ServiceError>;
}

/// One-time security code generator.
pub trait SecurityCodes: Send + Sync {
    fn generate(&self) -> String;
}

/// Wall-clock time source.
///
/// Every time-dependent predicate takes its time from here, never from
/// ambient global state, so tests can pin the instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Asynchronous number feed.
///
/// Produces a batch of numbers or fails with a reason-carrying
/// [`FeedError`]. The single await point is the fetch itself; no
/// parallel work, cancellation, or timeout semantics are defined.
#[async_trait]
pub trait NumberFeed: Send + Sync {
    async fn fetch(&self) -> Result<Vec<i64>, FeedError>;
}
