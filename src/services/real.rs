//! Production implementations of the service traits.
//!
//! These are the implementations wired into [`crate::env::LiveEnv`].
//! They stay in-process: the mailer, analytics sink, and payment
//! gateway write to the log rather than a wire, which is all this
//! library needs. For testing, use the implementations in
//! [`crate::services::doubles`] instead.

use crate::errors::{FeedError, ServiceError};
use crate::services::traits::{
    Analytics, ChargeReceipt, ChargeStatus, Clock, CreditCard, ExchangeRates, Mailer, NumberFeed,
    PaymentGateway, SecurityCodes, ShippingProvider, ShippingQuote,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashMap;

/// Exchange-rate table quoted against a single base currency.
#[derive(Debug, Clone)]
pub struct FixedExchangeRates {
    base: String,
    rates: HashMap<String, f64>,
}

impl FixedExchangeRates {
    /// Empty table for the given base currency.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            rates: HashMap::new(),
        }
    }

    /// Add or replace the rate for one quote currency.
    pub fn with_rate(mut self, currency: impl Into<String>, rate: f64) -> Self {
        self.rates.insert(currency.into(), rate);
        self
    }

    /// USD table covering the currencies the storefront prices in.
    pub fn usd() -> Self {
        Self::new("USD")
            .with_rate("USD", 1.0)
            .with_rate("EUR", 0.92)
            .with_rate("GBP", 0.79)
            .with_rate("AUD", 1.53)
    }
}

impl ExchangeRates for FixedExchangeRates {
    fn rate(&self, from: &str, to: &str) -> Option<f64> {
        if from != self.base {
            return None;
        }
        self.rates.get(to).copied()
    }
}

/// Per-destination shipping quote table.
#[derive(Debug, Clone, Default)]
pub struct TableShipping {
    quotes: HashMap<String, ShippingQuote>,
}

impl TableShipping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(mut self, destination: impl Into<String>, quote: ShippingQuote) -> Self {
        self.quotes.insert(destination.into(), quote);
        self
    }

    /// The destinations the stock storefront ships to.
    pub fn standard() -> Self {
        Self::new()
            .with_quote(
                "US",
                ShippingQuote {
                    cost: 10.0,
                    estimated_days: 3,
                },
            )
            .with_quote(
                "UK",
                ShippingQuote {
                    cost: 25.0,
                    estimated_days: 7,
                },
            )
    }
}

impl ShippingProvider for TableShipping {
    fn quote(&self, destination: &str) -> Option<ShippingQuote> {
        self.quotes.get(destination).copied()
    }
}

/// Analytics sink that records page views to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAnalytics;

#[async_trait]
impl Analytics for LoggingAnalytics {
    async fn track(&self, page: &str) -> Result<(), ServiceError> {
        log::info!("page view: {page}");
        Ok(())
    }
}

/// Gateway that approves every charge.
///
/// Stands in for a real processor; the charge is logged with only the
/// card's trailing digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPayments;

#[async_trait]
impl PaymentGateway for InstantPayments {
    async fn charge(&self, card: &CreditCard, amount: f64) -> Result<ChargeReceipt, ServiceError> {
        log::info!("charging {amount:.2} to card ending {}", card.last_four());
        Ok(ChargeReceipt {
            status: ChargeStatus::Success,
        })
    }
}

/// Mailer that writes messages to the log instead of a wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMailer;

#[async_trait]
impl Mailer for LoggingMailer {
    async fn send(&self, to: &str, body: &str) -> Result<(), ServiceError> {
        log::info!("email to {to}: {body}");
        Ok(())
    }
}

/// Uniformly random six-digit codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodes;

impl SecurityCodes for RandomCodes {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        format!("{:06}", rng.gen_range(0..1_000_000))
    }
}

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Feed that serves a fixed batch of numbers.
#[derive(Debug, Clone)]
pub struct CannedFeed {
    data: Vec<i64>,
}

impl CannedFeed {
    pub fn new(data: Vec<i64>) -> Self {
        Self { data }
    }
}

impl Default for CannedFeed {
    fn default() -> Self {
        Self::new(vec![1, 2, 3])
    }
}

#[async_trait]
impl NumberFeed for CannedFeed {
    async fn fetch(&self) -> Result<Vec<i64>, FeedError> {
        Ok(self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_table_quotes_known_pairs_only() {
        let rates = FixedExchangeRates::usd();

        assert_eq!(rates.rate("USD", "USD"), Some(1.0));
        assert!(rates.rate("USD", "EUR").is_some());
        assert_eq!(rates.rate("USD", "XYZ"), None);
        assert_eq!(rates.rate("EUR", "USD"), None);
    }

    #[test]
    fn standard_shipping_serves_stock_destinations() {
        let shipping = TableShipping::standard();

        assert!(shipping.quote("US").is_some());
        assert_eq!(shipping.quote("Atlantis"), None);
    }

    #[test]
    fn random_codes_are_six_digits() {
        let codes = RandomCodes;
        for _ in 0..32 {
            let code = codes.generate();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[tokio::test]
    async fn canned_feed_returns_its_batch() {
        let feed = CannedFeed::default();
        let batch = feed.fetch().await.unwrap();
        assert!(!batch.is_empty());
    }

    #[tokio::test]
    async fn instant_payments_always_approve() {
        let gateway = InstantPayments;
        let card = CreditCard::new("4242424242424242");

        let receipt = gateway.charge(&card, 12.5).await.unwrap();
        assert_eq!(receipt.status, ChargeStatus::Success);
    }
}
