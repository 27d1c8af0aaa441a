//! Test doubles for the service traits.
//!
//! These implementations record calls or return canned answers so
//! orchestration code can be tested without touching real services.
//! They ship as public library items; consumers are expected to use
//! them in their own test suites.
//!
//! Recording doubles keep their call log behind `Arc<Mutex<..>>`, so a
//! clone handed to an environment and the original held by the test
//! observe the same calls.
//!
//! # Example
//!
//! ```
//! use shopkit::services::doubles::RecordingMailer;
//! use shopkit::services::Mailer;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let mailer = RecordingMailer::new();
//! mailer.send("a@b.com", "hello").await.unwrap();
//!
//! assert_eq!(mailer.sent().len(), 1);
//! # });
//! ```

use crate::errors::{FeedError, ServiceError};
use crate::services::traits::{
    Analytics, ChargeReceipt, ChargeStatus, Clock, CreditCard, ExchangeRates, Mailer, NumberFeed,
    PaymentGateway, SecurityCodes, ShippingProvider, ShippingQuote,
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};

/// Exchange rates that answer every pair with one fixed rate.
#[derive(Debug, Clone, Copy)]
pub struct StaticRates(pub f64);

impl ExchangeRates for StaticRates {
    fn rate(&self, _from: &str, _to: &str) -> Option<f64> {
        Some(self.0)
    }
}

/// Shipping provider that serves no destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShipping;

impl ShippingProvider for NoShipping {
    fn quote(&self, _destination: &str) -> Option<ShippingQuote> {
        None
    }
}

/// The same quote for every destination.
#[derive(Debug, Clone, Copy)]
pub struct FlatShipping(pub ShippingQuote);

impl ShippingProvider for FlatShipping {
    fn quote(&self, _destination: &str) -> Option<ShippingQuote> {
        Some(self.0)
    }
}

/// Records every tracked page.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnalytics {
    pages: Arc<Mutex<Vec<String>>>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All pages tracked so far, in call order.
    pub fn pages(&self) -> Vec<String> {
        self.pages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Analytics for RecordingAnalytics {
    async fn track(&self, page: &str) -> Result<(), ServiceError> {
        self.pages.lock().unwrap().push(page.to_string());
        Ok(())
    }
}

/// Tracker whose every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnreachableAnalytics;

#[async_trait]
impl Analytics for UnreachableAnalytics {
    async fn track(&self, _page: &str) -> Result<(), ServiceError> {
        Err(ServiceError::unavailable("analytics", "connection refused"))
    }
}

/// Declines every charge.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecliningPayments;

#[async_trait]
impl PaymentGateway for DecliningPayments {
    async fn charge(&self, _card: &CreditCard, _amount: f64) -> Result<ChargeReceipt, ServiceError> {
        Ok(ChargeReceipt {
            status: ChargeStatus::Failed,
        })
    }
}

/// Approves every charge and records the amounts.
#[derive(Debug, Clone, Default)]
pub struct RecordingPayments {
    amounts: Arc<Mutex<Vec<f64>>>,
}

impl RecordingPayments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Amounts charged so far, in call order.
    pub fn amounts(&self) -> Vec<f64> {
        self.amounts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingPayments {
    async fn charge(&self, _card: &CreditCard, amount: f64) -> Result<ChargeReceipt, ServiceError> {
        self.amounts.lock().unwrap().push(amount);
        Ok(ChargeReceipt {
            status: ChargeStatus::Success,
        })
    }
}

/// Records every message instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(to, body)` pairs sent so far, in call order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, body: &str) -> Result<(), ServiceError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        Ok(())
    }
}

/// Mailer whose every send fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnreachableMailer;

#[async_trait]
impl Mailer for UnreachableMailer {
    async fn send(&self, _to: &str, _body: &str) -> Result<(), ServiceError> {
        Err(ServiceError::unavailable("mailer", "connection refused"))
    }
}

/// Always generates the same code.
#[derive(Debug, Clone)]
pub struct FixedCodes(pub String);

impl SecurityCodes for FixedCodes {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

/// Clock pinned to a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pin to `hour` o'clock UTC on an arbitrary fixed date.
    ///
    /// # Panics
    ///
    /// Panics if `hour` is not a valid hour of day.
    pub fn at_hour(hour: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(2024, 1, 2, hour, 0, 0)
                .single()
                .expect("valid hour of day"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Feed that always fails with the given reason.
#[derive(Debug, Clone)]
pub struct FlakyFeed {
    reason: String,
}

impl FlakyFeed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl NumberFeed for FlakyFeed {
    async fn fetch(&self) -> Result<Vec<i64>, FeedError> {
        Err(FeedError::new(self.reason.clone()))
    }
}
