//! Environment trait and implementations for storefront flows.
//!
//! The environment bundles every external capability a flow may need:
//!
//! - **Dependency injection**: Pass capabilities explicitly rather than
//!   resolving them from ambient module state
//! - **Testability**: Swap any capability for a double from
//!   [`crate::services::doubles`]
//! - **Pure core**: Orchestration logic never touches a service
//!   directly, only through the environment's accessors
//!
//! # Usage
//!
//! ## Production Code
//!
//! ```
//! use shopkit::config::ShopConfig;
//! use shopkit::env::LiveEnv;
//!
//! let env = LiveEnv::new(ShopConfig::default());
//! ```
//!
//! ## Testing
//!
//! ```
//! use std::sync::Arc;
//! use shopkit::env::LiveEnv;
//! use shopkit::services::doubles::DecliningPayments;
//!
//! let env = LiveEnv::default().with_payments(Arc::new(DecliningPayments));
//! ```

use crate::config::ShopConfig;
use crate::services::real::{
    FixedExchangeRates, InstantPayments, LoggingAnalytics, LoggingMailer, RandomCodes, SystemClock,
    TableShipping,
};
use crate::services::{
    Analytics, Clock, ExchangeRates, Mailer, PaymentGateway, SecurityCodes, ShippingProvider,
};
use std::sync::Arc;

/// Environment trait defining all external capabilities flows may use.
///
/// Accessors return trait objects rather than concrete types, so
/// different implementations can be substituted while the interface
/// stays stable. Implementations must be `Clone + Send + Sync`;
/// shared resources belong behind `Arc`.
pub trait ShopEnv: Clone + Send + Sync {
    /// Currency exchange-rate lookup.
    fn exchange_rates(&self) -> &dyn ExchangeRates;

    /// Shipping quote source.
    fn shipping(&self) -> &dyn ShippingProvider;

    /// Page-view analytics tracker.
    fn analytics(&self) -> &dyn Analytics;

    /// Card payment processor.
    fn payments(&self) -> &dyn PaymentGateway;

    /// Outbound email delivery.
    fn mailer(&self) -> &dyn Mailer;

    /// One-time security code generator.
    fn security_codes(&self) -> &dyn SecurityCodes;

    /// Wall-clock time source.
    fn clock(&self) -> &dyn Clock;

    /// The storefront configuration.
    fn config(&self) -> &ShopConfig;

    /// A new environment with the updated config (immutable pattern).
    fn with_config(self, config: ShopConfig) -> Self;
}

/// Production environment implementation.
///
/// Wires the real service implementations from
/// [`crate::services::real`]. Any capability can be swapped with the
/// `with_*` setters, which is also how tests install doubles.
#[derive(Clone)]
pub struct LiveEnv {
    exchange_rates: Arc<dyn ExchangeRates>,
    shipping: Arc<dyn ShippingProvider>,
    analytics: Arc<dyn Analytics>,
    payments: Arc<dyn PaymentGateway>,
    mailer: Arc<dyn Mailer>,
    security_codes: Arc<dyn SecurityCodes>,
    clock: Arc<dyn Clock>,
    config: ShopConfig,
}

impl LiveEnv {
    /// Create a production environment with the given configuration.
    pub fn new(config: ShopConfig) -> Self {
        Self {
            exchange_rates: Arc::new(FixedExchangeRates::usd()),
            shipping: Arc::new(TableShipping::standard()),
            analytics: Arc::new(LoggingAnalytics),
            payments: Arc::new(InstantPayments),
            mailer: Arc::new(LoggingMailer),
            security_codes: Arc::new(RandomCodes),
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Replace the exchange-rate lookup.
    pub fn with_exchange_rates(self, exchange_rates: Arc<dyn ExchangeRates>) -> Self {
        Self {
            exchange_rates,
            ..self
        }
    }

    /// Replace the shipping provider.
    pub fn with_shipping(self, shipping: Arc<dyn ShippingProvider>) -> Self {
        Self { shipping, ..self }
    }

    /// Replace the analytics tracker.
    pub fn with_analytics(self, analytics: Arc<dyn Analytics>) -> Self {
        Self { analytics, ..self }
    }

    /// Replace the payment gateway.
    pub fn with_payments(self, payments: Arc<dyn PaymentGateway>) -> Self {
        Self { payments, ..self }
    }

    /// Replace the mailer.
    pub fn with_mailer(self, mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer, ..self }
    }

    /// Replace the security code generator.
    pub fn with_security_codes(self, security_codes: Arc<dyn SecurityCodes>) -> Self {
        Self {
            security_codes,
            ..self
        }
    }

    /// Replace the clock.
    pub fn with_clock(self, clock: Arc<dyn Clock>) -> Self {
        Self { clock, ..self }
    }
}

impl ShopEnv for LiveEnv {
    fn exchange_rates(&self) -> &dyn ExchangeRates {
        &*self.exchange_rates
    }

    fn shipping(&self) -> &dyn ShippingProvider {
        &*self.shipping
    }

    fn analytics(&self) -> &dyn Analytics {
        &*self.analytics
    }

    fn payments(&self) -> &dyn PaymentGateway {
        &*self.payments
    }

    fn mailer(&self) -> &dyn Mailer {
        &*self.mailer
    }

    fn security_codes(&self) -> &dyn SecurityCodes {
        &*self.security_codes
    }

    fn clock(&self) -> &dyn Clock {
        &*self.clock
    }

    fn config(&self) -> &ShopConfig {
        &self.config
    }

    fn with_config(self, config: ShopConfig) -> Self {
        Self { config, ..self }
    }
}

impl Default for LiveEnv {
    fn default() -> Self {
        Self::new(ShopConfig::default())
    }
}

impl std::fmt::Debug for LiveEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveEnv")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
