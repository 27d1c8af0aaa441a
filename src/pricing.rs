//! Pricing helpers: the coupon table, discount-code application, and
//! price predicates.

use crate::config::ShopConfig;
use crate::services::Clock;
use crate::validation::Checked;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// A published promotion.
///
/// Config validation guarantees a non-empty code and a discount rate
/// in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub discount: f64,
}

/// The currently published coupons. Never empty with the stock config.
pub fn coupons(config: &ShopConfig) -> &[Coupon] {
    &config.coupons
}

/// Apply a discount code to a price.
///
/// Known codes reduce the price by their configured rate; unknown codes
/// leave it unchanged. A negative or non-finite price is reported as a
/// value-level failure, not an error.
pub fn calculate_discount(price: f64, code: &str, config: &ShopConfig) -> Checked<f64> {
    if !price.is_finite() || price < 0.0 {
        return Checked::invalid("Invalid price");
    }

    match config.discount_codes.get(code) {
        Some(rate) => Checked::Value(price * (1.0 - rate)),
        None => Checked::Value(price),
    }
}

/// Whether `price` lies within `[min, max]`, inclusive on both bounds.
pub fn is_price_in_range(price: f64, min: f64, max: f64) -> bool {
    (min..=max).contains(&price)
}

/// Seasonal discount rate for the injected clock's current date.
///
/// 20% on December 25th, nothing otherwise.
pub fn seasonal_discount(clock: &dyn Clock) -> f64 {
    let today = clock.now().date_naive();
    if today.month() == 12 && today.day() == 25 {
        0.2
    } else {
        0.0
    }
}
