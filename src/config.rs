//! Storefront configuration: policies and lookup tables.
//!
//! Every field is optional in the TOML file and falls back to the
//! stock storefront defaults, so a partial config only overrides what
//! it names. [`ShopConfig::load_or_default`] never fails; parse and IO
//! problems are logged and defaults are used instead.

use crate::pricing::Coupon;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Top-level configuration for the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Opening hours used by the availability check.
    #[serde(default)]
    pub hours: StoreHours,

    /// Length bounds for display usernames.
    #[serde(default)]
    pub username: LengthPolicy,

    /// Bounds enforced on signup forms.
    #[serde(default)]
    pub signup: SignupPolicy,

    /// Discount code -> rate table used by price calculation.
    #[serde(default = "default_discount_codes")]
    pub discount_codes: HashMap<String, f64>,

    /// Published promotions.
    #[serde(default = "default_coupons")]
    pub coupons: Vec<Coupon>,

    /// Country code -> minimum driving age.
    #[serde(default = "default_driving_ages")]
    pub driving_ages: HashMap<String, u32>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            hours: StoreHours::default(),
            username: LengthPolicy::default(),
            signup: SignupPolicy::default(),
            discount_codes: default_discount_codes(),
            coupons: default_coupons(),
            driving_ages: default_driving_ages(),
        }
    }
}

/// Daily opening hours, `[open_hour, close_hour)` in the store clock's
/// timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHours {
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,
    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
}

impl Default for StoreHours {
    fn default() -> Self {
        Self {
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
        }
    }
}

fn default_open_hour() -> u32 {
    8
}

fn default_close_hour() -> u32 {
    20
}

/// Inclusive character-length bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthPolicy {
    #[serde(default = "default_username_min")]
    pub min: usize,
    #[serde(default = "default_username_max")]
    pub max: usize,
}

impl Default for LengthPolicy {
    fn default() -> Self {
        Self {
            min: default_username_min(),
            max: default_username_max(),
        }
    }
}

fn default_username_min() -> usize {
    5
}

fn default_username_max() -> usize {
    15
}

/// Bounds enforced on signup forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupPolicy {
    #[serde(default = "default_signup_username_min")]
    pub username_min: usize,
    #[serde(default = "default_signup_username_max")]
    pub username_max: usize,
    #[serde(default = "default_signup_age_min")]
    pub age_min: i64,
    #[serde(default = "default_signup_age_max")]
    pub age_max: i64,
}

impl Default for SignupPolicy {
    fn default() -> Self {
        Self {
            username_min: default_signup_username_min(),
            username_max: default_signup_username_max(),
            age_min: default_signup_age_min(),
            age_max: default_signup_age_max(),
        }
    }
}

fn default_signup_username_min() -> usize {
    3
}

fn default_signup_username_max() -> usize {
    255
}

fn default_signup_age_min() -> i64 {
    18
}

fn default_signup_age_max() -> i64 {
    100
}

fn default_discount_codes() -> HashMap<String, f64> {
    HashMap::from([("SAVE10".to_string(), 0.10), ("SAVE20".to_string(), 0.20)])
}

fn default_coupons() -> Vec<Coupon> {
    vec![
        Coupon {
            code: "SAVE20NOW".to_string(),
            discount: 0.2,
        },
        Coupon {
            code: "DISCOUNT50OFF".to_string(),
            discount: 0.5,
        },
    ]
}

fn default_driving_ages() -> HashMap<String, u32> {
    HashMap::from([("US".to_string(), 16), ("UK".to_string(), 17)])
}

impl ShopConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ShopConfig =
            toml::from_str(contents).context("failed to parse shop config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path`, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(config) => {
                log::debug!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e:#}; using default config");
                Self::default()
            }
        }
    }

    /// Check every table and policy, accumulating all problems instead
    /// of stopping at the first.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        for (code, rate) in &self.discount_codes {
            if !(0.0..1.0).contains(rate) {
                problems.push(format!(
                    "discount code {code} has rate {rate} outside [0, 1)"
                ));
            }
        }

        for coupon in &self.coupons {
            if coupon.code.is_empty() {
                problems.push("coupon with empty code".to_string());
            }
            if !(0.0..1.0).contains(&coupon.discount) {
                problems.push(format!(
                    "coupon {} has discount {} outside [0, 1)",
                    coupon.code, coupon.discount
                ));
            }
        }

        if self.username.min > self.username.max {
            problems.push(format!(
                "username length bounds are inverted ({} > {})",
                self.username.min, self.username.max
            ));
        }
        if self.signup.username_min > self.signup.username_max {
            problems.push("signup username bounds are inverted".to_string());
        }
        if self.signup.age_min > self.signup.age_max {
            problems.push("signup age bounds are inverted".to_string());
        }

        if self.hours.open_hour >= self.hours.close_hour || self.hours.close_hour > 24 {
            problems.push(format!(
                "store hours {}..{} are not a valid daily window",
                self.hours.open_hour, self.hours.close_hour
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            anyhow::bail!(problems.join("; "))
        }
    }
}
