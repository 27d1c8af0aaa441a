//! Driving-age eligibility by country.

use crate::config::ShopConfig;
use crate::validation::Checked;

/// Whether someone of `age` may drive in the country identified by
/// `country_code`.
///
/// Unrecognized codes are reported as a value-level failure naming the
/// code; the lookup is case-sensitive against the configured table.
pub fn can_drive(age: u32, country_code: &str, config: &ShopConfig) -> Checked<bool> {
    match config.driving_ages.get(country_code) {
        Some(&minimum) => Checked::Value(age >= minimum),
        None => Checked::invalid(format!("Invalid country code: {country_code}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_per_country_minimum() {
        let config = ShopConfig::default();

        // (age, country, expected)
        let cases = [
            (15, "US", false),
            (16, "US", true),
            (17, "US", true),
            (16, "UK", false),
            (17, "UK", true),
            (18, "UK", true),
        ];

        for (age, country, expected) in cases {
            assert_eq!(
                can_drive(age, country, &config).value(),
                Some(expected),
                "age {age} in {country}"
            );
        }
    }

    #[test]
    fn unknown_country_code_is_invalid() {
        let config = ShopConfig::default();
        let result = can_drive(18, "ZZ", &config);

        let message = result.invalid_message().unwrap();
        assert!(message.to_lowercase().contains("invalid"));
        assert!(message.contains("ZZ"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let config = ShopConfig::default();
        assert!(can_drive(18, "us", &config).is_invalid());
    }
}
