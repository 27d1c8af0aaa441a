//! Boundary validators: error-as-value contract.

use shopkit::services::real::CannedFeed;
use shopkit::services::NumberFeed;
use shopkit::{
    calculate_discount, can_drive, coupons, is_price_in_range, is_valid_username,
    validate_user_input, ShopConfig,
};

#[test]
fn valid_signup_reports_success() {
    let config = ShopConfig::default();

    let result = validate_user_input("Damilola", 18, &config.signup);
    assert!(result.to_lowercase().contains("success"));
}

#[test]
fn each_failed_signup_field_is_named() {
    let config = ShopConfig::default();

    // (username, age, fragments the message must contain)
    let cases: &[(&str, i64, &[&str])] = &[
        ("ab", 18, &["invalid username"]),
        ("Dami", 17, &["invalid age"]),
        ("Dami", 101, &["invalid age"]),
        ("", 17, &["invalid username", "invalid age"]),
    ];

    for (username, age, fragments) in cases {
        let result = validate_user_input(username, *age, &config.signup).to_lowercase();
        for fragment in *fragments {
            assert!(
                result.contains(fragment),
                "expected {result:?} to mention {fragment:?}"
            );
        }
    }
}

#[test]
fn overlong_signup_username_is_rejected() {
    let config = ShopConfig::default();
    let username = "A".repeat(256);

    let result = validate_user_input(&username, 18, &config.signup);
    assert!(result.to_lowercase().contains("invalid"));
}

#[test]
fn username_validity_is_inclusive_of_both_bounds() {
    let config = ShopConfig::default();
    let policy = config.username;

    assert!(!is_valid_username(Some(&"d".repeat(policy.min - 1)), &policy));
    assert!(!is_valid_username(Some(&"A".repeat(policy.max + 1)), &policy));
    assert!(is_valid_username(Some(&"A".repeat(policy.min)), &policy));
    assert!(is_valid_username(Some(&"A".repeat(policy.max)), &policy));
    assert!(!is_valid_username(None, &policy));
}

#[test]
fn discount_codes_apply_their_rate() {
    let config = ShopConfig::default();

    assert_eq!(
        calculate_discount(100.0, "SAVE10", &config).value(),
        Some(90.0)
    );
    assert_eq!(
        calculate_discount(100.0, "SAVE20", &config).value(),
        Some(80.0)
    );
    assert_eq!(
        calculate_discount(10.0, "UNKNOWN", &config).value(),
        Some(10.0)
    );
}

#[test]
fn bad_prices_are_reported_as_values() {
    let config = ShopConfig::default();

    for price in [-10.0, f64::NAN, f64::NEG_INFINITY] {
        let result = calculate_discount(price, "SAVE10", &config);
        let message = result.invalid_message().expect("should be invalid");
        assert!(message.to_lowercase().contains("invalid"));
    }
}

#[test]
fn price_range_check_is_inclusive() {
    // (price, expected)
    let cases = [
        (-20.0, false),
        (20.0, false),
        (5.0, true),
        (0.0, true),
        (10.0, true),
    ];

    for (price, expected) in cases {
        assert_eq!(is_price_in_range(price, 0.0, 10.0), expected, "price {price}");
    }
}

#[test]
fn driving_eligibility_follows_the_country_table() {
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
fn unknown_country_is_an_invalid_value() {
    let config = ShopConfig::default();

    let result = can_drive(30, "ZZ", &config);
    assert!(result
        .invalid_message()
        .is_some_and(|m| m.to_lowercase().contains("invalid")));
}

#[test]
fn coupon_table_is_well_formed() {
    let config = ShopConfig::default();
    let coupons = coupons(&config);

    assert!(!coupons.is_empty());
    for coupon in coupons {
        assert!(!coupon.code.is_empty());
        assert!(coupon.discount >= 0.0);
        assert!(coupon.discount < 1.0);
    }
}

#[tokio::test]
async fn feed_resolves_to_a_nonempty_batch() {
    let feed = CannedFeed::default();

    let batch = feed.fetch().await.unwrap();
    assert!(!batch.is_empty());
}
