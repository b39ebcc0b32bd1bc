//! Tests for money_kernel error types

use money_kernel::error::CoreError;
use money_kernel::{Currency, Money, MoneyError, Operator};

#[test]
fn test_core_error_from_money_error() {
    let money_error = MoneyError::CurrencyMismatch(Currency::from("USD"), Currency::from("EUR"));
    let core_error: CoreError = money_error.into();

    assert!(matches!(core_error, CoreError::Money(_)));
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("Missing config");

    match error {
        CoreError::Configuration(msg) => assert_eq!(msg, "Missing config"),
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_core_error_display() {
    let error: CoreError = MoneyError::DivisionByZero.into();
    assert_eq!(error.to_string(), "Money error: Division by zero");
}

#[test]
fn test_currency_mismatch_display() {
    let error = MoneyError::CurrencyMismatch(Currency::from("EUR"), Currency::from("USD"));
    assert_eq!(
        error.to_string(),
        "Not possible to perform operation with different currencies: EUR and USD"
    );
}

#[test]
fn test_money_error_kinds_share_a_category() {
    let invalid = Money::new("9,231", "EUR").unwrap_err();
    let mismatch = MoneyError::CurrencyMismatch(Currency::from("EUR"), Currency::from("USD"));
    let unsupported = MoneyError::UnsupportedOperatorType {
        operator: Operator::Mul,
        lhs: "Money",
        rhs: "integer",
    };

    for error in [&invalid, &mismatch, &unsupported] {
        assert!(error.is_money_error());
    }
    assert!(!MoneyError::DivisionByZero.is_money_error());
    assert!(!MoneyError::Overflow.is_money_error());
}

#[test]
fn test_money_errors_are_distinguishable() {
    let errors = [
        Money::new("9,231", "EUR").unwrap_err(),
        Money::new(1, "EUR").unwrap().checked_add(&Money::new(1, "USD").unwrap()).unwrap_err(),
        Money::new(1, "EUR").unwrap().try_mul(2).unwrap_err(),
    ];

    assert!(matches!(errors[0], MoneyError::InvalidAmount { .. }));
    assert!(matches!(errors[1], MoneyError::CurrencyMismatch(..)));
    assert!(matches!(errors[2], MoneyError::UnsupportedOperatorType { .. }));
}
