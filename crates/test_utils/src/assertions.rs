//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for money values and money errors
//! that give more meaningful messages than standard assertions.

use money_kernel::{Money, MoneyError, Operator};
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money amount sits exactly on the given number of decimal places
pub fn assert_money_quantized(money: &Money, decimal_places: u32) {
    assert_eq!(
        money.amount().scale(),
        decimal_places,
        "Expected {} decimal places, got {:?}",
        decimal_places,
        money
    );
}

/// Asserts that money values sum to a total
///
/// # Panics
///
/// Panics if the parts mix currencies or the sum doesn't equal the total
pub fn assert_money_sum_equals(parts: &[Money], total: &Money) {
    let sum = Money::total(parts)
        .expect("Currency mismatch in sum")
        .unwrap_or_else(|| Money::zero(total.currency()));

    assert_eq!(
        &sum, total,
        "Sum of parts ({:?}) doesn't equal total ({:?})",
        sum, total
    );
}

/// Asserts that a result failed with a currency mismatch
pub fn assert_currency_mismatch<T: std::fmt::Debug>(result: Result<T, MoneyError>) {
    match result {
        Err(MoneyError::CurrencyMismatch(..)) => {}
        other => panic!("Expected CurrencyMismatch, got {:?}", other),
    }
}

/// Asserts that a result failed because the operand type is not supported
/// by `operator`
pub fn assert_unsupported_operator<T: std::fmt::Debug>(
    result: Result<T, MoneyError>,
    operator: Operator,
) {
    match result {
        Err(MoneyError::UnsupportedOperatorType { operator: actual, .. }) => assert_eq!(
            actual, operator,
            "Unsupported operand reported for {} instead of {}",
            actual, operator
        ),
        other => panic!(
            "Expected UnsupportedOperatorType for {}, got {:?}",
            operator, other
        ),
    }
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{eur, usd};
    use rust_decimal_macros::dec;

    #[test]
    fn test_assert_money_approx_eq_passes() {
        assert_money_approx_eq(&eur(dec!(100.01)), &eur(dec!(100.02)), dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_assert_money_approx_eq_currency_mismatch() {
        assert_money_approx_eq(&usd(dec!(100.00)), &eur(dec!(100.00)), dec!(0.01));
    }

    #[test]
    fn test_assert_money_sum_equals() {
        let parts = vec![eur(dec!(33.34)), eur(dec!(33.33)), eur(dec!(33.33))];
        assert_money_sum_equals(&parts, &eur(dec!(100.00)));
    }

    #[test]
    fn test_assert_money_sum_equals_for_no_parts() {
        assert_money_sum_equals(&[], &Money::zero("EUR"));
    }

    #[test]
    fn test_assert_currency_mismatch() {
        assert_currency_mismatch(eur(dec!(1)).checked_add(&usd(dec!(1))));
    }

    #[test]
    #[should_panic(expected = "Expected CurrencyMismatch")]
    fn test_assert_currency_mismatch_fails_on_ok() {
        assert_currency_mismatch(eur(dec!(1)).checked_add(&eur(dec!(1))));
    }

    #[test]
    fn test_assert_unsupported_operator() {
        assert_unsupported_operator(eur(dec!(1)).try_mul(2), Operator::Mul);
    }

    #[test]
    #[should_panic(expected = "instead of")]
    fn test_assert_unsupported_operator_checks_operator() {
        assert_unsupported_operator(eur(dec!(1)).try_mul(2), Operator::Div);
    }

    #[test]
    fn test_assert_macros() {
        let m = assert_ok!(money_kernel::Money::new("1", "EUR"));
        assert_money_quantized(&m, 2);
        assert_err_variant!(m.try_div(0), MoneyError::UnsupportedOperatorType { .. });
    }
}
