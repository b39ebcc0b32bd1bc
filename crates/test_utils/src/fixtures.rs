//! Pre-built Test Fixtures
//!
//! Provides ready-to-use money values. Amounts are rounded with the
//! process-wide default, so these are cents unless a test binary installs
//! something else.

use money_kernel::{Money, RoundingConfig, RoundingMode};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Creates a EUR amount
pub fn eur(amount: Decimal) -> Money {
    Money::new(amount, "EUR").expect("fixture amount must fit the default rounding")
}

/// Creates a USD amount
pub fn usd(amount: Decimal) -> Money {
    Money::new(amount, "USD").expect("fixture amount must fit the default rounding")
}

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The answer, in euros
    pub fn eur_42() -> Money {
        eur(dec!(42))
    }

    /// Half of `eur_42`
    pub fn eur_21() -> Money {
        eur(dec!(21))
    }

    /// Same amount as `eur_42` in another currency
    pub fn usd_42() -> Money {
        usd(dec!(42))
    }

    /// A zero amount
    pub fn eur_zero() -> Money {
        Money::zero("EUR")
    }

    /// A negative amount for refund scenarios
    pub fn eur_refund() -> Money {
        eur(dec!(-50.00))
    }
}

/// Fixture for rounding configurations
pub struct RoundingFixtures;

impl RoundingFixtures {
    /// Tenths of a cent, half-even
    pub fn mills() -> RoundingConfig {
        RoundingConfig::new(3, RoundingMode::HalfEven)
    }

    /// Whole units, truncating
    pub fn whole_units_truncated() -> RoundingConfig {
        RoundingConfig::new(0, RoundingMode::Down)
    }
}
