//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains money invariants.

use money_kernel::{Currency, Money, RoundingConfig, RoundingMode};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating currency labels
///
/// Mostly common codes, with some arbitrary labels since currencies are
/// opaque.
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        4 => prop_oneof![
            Just(Currency::from("EUR")),
            Just(Currency::from("USD")),
            Just(Currency::from("GBP")),
            Just(Currency::from("JPY")),
            Just(Currency::from("CHF")),
        ],
        1 => "[A-Z]{3}".prop_map(Currency::from),
    ]
}

/// Strategy for generating amounts in minor units (cents)
pub fn amount_minor_strategy() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy for generating cent amounts as decimals
pub fn cents_strategy() -> impl Strategy<Value = Decimal> {
    amount_minor_strategy().prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for generating amounts with more digits than cents
pub fn unrounded_amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..8u32)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy for generating Money values (can be negative)
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (cents_strategy(), currency_strategy()).prop_map(|(amount, currency)| {
        Money::new(amount, currency).expect("cent amounts fit the default rounding")
    })
}

/// Strategy for generating EUR Money values
pub fn eur_money_strategy() -> impl Strategy<Value = Money> {
    cents_strategy()
        .prop_map(|amount| Money::new(amount, "EUR").expect("cent amounts fit the default rounding"))
}

/// Strategy for generating decimal scalars for multiplication and division
pub fn scalar_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64, 0u32..4u32).prop_map(|(m, s)| Decimal::new(m, s))
}

/// Strategy for generating non-zero decimal scalars
pub fn non_zero_scalar_strategy() -> impl Strategy<Value = Decimal> {
    scalar_strategy().prop_filter("scalar must be non-zero", |s| !s.is_zero())
}

/// Strategy for generating rounding modes
pub fn rounding_mode_strategy() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::HalfEven),
        Just(RoundingMode::HalfUp),
        Just(RoundingMode::HalfDown),
        Just(RoundingMode::Up),
        Just(RoundingMode::Down),
        Just(RoundingMode::Ceiling),
        Just(RoundingMode::Floor),
    ]
}

/// Strategy for generating rounding configurations
pub fn rounding_config_strategy() -> impl Strategy<Value = RoundingConfig> {
    (0u32..7u32, rounding_mode_strategy())
        .prop_map(|(decimal_places, mode)| RoundingConfig::new(decimal_places, mode))
}

/// Strategy for generating allocation parts (1 to 100)
pub fn allocation_parts_strategy() -> impl Strategy<Value = u32> {
    1u32..100u32
}

/// Strategy for generating allocation weights
pub fn allocation_ratios_strategy(count: usize) -> impl Strategy<Value = Vec<Decimal>> {
    proptest::collection::vec(1u32..1000u32, count..=count)
        .prop_map(|weights| weights.into_iter().map(Decimal::from).collect())
}
