//! Money value type with precise decimal arithmetic
//!
//! A [`Money`] pairs an exact `rust_decimal` amount with a [`Currency`]
//! label. Amounts are quantized on construction (see
//! [`RoundingConfig`]), values never change once built, and every operation
//! that combines two amounts refuses to mix currencies.
//!
//! Binary operations check their operands in a fixed order:
//!
//! 1. the operand type (`UnsupportedOperatorType`),
//! 2. the currency, where both sides are money (`CurrencyMismatch`),
//! 3. then the arithmetic itself (`DivisionByZero`, `Overflow`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::amount::{IntoAmount, RejectedAmount};
use crate::currency::Currency;
use crate::error::MoneyError;
use crate::operand::{Operand, Operator, Quotient};
use crate::rounding::RoundingConfig;

/// A monetary amount with associated currency
///
/// Two values are equal, and hash the same, exactly when amount and
/// currency are equal. There is no ordering across currencies, so `Money`
/// does not implement `PartialOrd`; use [`Money::compare`] or the `try_*`
/// comparisons.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

/// Wire shape of `Money`; decoding runs the normal constructor
#[derive(Deserialize)]
struct MoneyRecord {
    amount: Decimal,
    currency: Currency,
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Money::new(record.amount, record.currency)
    }
}

impl Money {
    /// Creates a Money value rounded with the process-wide default
    ///
    /// The amount may be text, an integer, a float or a `Decimal`.
    ///
    /// # Errors
    ///
    /// * [`MoneyError::InvalidAmount`] if the amount is not a decimal number
    /// * [`MoneyError::Overflow`] if it is too large for a `Decimal` or cannot be
    ///   held at the granularity
    ///
    /// ```
    /// use money_kernel::Money;
    ///
    /// let m = Money::new("42", "EUR").unwrap();
    /// assert_eq!(format!("{m:?}"), r#"Money(amount=42.00, currency="EUR")"#);
    /// ```
    pub fn new(amount: impl IntoAmount, currency: impl Into<Currency>) -> Result<Self, MoneyError> {
        Self::with_rounding(amount, currency, RoundingConfig::global())
    }

    /// Creates a Money value rounded with an explicit configuration
    pub fn with_rounding(
        amount: impl IntoAmount,
        currency: impl Into<Currency>,
        rounding: &RoundingConfig,
    ) -> Result<Self, MoneyError> {
        let amount = amount.into_amount().map_err(|rejected| {
            tracing::debug!(?rejected, "rejected money amount");
            match rejected {
                RejectedAmount::Malformed(input) => MoneyError::invalid_amount(input),
                RejectedAmount::OutOfRange(_) => MoneyError::Overflow,
            }
        })?;

        Ok(Self::from_exact(rounding.quantize(amount)?, currency.into()))
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: impl Into<Currency>) -> Self {
        Self {
            amount: Decimal::new(0, RoundingConfig::global().decimal_places),
            currency: currency.into(),
        }
    }

    /// Wraps an amount that is already at its granularity
    fn from_exact(mut amount: Decimal, currency: Currency) -> Self {
        if amount.is_zero() {
            amount.set_sign_positive(true);
        }
        Self { amount, currency }
    }

    /// Rounding for results kept at `decimal_places`, using the default rule
    fn result_rounding(decimal_places: u32) -> RoundingConfig {
        RoundingConfig::new(decimal_places, RoundingConfig::global().mode)
    }

    /// Builds an arithmetic result at the granularity of its operands
    fn requantize(&self, amount: Option<Decimal>, decimal_places: u32) -> Result<Self, MoneyError> {
        let amount = amount.ok_or(MoneyError::Overflow)?;
        Ok(Self::from_exact(
            Self::result_rounding(decimal_places).quantize(amount)?,
            self.currency.clone(),
        ))
    }

    /// The finer granularity of two amounts
    fn finer_scale(&self, other: &Money) -> u32 {
        self.amount.scale().max(other.amount.scale())
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self::from_exact(self.amount.abs(), self.currency.clone())
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.clone(),
                other.currency.clone(),
            ));
        }
        Ok(())
    }

    /// Structural equality against any operand; false for non-money
    pub fn equals<'a>(&self, other: impl Into<Operand<'a>>) -> bool {
        let other: Operand<'a> = other.into();
        matches!(other, Operand::Money(money) if money == self)
    }

    /// Orders two amounts of the same currency
    pub fn compare(&self, other: &Money) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    fn compare_operand(&self, operator: Operator, other: Operand<'_>) -> Result<Ordering, MoneyError> {
        match other {
            Operand::Money(money) => self.compare(money),
            other => Err(MoneyError::unsupported(operator, other.type_name())),
        }
    }

    /// `self > other`
    pub fn try_gt<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, MoneyError> {
        self.compare_operand(Operator::Gt, other.into())
            .map(Ordering::is_gt)
    }

    /// `self >= other`
    pub fn try_ge<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, MoneyError> {
        self.compare_operand(Operator::Ge, other.into())
            .map(Ordering::is_ge)
    }

    /// `self < other`
    pub fn try_lt<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, MoneyError> {
        self.compare_operand(Operator::Lt, other.into())
            .map(Ordering::is_lt)
    }

    /// `self <= other`
    pub fn try_le<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool, MoneyError> {
        self.compare_operand(Operator::Le, other.into())
            .map(Ordering::is_le)
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        self.requantize(self.amount.checked_add(other.amount), self.finer_scale(other))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        self.requantize(self.amount.checked_sub(other.amount), self.finer_scale(other))
    }

    /// Multiplies by a scalar (e.g., for rate calculations)
    pub fn multiply(&self, factor: Decimal) -> Result<Money, MoneyError> {
        self.requantize(self.amount.checked_mul(factor), self.amount.scale())
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Money, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.requantize(self.amount.checked_div(divisor), self.amount.scale())
    }

    /// Ratio of two amounts in the same currency; not rounded
    pub fn ratio(&self, other: &Money) -> Result<Decimal, MoneyError> {
        self.ensure_same_currency(other)?;
        if other.amount.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_div(other.amount)
            .map(|ratio| ratio.normalize())
            .ok_or(MoneyError::Overflow)
    }

    /// `self + other`, for money operands only
    pub fn try_add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Money, MoneyError> {
        match other.into() {
            Operand::Money(money) => self.checked_add(money),
            other => Err(MoneyError::unsupported(Operator::Add, other.type_name())),
        }
    }

    /// `other + self`
    ///
    /// A numeric zero on the left gives back `self` unchanged, so folds that
    /// start from a literal `0` work. Any other non-money operand fails like
    /// [`Money::try_add`].
    pub fn try_radd<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Money, MoneyError> {
        let other: Operand<'a> = other.into();
        match other {
            other if other.is_numeric_zero() => Ok(self.clone()),
            Operand::Money(money) => money.checked_add(self),
            other => Err(MoneyError::unsupported(Operator::Add, other.type_name())),
        }
    }

    /// `self - other`, for money operands only
    pub fn try_sub<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Money, MoneyError> {
        match other.into() {
            Operand::Money(money) => self.checked_sub(money),
            other => Err(MoneyError::unsupported(Operator::Sub, other.type_name())),
        }
    }

    /// `self * other`, for decimal scalars only
    ///
    /// Integers and floats are refused as well as money.
    pub fn try_mul<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Money, MoneyError> {
        match other.into() {
            Operand::Decimal(factor) => self.multiply(factor),
            other => Err(MoneyError::unsupported(Operator::Mul, other.type_name())),
        }
    }

    /// `other * self`; same as [`Money::try_mul`]
    pub fn try_rmul<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Money, MoneyError> {
        self.try_mul(other)
    }

    /// `self / other`
    ///
    /// Money of the same currency gives a [`Quotient::Ratio`]; a decimal
    /// scalar gives [`Quotient::Money`].
    pub fn try_div<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Quotient, MoneyError> {
        match other.into() {
            Operand::Money(money) => self.ratio(money).map(Quotient::Ratio),
            Operand::Decimal(divisor) => self.divide(divisor).map(Quotient::Money),
            other => Err(MoneyError::unsupported(Operator::Div, other.type_name())),
        }
    }

    /// Sums a sequence the way a generic fold from `0` would
    ///
    /// Returns `None` for an empty sequence, since the starting zero has no
    /// currency.
    pub fn total<I>(items: I) -> Result<Option<Money>, MoneyError>
    where
        I: IntoIterator,
        I::Item: Borrow<Money>,
    {
        items.into_iter().try_fold(None, |sum: Option<Money>, item| {
            let item = item.borrow();
            let next = match sum {
                None => item.try_radd(0)?,
                Some(sum) => sum.try_add(item)?,
            };
            Ok::<_, MoneyError>(Some(next))
        })
    }

    /// Allocates the money into n equal parts, handling remainders
    ///
    /// Works in the smallest unit of the amount's granularity. The remainder
    /// goes one unit at a time to the first parts, so the parts always add
    /// up to the original.
    pub fn allocate(&self, n: u32) -> Result<Vec<Money>, MoneyError> {
        if n == 0 {
            return Err(MoneyError::InvalidAllocation(
                "cannot allocate to zero parts".to_string(),
            ));
        }

        let scale = self.amount.scale();
        let total_minor = self.amount.mantissa();
        let parts = i128::from(n);
        let base = total_minor.div_euclid(parts);
        let remainder = total_minor.rem_euclid(parts);

        Ok((0..parts)
            .map(|i| {
                let minor = if i < remainder { base + 1 } else { base };
                Self::from_exact(
                    Decimal::from_i128_with_scale(minor, scale),
                    self.currency.clone(),
                )
            })
            .collect())
    }

    /// Allocates money according to given ratios
    ///
    /// Returns allocations in the same order as the ratios. The last part
    /// absorbs the rounding remainder.
    pub fn allocate_by_ratios(&self, ratios: &[Decimal]) -> Result<Vec<Money>, MoneyError> {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidAllocation("empty ratios".to_string()));
        }
        if ratios.iter().any(|ratio| ratio.is_sign_negative() && !ratio.is_zero()) {
            return Err(MoneyError::InvalidAllocation("negative ratio".to_string()));
        }

        let total_ratio = ratios
            .iter()
            .try_fold(Decimal::ZERO, |acc, ratio| acc.checked_add(*ratio))
            .ok_or(MoneyError::Overflow)?;
        if total_ratio.is_zero() {
            return Err(MoneyError::InvalidAllocation("total ratio is zero".to_string()));
        }

        let rounding = Self::result_rounding(self.amount.scale());
        let last = ratios.len() - 1;
        let mut allocated = Decimal::ZERO;
        let mut allocations = Vec::with_capacity(ratios.len());

        for (i, ratio) in ratios.iter().enumerate() {
            let share = if i == last {
                self.amount.checked_sub(allocated)
            } else {
                self.amount
                    .checked_mul(*ratio)
                    .and_then(|scaled| scaled.checked_div(total_ratio))
            };

            let share = rounding.quantize(share.ok_or(MoneyError::Overflow)?)?;
            allocated = allocated.checked_add(share).ok_or(MoneyError::Overflow)?;
            allocations.push(Self::from_exact(share, self.currency.clone()));
        }

        Ok(allocations)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Money(amount={}, currency={:?})",
            self.amount,
            self.currency.code()
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl Add for Money {
    type Output = Result<Money, MoneyError>;

    fn add(self, other: Self) -> Self::Output {
        self.checked_add(&other)
    }
}

impl Add<&Money> for &Money {
    type Output = Result<Money, MoneyError>;

    fn add(self, other: &Money) -> Self::Output {
        self.checked_add(other)
    }
}

impl Sub for Money {
    type Output = Result<Money, MoneyError>;

    fn sub(self, other: Self) -> Self::Output {
        self.checked_sub(&other)
    }
}

impl Sub<&Money> for &Money {
    type Output = Result<Money, MoneyError>;

    fn sub(self, other: &Money) -> Self::Output {
        self.checked_sub(other)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money::from_exact(-self.amount, self.currency)
    }
}

impl Neg for &Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money::from_exact(-self.amount, self.currency.clone())
    }
}

impl Mul<Decimal> for Money {
    type Output = Result<Money, MoneyError>;

    fn mul(self, factor: Decimal) -> Self::Output {
        self.multiply(factor)
    }
}

impl Mul<Decimal> for &Money {
    type Output = Result<Money, MoneyError>;

    fn mul(self, factor: Decimal) -> Self::Output {
        self.multiply(factor)
    }
}

impl Mul<Money> for Decimal {
    type Output = Result<Money, MoneyError>;

    fn mul(self, money: Money) -> Self::Output {
        money.multiply(self)
    }
}

impl Mul<&Money> for Decimal {
    type Output = Result<Money, MoneyError>;

    fn mul(self, money: &Money) -> Self::Output {
        money.multiply(self)
    }
}

impl Div<Decimal> for Money {
    type Output = Result<Money, MoneyError>;

    fn div(self, divisor: Decimal) -> Self::Output {
        self.divide(divisor)
    }
}

impl Div<Decimal> for &Money {
    type Output = Result<Money, MoneyError>;

    fn div(self, divisor: Decimal) -> Self::Output {
        self.divide(divisor)
    }
}

impl Div for Money {
    type Output = Result<Decimal, MoneyError>;

    fn div(self, other: Money) -> Self::Output {
        self.ratio(&other)
    }
}

impl Div<&Money> for &Money {
    type Output = Result<Decimal, MoneyError>;

    fn div(self, other: &Money) -> Self::Output {
        self.ratio(other)
    }
}
