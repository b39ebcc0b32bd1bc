//! Rounding configuration for monetary amounts
//!
//! Every `Money` amount is quantized to a granularity (a number of decimal
//! places) with a rounding rule. The defaults are two decimal places and
//! round-half-to-even, so `10.005` becomes `10.00` and `10.015` becomes
//! `10.02`.
//!
//! A configuration can be passed explicitly to
//! [`Money::with_rounding`](crate::Money::with_rounding), or installed once as
//! the process-wide default used by [`Money::new`](crate::Money::new).
//! Arithmetic results keep the granularity of their operands (the finer one
//! for two amounts) and round with the default's rule. The default can only
//! be installed before it is first read; after that it never changes, so
//! reading it from many threads is safe.

use once_cell::sync::OnceCell;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::amount::parse_decimal;
use crate::error::{CoreError, MoneyError};

/// Largest number of decimal places a `Decimal` can hold
pub const MAX_DECIMAL_PLACES: u32 = 28;

static DEFAULT_ROUNDING: OnceCell<RoundingConfig> = OnceCell::new();

/// Rule applied when an amount has more digits than the granularity allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties go to the even neighbour (banker's rounding)
    #[default]
    HalfEven,
    /// Ties go away from zero
    HalfUp,
    /// Ties go towards zero
    HalfDown,
    /// Always away from zero
    Up,
    /// Always towards zero (truncation)
    Down,
    /// Always towards positive infinity
    Ceiling,
    /// Always towards negative infinity
    Floor,
}

impl RoundingMode {
    /// Returns the matching rust_decimal strategy
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }
}

/// Granularity and rounding rule applied when constructing money
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundingConfig {
    /// Number of decimal places kept (2 means cents)
    pub decimal_places: u32,
    /// Rule applied to the digits beyond `decimal_places`
    pub mode: RoundingMode,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            mode: RoundingMode::HalfEven,
        }
    }
}

impl RoundingConfig {
    /// Creates a configuration with the given granularity and rule
    pub const fn new(decimal_places: u32, mode: RoundingMode) -> Self {
        Self {
            decimal_places,
            mode,
        }
    }

    /// Creates a half-even configuration from a cent factor such as `".01"`
    ///
    /// The granularity is the exponent of the factor as written, the same
    /// way a decimal quantizer reads it: `".001"` keeps three places and
    /// `"1"` keeps none.
    pub fn from_cent_factor(factor: &str) -> Result<Self, CoreError> {
        let parsed = parse_decimal(factor)
            .map_err(|_| CoreError::configuration(format!("invalid cent factor: {factor}")))?;
        if parsed <= Decimal::ZERO {
            return Err(CoreError::configuration(format!(
                "cent factor must be positive, got {factor}"
            )));
        }

        let config = Self::new(parsed.scale(), RoundingMode::HalfEven);
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy using a different rounding rule
    pub fn with_mode(self, mode: RoundingMode) -> Self {
        Self { mode, ..self }
    }

    /// Returns the smallest representable step, e.g. `0.01`
    pub fn cent_factor(&self) -> Decimal {
        Decimal::new(1, self.decimal_places)
    }

    /// Checks that the granularity fits in a `Decimal`
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(CoreError::configuration(format!(
                "decimal_places must be at most {MAX_DECIMAL_PLACES}, got {}",
                self.decimal_places
            )));
        }
        Ok(())
    }

    /// Rounds `value` to the granularity and pads it to exactly
    /// `decimal_places` digits, so `42` becomes `42.00`
    ///
    /// Fails with [`MoneyError::Overflow`] when the value is too large to be
    /// held at this granularity.
    pub fn quantize(&self, value: Decimal) -> Result<Decimal, MoneyError> {
        let mut quantized = value.round_dp_with_strategy(self.decimal_places, self.mode.strategy());
        quantized.rescale(self.decimal_places);
        if quantized.scale() != self.decimal_places {
            return Err(MoneyError::Overflow);
        }
        if quantized.is_zero() {
            quantized.set_sign_positive(true);
        }

        if quantized != value {
            tracing::trace!(%value, %quantized, mode = ?self.mode, "amount rounded to granularity");
        }
        Ok(quantized)
    }

    /// Returns the process-wide default, initialising it to
    /// [`RoundingConfig::default`] if nothing was installed
    pub fn global() -> &'static RoundingConfig {
        DEFAULT_ROUNDING.get_or_init(RoundingConfig::default)
    }

    /// Installs this configuration as the process-wide default
    ///
    /// Must happen before the first `Money` is built with the default (or
    /// [`RoundingConfig::global`] is read). Later calls are refused and leave
    /// the existing default in place.
    pub fn install(self) -> Result<(), CoreError> {
        self.validate()?;
        if let Err(rejected) = DEFAULT_ROUNDING.set(self) {
            tracing::warn!(
                ?rejected,
                current = ?Self::global(),
                "default rounding is already initialised"
            );
            return Err(CoreError::configuration(
                "default rounding is already initialised",
            ));
        }

        tracing::info!(
            decimal_places = self.decimal_places,
            mode = ?self.mode,
            "installed default rounding"
        );
        Ok(())
    }
}
