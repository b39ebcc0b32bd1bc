//! Money Kernel - Monetary values with exact decimal arithmetic
//!
//! This crate provides an immutable [`Money`] value: an exact decimal amount
//! paired with an opaque currency label.
//! - Amounts are parsed from text, integers, floats or decimals and quantized
//!   to a configured granularity (cents, half-even by default)
//! - Arithmetic and comparisons refuse to mix currencies
//! - Operands of the wrong type are reported as errors, not coerced
//!
//! ```
//! use money_kernel::{Money, MoneyError};
//! use rust_decimal_macros::dec;
//!
//! let m = Money::new("42", "EUR")?;
//! assert_eq!(m.multiply(dec!(2.124))?, Money::new("89.21", "EUR")?);
//! assert!(m.try_gt(&Money::new(21, "EUR")?)?);
//! assert!(matches!(
//!     m.try_gt(&Money::new(21, "USD")?),
//!     Err(MoneyError::CurrencyMismatch(..))
//! ));
//! # Ok::<(), MoneyError>(())
//! ```

pub mod amount;
pub mod config;
pub mod currency;
pub mod error;
pub mod money;
pub mod operand;
pub mod rounding;

pub use amount::{IntoAmount, RejectedAmount};
pub use currency::Currency;
pub use error::{CoreError, MoneyError};
pub use money::Money;
pub use operand::{Operand, Operator, Quotient};
pub use rounding::{RoundingConfig, RoundingMode};
