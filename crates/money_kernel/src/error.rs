//! Error types for money construction, arithmetic and configuration

use thiserror::Error;

use crate::currency::Currency;
use crate::operand::Operator;

/// Errors that can occur during money operations
///
/// Every variant is a caller error. Matching on `MoneyError` as a whole
/// catches any failure raised by [`Money`](crate::Money); matching on a
/// variant picks out one kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Not possible to create {type_name} with amount {input}")]
    InvalidAmount {
        type_name: &'static str,
        input: String,
    },

    #[error("Not possible to perform operation with different currencies: {0} and {1}")]
    CurrencyMismatch(Currency, Currency),

    #[error("Operator {operator} is not supported for {lhs} and {rhs}")]
    UnsupportedOperatorType {
        operator: Operator,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow during calculation")]
    Overflow,

    #[error("Invalid allocation: {0}")]
    InvalidAllocation(String),
}

impl MoneyError {
    pub(crate) fn invalid_amount(input: impl Into<String>) -> Self {
        MoneyError::InvalidAmount {
            type_name: "Money",
            input: input.into(),
        }
    }

    pub(crate) fn unsupported(operator: Operator, rhs: &'static str) -> Self {
        MoneyError::UnsupportedOperatorType {
            operator,
            lhs: "Money",
            rhs,
        }
    }

    /// Returns true for the three money-specific kinds: invalid amount,
    /// currency mismatch and unsupported operand type
    pub fn is_money_error(&self) -> bool {
        matches!(
            self,
            MoneyError::InvalidAmount { .. }
                | MoneyError::CurrencyMismatch(..)
                | MoneyError::UnsupportedOperatorType { .. }
        )
    }
}

/// Crate-level error type
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}
