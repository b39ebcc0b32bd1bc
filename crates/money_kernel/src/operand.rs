//! Operands for the dynamically checked operator surface
//!
//! The `try_*` methods on [`Money`] accept any [`Operand`], so the type of the
//! right-hand side is checked when the operation runs. Handing `21` to
//! `try_gt` does not fail to compile. It returns
//! [`MoneyError::UnsupportedOperatorType`](crate::MoneyError::UnsupportedOperatorType).
//! Statically typed callers can use the `checked_*` methods and the
//! operator traits instead.

use rust_decimal::Decimal;
use std::fmt;

use crate::money::Money;

/// Operators, as named in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Gt,
    Ge,
    Lt,
    Le,
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A value on the other side of a money operator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Money(&'a Money),
    Decimal(Decimal),
    Integer(i128),
    Float(f64),
    Text(&'a str),
}

impl Operand<'_> {
    /// Name of the operand's type, as shown in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Money(_) => "Money",
            Operand::Decimal(_) => "Decimal",
            Operand::Integer(_) => "integer",
            Operand::Float(_) => "float",
            Operand::Text(_) => "string",
        }
    }

    /// True for a numeric zero of any kind; never true for money
    pub fn is_numeric_zero(&self) -> bool {
        match self {
            Operand::Decimal(value) => value.is_zero(),
            Operand::Integer(value) => *value == 0,
            Operand::Float(value) => *value == 0.0,
            Operand::Money(_) | Operand::Text(_) => false,
        }
    }
}

impl<'a> From<&'a Money> for Operand<'a> {
    fn from(money: &'a Money) -> Self {
        Operand::Money(money)
    }
}

impl From<Decimal> for Operand<'_> {
    fn from(value: Decimal) -> Self {
        Operand::Decimal(value)
    }
}

impl From<&Decimal> for Operand<'_> {
    fn from(value: &Decimal) -> Self {
        Operand::Decimal(*value)
    }
}

macro_rules! integer_operand {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Operand<'_> {
                fn from(value: $int) -> Self {
                    Operand::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_operand!(i32, i64, u32, u64);

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(value: &'a str) -> Self {
        Operand::Text(value)
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(value: &'a String) -> Self {
        Operand::Text(value)
    }
}

/// Result of dividing money
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quotient {
    /// Money divided by money of the same currency
    Ratio(Decimal),
    /// Money divided by a decimal scalar
    Money(Money),
}

impl Quotient {
    pub fn into_ratio(self) -> Option<Decimal> {
        match self {
            Quotient::Ratio(ratio) => Some(ratio),
            Quotient::Money(_) => None,
        }
    }

    pub fn into_money(self) -> Option<Money> {
        match self {
            Quotient::Money(money) => Some(money),
            Quotient::Ratio(_) => None,
        }
    }
}
