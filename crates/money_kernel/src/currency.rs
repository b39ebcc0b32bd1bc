//! Currency labels
//!
//! A currency is an opaque label such as `"EUR"`. Nothing checks it against
//! ISO 4217 or any other list; two labels are the same currency exactly when
//! their text is equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, comparable currency label stored verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency label from any text
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the label as given at construction
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&String> for Currency {
    fn from(code: &String) -> Self {
        Self(code.clone())
    }
}

impl From<&Currency> for Currency {
    fn from(currency: &Currency) -> Self {
        currency.clone()
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Currency {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
