//! # Money Objects
//!
//! Monetary values the way the service wires them: decimal strings, never
//! floats. `Money` is the bare `{currency, value}` pair used by balances and
//! fees; `Amount` is the transaction amount with an optional cost breakdown.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base object for all financial value fields (balance, payment due, fees)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Three-letter currency code
    pub currency: String,

    /// Decimal value as a string, e.g. `"100.00"`
    pub value: String,
}

impl Money {
    pub fn new(currency: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

/// Transaction amount with an optional cost breakdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Three-letter currency code
    pub currency: String,

    /// Total charged, as a decimal string
    pub total: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<AmountDetails>,
}

impl Amount {
    pub fn new(currency: impl Into<String>, total: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            total: total.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: AmountDetails) -> Self {
        self.details = Some(details);
        self
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.total, self.currency)
    }
}

/// Itemized breakdown of an `Amount`. The parts must add up to the total
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountDetails {
    pub subtotal: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling_fee: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_discount: Option<String>,
}
