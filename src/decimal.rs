use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::{RateError, Result};

/// parse a user-typed amount with exact decimal parsing
///
/// accepts plain (`"1000.50"`) and scientific (`"1e-9"`) notation, surrounding
/// whitespace is ignored. magnitudes past the decimal range (`"1e30"`) fall
/// back to a float parse, which must still be finite
pub fn parse_amount(field: &str, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let unparsable = || RateError::UnparsableNumber {
        field: field.to_string(),
        input: input.to_string(),
    };

    if trimmed.is_empty() {
        return Err(unparsable());
    }

    let exact = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .and_then(|d| d.to_f64());

    match exact {
        Some(value) => Ok(value),
        None => trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(unparsable),
    }
}

/// parse a whole number of periods
///
/// zero and negative counts parse fine and are reported as invalid input
pub fn parse_periods(field: &str, input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let count: i64 = trimmed.parse().map_err(|_| RateError::UnparsableNumber {
        field: field.to_string(),
        input: input.to_string(),
    })?;

    if count <= 0 {
        return Err(RateError::invalid_input(field, count));
    }

    u32::try_from(count).map_err(|_| RateError::UnparsableNumber {
        field: field.to_string(),
        input: input.to_string(),
    })
}

/// rate as a percentage rounded to `dp` places (e.g. 0.0125 -> 1.25)
///
/// `None` when the percentage does not fit a decimal (non-finite or beyond
/// ~7.9e28)
pub fn percentage(rate: f64, dp: u32) -> Option<Decimal> {
    Decimal::from_f64(rate)?
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|d| d.round_dp(dp).normalize())
}

/// percentage text with a trailing `%`, in float notation when out of decimal range
pub fn format_percentage(rate: f64, dp: u32) -> String {
    match percentage(rate, dp) {
        Some(d) => format!("{d}%"),
        None => format!("{:e}%", rate * 100.0),
    }
}

/// amount that may arrive as a json number or as numeric text
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Self {
        Amount(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = RateError;

    fn from_str(s: &str) -> Result<Self> {
        parse_amount("amount", s).map(Amount)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Amount(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
