use std::{fmt, str::FromStr};

use alloy_primitives::U256;
use thiserror::Error;

/// A non-negative decimal amount as typed by a user, kept as digit strings so
/// that no precision is lost before it is scaled to base units.
///
/// Thousands separators (`,`) are stripped on parse. The whole part has no
/// leading zeros and the fraction has no trailing zeros.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalAmount {
    whole: String,
    fraction: String,
}

impl DecimalAmount {
    pub fn parse(input: &str) -> Result<Self, UnitsError> {
        let cleaned = strip_thousands(input);
        if cleaned.is_empty() {
            return Err(UnitsError::Empty);
        }

        let (whole, fraction) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(UnitsError::NotANumber(input.to_string()));
        }

        // A second '.' lands in the fraction and fails the digit check.
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(UnitsError::NotANumber(input.to_string()));
        }

        let whole = whole.trim_start_matches('0');
        let fraction = fraction.trim_end_matches('0');

        Ok(Self {
            whole: if whole.is_empty() { "0".to_string() } else { whole.to_string() },
            fraction: fraction.to_string(),
        })
    }

    pub fn is_zero(&self) -> bool {
        self.whole == "0" && self.fraction.is_empty()
    }

    /// Number of significant fractional digits.
    pub fn scale(&self) -> usize {
        self.fraction.len()
    }

    /// Scales the amount by `10^decimals` using integer arithmetic.
    ///
    /// Fractional digits below the smallest unit are floored away.
    pub fn to_base_units(&self, decimals: u8) -> Result<U256, UnitsError> {
        let decimals = decimals as usize;
        let kept = &self.fraction[..self.fraction.len().min(decimals)];

        let mut digits = String::with_capacity(self.whole.len() + decimals);
        digits.push_str(&self.whole);
        digits.push_str(kept);
        digits.extend(std::iter::repeat('0').take(decimals - kept.len()));

        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(U256::ZERO);
        }

        U256::from_str_radix(digits, 10).map_err(|_| UnitsError::Overflow)
    }
}

impl FromStr for DecimalAmount {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fraction.is_empty() {
            write!(f, "{}", self.whole)
        } else {
            write!(f, "{}.{}", self.whole, self.fraction)
        }
    }
}

pub fn strip_thousands(input: &str) -> String {
    input.trim().replace(',', "")
}

/// Converts a user-entered decimal string to base units, flooring any digits
/// below the smallest unit.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, UnitsError> {
    DecimalAmount::parse(amount)?.to_base_units(decimals)
}

/// Renders base units as a decimal string without trailing fractional zeros.
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };

    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Re-applies thousands separators to an amount for display.
pub fn format_thousands(amount: &str) -> String {
    let cleaned = strip_thousands(amount);
    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (cleaned.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("Amount is empty")]
    Empty,
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("Amount does not fit in 256 bits")]
    Overflow,
}
