use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::digits::{digit_values, digits_only, weighted_mod11};

/// Digits in a main-unit REGON.
pub const REGON_SHORT_LENGTH: usize = 9;

/// Digits in a local-unit REGON.
pub const REGON_LONG_LENGTH: usize = 14;

/// Weights for the first eight digits of a 9-digit REGON.
pub const REGON_SHORT_WEIGHTS: [u32; 8] = [8, 9, 2, 3, 4, 5, 6, 7];

/// Weights for the first thirteen digits of a 14-digit REGON.
pub const REGON_LONG_WEIGHTS: [u32; 13] = [2, 4, 8, 5, 0, 9, 7, 3, 6, 1, 2, 4, 8];

/// Why a REGON was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegonError {
    /// Neither 9 nor 14 digits.
    #[error("REGON must have 9 or 14 digits")]
    WrongLength,
    /// The last digit does not match the checksum.
    #[error("REGON check digit does not match")]
    BadChecksum,
    /// A 14-digit REGON whose leading nine digits are not a valid REGON.
    #[error("first 9 digits of a 14-digit REGON are not a valid REGON")]
    BadBaseChecksum,
}

/// 9-digit main unit or 14-digit local unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegonKind {
    Short,
    Long,
}

/// A validated REGON. Serializes as its bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Regon(String);

impl Regon {
    /// Validate `input` (separators allowed) into a `Regon`.
    pub fn parse(input: &str) -> Result<Self, RegonError> {
        validate_regon(input)
    }

    /// The 9 or 14 digits without separators.
    pub fn digits(&self) -> String {
        self.0.clone()
    }

    /// Main unit (9 digits) or local unit (14 digits).
    pub fn kind(&self) -> RegonKind {
        if self.0.len() == REGON_LONG_LENGTH {
            RegonKind::Long
        } else {
            RegonKind::Short
        }
    }

    /// The 9-digit main-unit REGON (the number itself for a short REGON).
    pub fn base(&self) -> &str {
        &self.0[..REGON_SHORT_LENGTH]
    }
}

impl fmt::Display for Regon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Regon {
    type Err = RegonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_regon(s)
    }
}

impl TryFrom<String> for Regon {
    type Error = RegonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_regon(&value)
    }
}

impl From<Regon> for String {
    fn from(regon: Regon) -> Self {
        regon.0
    }
}

/// Strip non-digits and keep at most fourteen digits.
pub fn normalize_regon(raw: &str) -> String {
    digits_only(raw, REGON_LONG_LENGTH)
}

/// Check digit for the leading 8 or 13 digits of a REGON.
///
/// A remainder of 10 maps to check digit 0. Returns `None` for any other
/// prefix length.
pub fn regon_check_digit(prefix: &[u8]) -> Option<u8> {
    let weights: &[u32] = match prefix.len() {
        8 => &REGON_SHORT_WEIGHTS,
        13 => &REGON_LONG_WEIGHTS,
        _ => return None,
    };
    Some((weighted_mod11(prefix, weights) % 10) as u8)
}

fn check_digit_matches(digits: &[u8]) -> bool {
    match digits.split_last() {
        Some((&last, prefix)) => regon_check_digit(prefix) == Some(last),
        None => false,
    }
}

/// Validate a 9- or 14-digit REGON. Separators are ignored.
pub fn validate_regon(input: &str) -> Result<Regon, RegonError> {
    let digits = digit_values(input);
    match digits.len() {
        REGON_SHORT_LENGTH => {}
        REGON_LONG_LENGTH => {
            if !check_digit_matches(&digits[..REGON_SHORT_LENGTH]) {
                return Err(RegonError::BadBaseChecksum);
            }
        }
        _ => return Err(RegonError::WrongLength),
    }

    if !check_digit_matches(&digits) {
        return Err(RegonError::BadChecksum);
    }

    Ok(Regon(
        digits.iter().map(|&d| char::from(b'0' + d)).collect(),
    ))
}
