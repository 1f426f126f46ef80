use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::checksum::validate_nip;
use super::format::{NIP_GROUPS, NIP_LENGTH};
use crate::core::digits::group;

/// Why a NIP was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NipError {
    /// The input does not contain exactly ten digits.
    #[error("NIP must have exactly 10 digits")]
    WrongLength,
    /// All ten digits are the same (e.g. `1111111111`).
    #[error("NIP must not consist of a single repeated digit")]
    RepeatedDigits,
    /// The tenth digit does not match the weighted checksum.
    #[error("NIP check digit does not match")]
    BadChecksum,
}

/// Error reason in the shape the input field consumes, with `None` for
/// a valid number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorReason {
    #[default]
    None,
    WrongLength,
    RepeatedDigits,
    BadChecksum,
}

impl ErrorReason {
    /// The error this reason stands for; `None` for [`ErrorReason::None`].
    pub fn as_error(self) -> Option<NipError> {
        match self {
            ErrorReason::None => None,
            ErrorReason::WrongLength => Some(NipError::WrongLength),
            ErrorReason::RepeatedDigits => Some(NipError::RepeatedDigits),
            ErrorReason::BadChecksum => Some(NipError::BadChecksum),
        }
    }
}

impl From<NipError> for ErrorReason {
    fn from(err: NipError) -> Self {
        match err {
            NipError::WrongLength => ErrorReason::WrongLength,
            NipError::RepeatedDigits => ErrorReason::RepeatedDigits,
            NipError::BadChecksum => ErrorReason::BadChecksum,
        }
    }
}

/// Flattened validation outcome: `{ "isValid": bool, "errorReason": ... }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_reason: ErrorReason,
}

impl ValidationResult {
    /// Outcome for a valid NIP.
    pub const VALID: Self = Self {
        is_valid: true,
        error_reason: ErrorReason::None,
    };

    /// Outcome for a rejected NIP.
    pub fn invalid(err: NipError) -> Self {
        Self {
            is_valid: false,
            error_reason: err.into(),
        }
    }
}

impl<T> From<Result<T, NipError>> for ValidationResult {
    fn from(result: Result<T, NipError>) -> Self {
        match result {
            Ok(_) => Self::VALID,
            Err(err) => Self::invalid(err),
        }
    }
}

/// A validated NIP.
///
/// Only obtainable through [`validate_nip`] (or `parse` / `FromStr` /
/// deserialization, which all validate), so holding a `Nip` means the
/// number passed the length, repeated-digit and checksum checks.
///
/// Displays as `XXX-XXX-XX-XX`; serializes as the bare ten digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nip([u8; NIP_LENGTH]);

impl Nip {
    pub(crate) fn from_digits(digits: [u8; NIP_LENGTH]) -> Self {
        Self(digits)
    }

    /// Validate `input` (separators allowed) into a `Nip`.
    pub fn parse(input: &str) -> Result<Self, NipError> {
        validate_nip(input)
    }

    /// The ten digits without separators, e.g. `"1234563218"`.
    pub fn digits(&self) -> String {
        self.0.iter().map(|&d| char::from(b'0' + d)).collect()
    }

    /// The digits grouped as `XXX-XXX-XX-XX`.
    pub fn formatted(&self) -> String {
        group(&self.digits(), &NIP_GROUPS, '-')
    }

    /// EU VAT identifier form: `PL` followed by the ten digits.
    pub fn vat_id(&self) -> String {
        format!("PL{}", self.digits())
    }

    /// First three digits, identifying the tax office that issued the number.
    pub fn tax_office_code(&self) -> String {
        self.digits()[..3].to_string()
    }
}

impl fmt::Display for Nip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Nip {
    type Err = NipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_nip(s)
    }
}

impl TryFrom<String> for Nip {
    type Error = NipError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_nip(&value)
    }
}

impl From<Nip> for String {
    fn from(nip: Nip) -> Self {
        nip.digits()
    }
}
