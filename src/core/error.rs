use thiserror::Error;

#[cfg(feature = "regon")]
use crate::regon::RegonError;
use crate::nip::NipError;

/// Errors returned by the parsing surfaces of this crate.
///
/// Identifier validators return their own small enums ([`NipError`],
/// `RegonError`); both convert into this type so callers can mix
/// parsers with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FirmaError {
    /// A NIP failed validation.
    #[error("invalid NIP: {0}")]
    Nip(#[from] NipError),

    /// A REGON failed validation.
    #[cfg(feature = "regon")]
    #[error("invalid REGON: {0}")]
    Regon(#[from] RegonError),

    /// A monetary amount could not be parsed.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A date could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}
