//! NIP checksum validation.

use super::format::NIP_LENGTH;
use super::types::{Nip, NipError, ValidationResult};
use crate::core::digits::{digit_values, weighted_mod11};

/// Positional weights for the first nine NIP digits.
pub const NIP_WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

/// Compute the check digit for the first nine digits of a NIP.
///
/// Returns `None` when the weighted sum leaves remainder 10: no tenth
/// digit can complete such a prefix, and NIPs with that remainder are
/// never issued. Also `None` unless exactly nine digits are given.
pub fn nip_check_digit(first_nine: &[u8]) -> Option<u8> {
    if first_nine.len() != NIP_WEIGHTS.len() {
        return None;
    }
    match weighted_mod11(first_nine, &NIP_WEIGHTS) {
        10 => None,
        rem => Some(rem as u8),
    }
}

/// Validate a NIP.
///
/// Separators and other non-digit characters are ignored, but the input
/// must contain exactly ten digits: extra digits are a length error,
/// never silently dropped. Checks run in order:
///
/// 1. exactly ten digits, else [`NipError::WrongLength`]
/// 2. not one digit repeated ten times, else [`NipError::RepeatedDigits`]
/// 3. `Σ digit[i] * NIP_WEIGHTS[i] mod 11` equals the tenth digit, else
///    [`NipError::BadChecksum`] (including the remainder-10 case)
pub fn validate_nip(input: &str) -> Result<Nip, NipError> {
    let digits: [u8; NIP_LENGTH] = digit_values(input)
        .try_into()
        .map_err(|_| NipError::WrongLength)?;

    if digits.iter().all(|&d| d == digits[0]) {
        return Err(NipError::RepeatedDigits);
    }

    match nip_check_digit(&digits[..9]) {
        Some(check) if check == digits[9] => Ok(Nip::from_digits(digits)),
        _ => Err(NipError::BadChecksum),
    }
}

/// [`validate_nip`] flattened into the `{ isValid, errorReason }` shape.
pub fn check_nip(input: &str) -> ValidationResult {
    validate_nip(input).into()
}
