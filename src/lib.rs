//! # firma
//!
//! Polish business identifiers and formats for invoicing front ends:
//! NIP tax IDs, REGON register numbers, PLN amounts, and dates.
//!
//! Every validator is a pure function. Failures are returned as data
//! ([`nip::NipError`], [`regon::RegonError`]) and nothing here panics on
//! user input.
//!
//! ## Quick Start
//!
//! ```rust
//! use firma::nip::*;
//!
//! // Keystroke-by-keystroke display
//! assert_eq!(format_nip("123 456"), "123-456");
//!
//! // Full validation
//! let nip = validate_nip("123-456-32-18").unwrap();
//! assert_eq!(nip.digits(), "1234563218");
//! assert_eq!(nip.vat_id(), "PL1234563218");
//!
//! assert_eq!(validate_nip("1234567890"), Err(NipError::BadChecksum));
//! assert_eq!(validate_nip("1111111111"), Err(NipError::RepeatedDigits));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | NIP validation and field policy, Polish dates, error types |
//! | `regon` | REGON (9/14 digit) validation |
//! | `money` | PLN amount parsing and formatting |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod nip;

#[cfg(feature = "regon")]
pub mod regon;

#[cfg(feature = "money")]
pub mod money;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
