//! REGON (national business register number) validation.
//!
//! A main business unit has a 9-digit REGON; each local unit gets a
//! 14-digit number that starts with its parent's nine digits.
//!
//! # Example
//!
//! ```rust
//! use firma::regon::*;
//!
//! let regon = validate_regon("123456785").unwrap();
//! assert_eq!(regon.kind(), RegonKind::Short);
//!
//! let local = validate_regon("12345678512347").unwrap();
//! assert_eq!(local.base(), "123456785");
//! ```

mod checksum;

pub use checksum::{
    REGON_LONG_LENGTH, REGON_LONG_WEIGHTS, REGON_SHORT_LENGTH, REGON_SHORT_WEIGHTS, Regon,
    RegonError, RegonKind, normalize_regon, regon_check_digit, validate_regon,
};
