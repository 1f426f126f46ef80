//! PLN amounts for currency inputs: lenient parsing of what users type
//! and `pl-PL` display formatting.
//!
//! All amounts are [`rust_decimal::Decimal`], never floating point.
//!
//! # Example
//!
//! ```rust
//! use firma::money::*;
//! use rust_decimal::Decimal;
//!
//! let amount = parse_amount("1 234,5 zł").unwrap();
//! assert_eq!(amount, Decimal::new(12345, 1));
//! assert_eq!(format_amount(amount), "1234,50");
//! ```

mod amount;

pub use amount::{CURRENCY_SYMBOL, GROUP_SEPARATOR, format_amount, format_pln, parse_amount};
