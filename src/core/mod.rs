//! Shared building blocks: the crate error type, digit-string helpers,
//! and the Polish date format.

mod dates;
pub mod digits;
mod error;

pub use dates::{format_date, parse_date};
pub use error::*;
