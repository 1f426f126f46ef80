//! NIP (Numer Identyfikacji Podatkowej) normalization, formatting,
//! validation, and the field-level validation policy.
//!
//! # Example
//!
//! ```rust
//! use firma::nip::*;
//!
//! let typed = "PL 123-456-32";
//! assert_eq!(normalize_nip(typed), "12345632");
//! assert_eq!(format_nip(typed), "123-456-32");
//!
//! let result = check_nip("1234563218");
//! assert!(result.is_valid);
//! assert_eq!(result.error_reason, ErrorReason::None);
//! ```

mod checksum;
mod field;
mod format;
mod types;

pub use checksum::{NIP_WEIGHTS, check_nip, nip_check_digit, validate_nip};
pub use field::{FieldChange, FieldConfig, NipField, ValidationMode};
pub use format::{NIP_GROUPS, NIP_LENGTH, format_nip, normalize_nip};
pub use types::{ErrorReason, Nip, NipError, ValidationResult};
