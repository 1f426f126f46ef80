//! NIP normalization and display grouping.

use crate::core::digits::{digits_only, group};

/// Number of digits in a complete NIP.
pub const NIP_LENGTH: usize = 10;

/// Display grouping `XXX-XXX-XX-XX`.
pub const NIP_GROUPS: [usize; 4] = [3, 3, 2, 2];

/// Strip everything but ASCII digits and keep at most the first ten.
///
/// Total and idempotent: any string is accepted and normalizing an
/// already normalized value returns it unchanged.
pub fn normalize_nip(raw: &str) -> String {
    digits_only(raw, NIP_LENGTH)
}

/// Render a (possibly partial) NIP as `XXX-XXX-XX-XX`.
///
/// The input is normalized first. Hyphens are only inserted once a digit
/// follows them, so the output tracks the value while it is being typed:
/// `"123456"` renders as `"123-456"`, not `"123-456-"`.
pub fn format_nip(input: &str) -> String {
    group(&normalize_nip(input), &NIP_GROUPS, '-')
}
