use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::FirmaError;

/// Thousands separator used by `pl-PL` (no-break space).
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Symbol appended by [`format_pln`].
pub const CURRENCY_SYMBOL: &str = "zł";

const MAX_FRACTION_DIGITS: usize = 2;

/// Integer parts shorter than this are not grouped (`1234,00`, `12 345,00`).
const MIN_GROUPED_DIGITS: usize = 5;

/// Parse an amount as a user would type it.
///
/// Accepts whitespace grouping (including no-break spaces), a single `,`
/// or `.` decimal separator, a leading `-`, and an optional `zł` / `PLN`
/// suffix. At most two fraction digits.
pub fn parse_amount(input: &str) -> Result<Decimal, FirmaError> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_suffix(CURRENCY_SYMBOL)
        .or_else(|| trimmed.strip_suffix("PLN"))
        .unwrap_or(trimmed);

    let mut negative = false;
    let mut int_part = String::new();
    let mut frac_part: Option<String> = None;

    for c in body.chars() {
        match c {
            '0'..='9' => match frac_part.as_mut() {
                Some(frac) => frac.push(c),
                None => int_part.push(c),
            },
            ',' | '.' => {
                if frac_part.is_some() {
                    return Err(FirmaError::InvalidAmount(format!(
                        "'{input}' has more than one decimal separator"
                    )));
                }
                frac_part = Some(String::new());
            }
            '-' if !negative && int_part.is_empty() && frac_part.is_none() => negative = true,
            c if c.is_whitespace() => {}
            other => {
                return Err(FirmaError::InvalidAmount(format!(
                    "unexpected character '{other}' in '{input}'"
                )));
            }
        }
    }

    let frac = frac_part.unwrap_or_default();
    if int_part.is_empty() && frac.is_empty() {
        return Err(FirmaError::InvalidAmount(format!("'{input}' contains no digits")));
    }
    if frac.len() > MAX_FRACTION_DIGITS {
        return Err(FirmaError::InvalidAmount(format!(
            "'{input}' has more than {MAX_FRACTION_DIGITS} fraction digits"
        )));
    }

    let literal = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_part.is_empty() { "0" } else { int_part.as_str() },
        if frac.is_empty() { "0" } else { frac.as_str() },
    );
    Decimal::from_str(&literal).map_err(|e| FirmaError::InvalidAmount(format!("'{input}': {e}")))
}

/// Format an amount with two decimals the way `pl-PL` displays it.
///
/// Rounds half away from zero. Uses a comma decimal separator and groups
/// thousands with [`GROUP_SEPARATOR`] once the integer part has five or
/// more digits.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(
        MAX_FRACTION_DIGITS as u32,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{sign}{},{frac}", group_thousands(int_part))
}

/// [`format_amount`] followed by a no-break space and `zł`.
pub fn format_pln(amount: Decimal) -> String {
    format!("{}{GROUP_SEPARATOR}{CURRENCY_SYMBOL}", format_amount(amount))
}

fn group_thousands(int_part: &str) -> String {
    if int_part.len() < MIN_GROUPED_DIGITS {
        return int_part.to_string();
    }
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 * 2);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}
