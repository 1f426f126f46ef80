//! Polish date display format (`DD.MM.YYYY`).

use chrono::NaiveDate;

use super::error::FirmaError;

const PL_DATE_FORMAT: &str = "%d.%m.%Y";
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date the way Polish invoices print it, e.g. `15.06.2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(PL_DATE_FORMAT).to_string()
}

/// Parse a date typed as `DD.MM.YYYY` or sent as ISO `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Result<NaiveDate, FirmaError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, PL_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(input, ISO_DATE_FORMAT))
        .map_err(|_| {
            FirmaError::InvalidDate(format!(
                "'{input}' is neither DD.MM.YYYY nor YYYY-MM-DD"
            ))
        })
}
