//! Day-first date parsing and due-date arithmetic.

use chrono::{Duration, NaiveDate};

use pedidos_model::Cell;

/// Output date format used across both schemas.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const DAY_FIRST_FORMATS: [&str; 6] = [
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d/%m/%y",
    "%Y-%m-%d",
    "%d/%m/%Y %H:%M:%S",
];

/// Parses a date out of free text, day-first formats tried first.
pub fn parse_day_first(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DAY_FIRST_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
        if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Coerces a cell to a date: date/time cells directly, text cells via
/// [`parse_day_first`].
pub fn cell_to_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::DateTime(value) => Some(value.date()),
        Cell::Text(value) => parse_day_first(value),
        _ => None,
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a credit-days count out of payment-terms text.
///
/// A "días" marker extracts the digit run (falling back to
/// `marker_fallback` when it does not parse); otherwise the whole text
/// must be an integer, defaulting to 0.
pub fn credit_days(terms: &str, marker_fallback: i64) -> i64 {
    let lower = terms.to_lowercase();
    if lower.contains("días") || lower.contains("dias") {
        let digits: String = terms.chars().filter(|ch| ch.is_ascii_digit()).collect();
        digits.parse().unwrap_or(marker_fallback)
    } else {
        terms.trim().parse().unwrap_or(0)
    }
}

/// Order date plus credit days, formatted for output.
///
/// An offset that overflows the representable date range degrades to
/// an empty string, like any other per-field anomaly.
pub fn due_from_order(order_date: NaiveDate, days: i64) -> String {
    Duration::try_days(days)
        .and_then(|offset| order_date.checked_add_signed(offset))
        .map(format_date)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_first_variants() {
        let expected = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        assert_eq!(parse_day_first("01/11/2025"), Some(expected));
        assert_eq!(parse_day_first("01-11-2025"), Some(expected));
        assert_eq!(parse_day_first("2025-11-01"), Some(expected));
        assert_eq!(parse_day_first("no es fecha"), None);
    }

    #[test]
    fn credit_days_reads_dias_marker() {
        assert_eq!(credit_days("30 días", 15), 30);
        assert_eq!(credit_days("Pago a 45 dias", 15), 45);
        assert_eq!(credit_days("días", 15), 15);
        assert_eq!(credit_days("20", 15), 20);
        assert_eq!(credit_days("Pago inmediato", 15), 0);
    }

    #[test]
    fn due_date_adds_credit_days() {
        let order = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        assert_eq!(due_from_order(order, 30), "01/12/2025");
        assert_eq!(due_from_order(order, 0), "01/11/2025");
    }

    #[test]
    fn out_of_range_credit_days_degrade_to_empty() {
        let order = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        assert_eq!(due_from_order(order, 200_000_000_000_000), "");
        assert_eq!(due_from_order(order, i64::MAX), "");
        assert_eq!(due_from_order(order, i64::MIN), "");
    }
}
