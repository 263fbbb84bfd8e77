//! Lenient parsing for the judgment-date and bulletin-number columns.
//!
//! Spreadsheet exports are inconsistent: dates arrive as ISO dates, Brazilian
//! `dd/mm/yyyy`, or full datetimes, and numbers arrive as `123` or `123.0`.
//! Parsing never fails a load. Unparseable values become `None` and the row
//! keeps flowing through the pipeline.

use chrono::NaiveDate;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
];

/// Parse a raw judgment-date cell.
///
/// Tries plain date formats first, then datetime formats (keeping only the
/// date part). Returns `None` for anything unparseable, including empty
/// cells.
pub fn parse_judgment_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Parse a raw bulletin-number cell into its canonical integer form.
///
/// Accepts plain integers and whole-valued floats (`"1043.0"` → `1043`, a
/// common spreadsheet artifact). Anything else, fractional values included,
/// returns `None`, which normalizes to an empty string rather than a zero.
pub fn parse_bulletin_number(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f.is_finite() => Some(f as i64),
        _ => None,
    }
}
