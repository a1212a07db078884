use chrono::{DateTime, NaiveDate};

const INPUT_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Parses an ISO-8601 date or RFC 3339 timestamp into its calendar date
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, INPUT_FORMAT) {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    // Timestamps without an offset, e.g. "2024-05-01T20:00:00"
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, INPUT_FORMAT).ok())
}

/// Day/month/year rendering; unparseable values are returned unchanged
pub fn display_date(raw: &str) -> String {
    match parse_event_date(raw) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// `YYYY-MM-DD` form accepted by date inputs; unparseable values are returned unchanged
pub fn to_input_date(raw: &str) -> String {
    match parse_event_date(raw) {
        Some(date) => date.format(INPUT_FORMAT).to_string(),
        None => raw.to_string(),
    }
}
