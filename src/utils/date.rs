//! Date helpers shared by the CLI and the request models.

use chrono::{DateTime, NaiveDate};
use serde::Serializer;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Wire format expected by the backend: YYYY-MM-DD
pub fn to_api_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Human format: 05 Mar 2025
pub fn display_date(d: &NaiveDate) -> String {
    d.format("%d %b %Y").to_string()
}

/// Human rendering of an RFC 3339 timestamp; anything else is returned as-is.
pub fn display_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%d %b %Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// First and last day of the month containing `d`.
pub fn month_bounds(d: &NaiveDate) -> (NaiveDate, NaiveDate) {
    use chrono::Datelike;
    let first = d.with_day(1).unwrap_or(*d);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_month.and_then(|n| n.pred_opt()).unwrap_or(first);
    (first, last)
}

pub fn serialize_api_date<S>(d: &NaiveDate, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&to_api_date(d))
}
