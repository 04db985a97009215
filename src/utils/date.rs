//! Date utilities: snapshot date parsing, month arithmetic, calendar names.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Weekday};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict `YYYY-MM-DD`, used for command line input.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a date as the backend may send it and keep only the calendar day.
///
/// Accepts plain dates, naive date-times (`T` or space separated), RFC 3339
/// and RFC 2822 (`Sat, 01 Aug 2026 00:00:00 GMT`). The time of day and any
/// offset are dropped: the day written in the string is the day returned.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Some(d) = parse_date(s) {
        return Some(d);
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    DateTime::parse_from_rfc2822(s)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Days in a month, `month0` zero-based (0 = January). Proleptic Gregorian.
pub fn days_in_month(year: i32, month0: u32) -> Option<u32> {
    match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => Some(31),
        3 | 5 | 8 | 10 => Some(30),
        1 => Some(if is_leap_year(year) { 29 } else { 28 }),
        _ => None,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// English month name, `month0` zero-based. Out of range gives "".
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("")
}

pub fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Monday of the week containing `date`, `None` past the chrono date range.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))
}

pub fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}
