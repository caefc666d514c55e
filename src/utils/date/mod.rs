// Date utility functions
// Months are zero-based (0 = January) throughout, matching CalendarState.

use chrono::{Datelike, NaiveDate};

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

/// Short weekday labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Full English month name for a zero-based month, or `None` if out of range.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month as usize).copied()
}

/// First day of a zero-based month.
pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if month > 11 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1)
}

/// Get the number of days in a given zero-based month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if month > 11 {
        return None;
    }
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month + 1, day).is_some())
}

/// Weekday index of the 1st of the month, 0 = Sunday.
pub fn first_weekday(year: i32, month: u32) -> Option<u32> {
    first_of_month(year, month).map(|d| d.weekday().num_days_from_sunday())
}

/// Shift a zero-based (month, year) pair by `delta` months, rolling the year.
/// `None` if the resulting year does not fit in an `i32`.
pub fn shift_month(month: u32, year: i32, delta: i32) -> Option<(u32, i32)> {
    let total_months = i64::from(year) * 12 + i64::from(month) + i64::from(delta);
    let new_year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let new_month = total_months.rem_euclid(12) as u32;
    Some((new_month, new_year))
}

/// `YYYY-MM-DD`
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
