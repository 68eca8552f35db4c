//! Human-readable dates and time spans.

use chrono::{Datelike, NaiveDate};

/// Month abbreviations in the Yale University Library style.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "June", "July", "Aug.", "Sept.", "Oct.", "Nov.", "Dec.",
];

/// Format a date as `<month abbreviation> <year>`, e.g. `Sept. 2021`.
pub fn format_date(date: NaiveDate) -> String {
    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    format!("{} {:04}", month, date.year())
}

/// Describe the time between two dates, e.g. `2 years 5 months`.
///
/// Years are whole 365-day blocks; months are the remaining days divided by 30
/// and rounded half to even. The month count never drops below one, so a span
/// shorter than a month reads `1 month` and an exact number of years still
/// carries `1 month`.
pub fn compute_time_span(start: NaiveDate, end: NaiveDate) -> String {
    let days = (end - start).num_days();

    let years = days.div_euclid(365);
    let months = match round_half_even(days.rem_euclid(365), 30) {
        0 => 1,
        n => n,
    };

    let months = plural(months, "month");
    if years == 0 {
        months
    } else {
        format!("{} {}", plural(years, "year"), months)
    }
}

/// `numerator / denominator` rounded to the nearest integer, ties to even.
fn round_half_even(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    let twice_remainder = 2 * (numerator % denominator);

    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
