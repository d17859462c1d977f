//! en-US display formatting for money and dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::*;
use rusty_money::{iso, Money};
use tracing::warn;

/// Average shown when there are no donors to divide by.
pub const ZERO_CURRENCY: &str = "$0.00";

/// Shown in place of a timestamp that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats an amount as US dollars with two fraction digits, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let Some(decimal) = Decimal::from_f64(amount) else {
        warn!("Amount {} cannot be represented as a decimal", amount);
        let sign = if amount < 0.0 { "-" } else { "" };
        return group_thousands(&format!("{}${:.2}", sign, amount.abs()));
    };

    // Fix the scale so the minor units are always printed.
    let mut cents = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);

    let formatted = group_thousands(&Money::from_decimal(cents, iso::USD).to_string());
    // Money drops the sign once a negative amount rounds to zero.
    if cents.is_zero() && amount < 0.0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Regroups the integer digits of a formatted amount in threes.
///
/// `Money` stops inserting separators past the billions, so its grouping is
/// discarded and rebuilt.
fn group_thousands(formatted: &str) -> String {
    let Some(start) = formatted.find(|c: char| c.is_ascii_digit()) else {
        return formatted.to_string();
    };
    let end = formatted[start..]
        .find(|c: char| !(c.is_ascii_digit() || c == ','))
        .map_or(formatted.len(), |offset| start + offset);

    let digits: Vec<char> = formatted[start..end]
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    format!("{}{}{}", &formatted[..start], grouped, &formatted[end..])
}

/// Formats an ISO-8601 timestamp as an en-US date, e.g. `3/5/2024`.
///
/// The calendar date is taken in the timestamp's own offset. Anything unparseable
/// becomes [`INVALID_DATE`].
pub fn format_date(timestamp: &str) -> String {
    match parse_date(timestamp) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => {
            warn!("Unparseable donation timestamp: {:?}", timestamp);
            INVALID_DATE.to_string()
        }
    }
}

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    let timestamp = timestamp.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(date_time.date_naive());
    }

    // `%#z` takes +hh, +hhmm and +hh:mm but not the Zulu suffix.
    let zoned = match timestamp.strip_suffix(['Z', 'z']) {
        Some(local) => format!("{}+00:00", local),
        None => timestamp.to_string(),
    };
    if let Some(date_time) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&zoned, format).ok())
    {
        return Some(date_time.date_naive());
    }

    if let Some(date_time) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(timestamp, format).ok())
    {
        return Some(date_time.date());
    }
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok()
}
