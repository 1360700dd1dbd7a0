//! Display formatting for derived values.
//!
//! Everything here returns plain `String`s ready to bind to a metric card,
//! chart axis, or legend row. en-US conventions throughout.

use chrono::DateTime;
use rust_decimal::{Decimal, RoundingStrategy};

/// Insert thousands separators into an already-formatted number string.
fn group_thousands(s: &str) -> String {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(d) => ("-", d),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Round half away from zero, the way `toFixed` does. `Decimal`'s `Display`
/// precision truncates, so values must be rounded before formatting.
fn round_for_display(value: &Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a price as USD currency with two fixed decimals: `$65,432.10`.
pub fn format_price(amount: &Decimal) -> String {
    let rounded = round_for_display(amount, 2);
    let fixed = format!("{:.2}", rounded.abs());
    let grouped = group_thousands(&fixed);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a signed percentage with two decimals: `+2.50%` / `-1.20%`.
pub fn format_percent(value: &Decimal) -> String {
    format_percent_with(value, 2)
}

/// Format a signed percentage with explicit decimal places.
pub fn format_percent_with(value: &Decimal, decimals: usize) -> String {
    let mut rounded = round_for_display(value, decimals as u32);
    if rounded.is_zero() {
        // A negative value that rounds to zero would render "-0.00".
        rounded = Decimal::ZERO;
    }
    let sign = if rounded.is_sign_negative() { "" } else { "+" };
    format!("{sign}{rounded:.decimals$}%")
}

/// Format a large dollar amount compactly: `$1.2T`, `$34.5B`, `$890.1M`.
pub fn format_compact(value: &Decimal) -> String {
    let trillion = Decimal::from(1_000_000_000_000_i64);
    let billion = Decimal::from(1_000_000_000_i64);
    let million = Decimal::from(1_000_000_i64);

    if *value >= trillion {
        format!("${:.1}T", round_for_display(&(value / trillion), 1))
    } else if *value >= billion {
        format!("${:.1}B", round_for_display(&(value / billion), 1))
    } else if *value >= million {
        format!("${:.1}M", round_for_display(&(value / million), 1))
    } else {
        format!("${}", group_thousands(&value.to_string()))
    }
}

/// Calendar month/day label for a chart axis: `Nov 5`.
///
/// Returns an empty string for timestamps outside chrono's representable
/// range rather than failing.
pub fn format_day_label(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%b %-d").to_string())
        .unwrap_or_default()
}

/// Wall-clock time label: `3:45:12 PM`.
pub fn format_time(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%-I:%M:%S %p").to_string())
        .unwrap_or_default()
}
