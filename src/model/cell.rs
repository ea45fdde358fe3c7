//! Typed display values.
//!
//! A [`Cell`] keeps the parsed value alongside its display form so the
//! summary can add currency amounts while filters and rendering work on the
//! display string.

use chrono::NaiveDate;
use std::fmt;

/// Placeholder shown for missing or unparseable values.
pub const MISSING: &str = "N/A";

/// One normalized field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Text passed through verbatim.
    Text(String),
    /// Whole number.
    Integer(i64),
    /// Finite monetary amount.
    Currency(f64),
    /// Finite percentage, already scaled (35.0 means 35%).
    Percent(f64),
    /// Calendar date.
    Date(NaiveDate),
    /// Absent, null or unparseable source value.
    Missing,
}

impl Cell {
    /// Currency amount, if this is a currency cell.
    pub fn as_currency(&self) -> Option<f64> {
        match self {
            Cell::Currency(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether the source value was unusable.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Integer(value) => write!(f, "{}", value),
            Cell::Currency(value) => f.write_str(&format_currency(*value)),
            Cell::Percent(value) => f.write_str(&format_percent(*value)),
            Cell::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Cell::Missing => f.write_str(MISSING),
        }
    }
}

// ===== Formatting =====

/// Format an amount as US dollars with two decimals and thousands separators.
///
/// Negative amounts keep the sign after the dollar symbol, as the source
/// system prints them: `$-1,200.00`. Half-cent ties round away from zero.
pub fn format_currency(value: f64) -> String {
    let (whole, cents) = round_half_away(value.abs(), 2);
    let negative = value < 0.0 && has_nonzero_digit(&whole, &cents);
    format!(
        "${}{}.{}",
        if negative { "-" } else { "" },
        group_thousands(&whole),
        cents
    )
}

/// Format a percentage with two decimals: `35.00%`.
pub fn format_percent(value: f64) -> String {
    let (whole, fraction) = round_half_away(value.abs(), 2);
    let negative = value < 0.0 && has_nonzero_digit(&whole, &fraction);
    format!("{}{}.{}%", if negative { "-" } else { "" }, whole, fraction)
}

/// Round a non-negative `magnitude` to `places` decimals, ties away from zero.
///
/// Works on the shortest decimal representation of the float, so `25.125`
/// rounds to `25.13` and `1.005` to `1.01`. Returns the integer and
/// fraction digits.
pub fn round_half_away(magnitude: f64, places: usize) -> (String, String) {
    let shortest = magnitude.abs().to_string();
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole.bytes().chain(fraction.bytes()).collect();
    let keep = whole.len() + places;
    let round_up = digits.get(keep).is_some_and(|d| *d >= b'5');
    digits.resize(keep, b'0');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let text = String::from_utf8_lossy(&digits).into_owned();
    (text[..split].to_string(), text[split..].to_string())
}

fn has_nonzero_digit(whole: &str, fraction: &str) -> bool {
    whole.bytes().chain(fraction.bytes()).any(|b| b != b'0')
}

/// Insert `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
