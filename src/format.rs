use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::input::{parse_decimal, parse_strict};

const FALLBACK: &str = "0.00";

/// Format an amount as US currency digits: thousands separators and exactly
/// two fraction digits, no symbol. Missing, NaN and zero values give `"0.00"`.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() && v != 0.0 => group_thousands(v),
        _ => FALLBACK.to_string(),
    }
}

/// Format raw field text. Empty text, or text that is not a number as a
/// whole (`"100k"`), gives `"0.00"`.
pub fn format_currency_text(text: &str) -> String {
    if text.is_empty() || parse_strict(text).is_nan() {
        return FALLBACK.to_string();
    }
    format_currency(Some(parse_decimal(text)))
}

fn group_thousands(value: f64) -> String {
    if value.is_infinite() {
        let symbol = if value < 0.0 { "-∞" } else { "∞" };
        return symbol.to_string();
    }

    let fixed = round_cents(value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    if value < 0.0 {
        grouped.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}

/// Round the shortest decimal form of `value` to cents, halves away from zero,
/// so 2.675 becomes 2.68 even though its binary value sits just below.
fn round_cents(value: f64) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(d) => format!(
            "{:.2}",
            d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        Err(_) => format!("{:.2}", value),
    }
}
