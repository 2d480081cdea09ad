//! Readout and chart label formatting.
//!
//! The currency rule here is shared by the animated readouts and the chart
//! value labels so monetary values look identical on both surfaces.

/// Rendered in place of a numeric readout when the value is unbounded.
pub const INFINITY_SYMBOL: &str = "∞";

/// Format a currency value without cents: sign-aware, thousands-grouped,
/// symbol-prefixed. Negative values carry the minus before the symbol.
///
/// `format_currency(-1234.0)` is `"-$1,234"`.
pub fn format_currency(value: f64) -> String {
    let dollars = value.abs().round() as i64;

    // Add thousands separators
    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let dollars_formatted: String = result.chars().rev().collect();

    if value >= 0.0 {
        format!("${}", dollars_formatted)
    } else {
        format!("-${}", dollars_formatted)
    }
}

/// Format a plain value with one fractional digit and an optional suffix
/// (e.g. `"/100"`, `" months"`, `"%"`).
pub fn format_decimal(value: f64, suffix: &str) -> String {
    format!("{value:.1}{suffix}")
}
