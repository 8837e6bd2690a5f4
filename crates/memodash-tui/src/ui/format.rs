//! Number formatting for stat cards.

/// Formats a count with thousands separators (e.g. "56,780").
#[must_use]
pub fn format_count(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Formats a decimal with thousands separators and at most three
/// fractional digits, dropping trailing zeros.
#[must_use]
pub fn format_decimal(value: f64) -> String {
    let sign = if is_negative(value) { "-" } else { "" };
    format!("{sign}{}", format_magnitude(value))
}

/// Formats an amount of money (e.g. "$56,780", "-$5").
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let sign = if is_negative(amount) { "-" } else { "" };
    format!("{sign}${}", format_magnitude(amount))
}

/// Formats a percentage (e.g. "12.5%").
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

// From 2^53 on every f64 is a whole number; scaling would only lose digits.
const WHOLE_FROM: f64 = 9_007_199_254_740_992.0;

fn rounded(value: f64) -> f64 {
    let magnitude = value.abs();
    if magnitude >= WHOLE_FROM {
        magnitude
    } else {
        (magnitude * 1000.0).round() / 1000.0
    }
}

// Negative only if something survives rounding, so -0.0001 prints as "0".
fn is_negative(value: f64) -> bool {
    value < 0.0 && rounded(value) > 0.0
}

fn format_magnitude(value: f64) -> String {
    let rounded = rounded(value);
    let whole = group_digits(&format!("{:.0}", rounded.trunc()));
    let fraction = format!("{:.3}", rounded.fract());
    let fraction = fraction
        .trim_start_matches('0')
        .trim_end_matches('0')
        .trim_end_matches('.');
    format!("{whole}{fraction}")
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
