//! Generic numeric conversion shared by the numeric scalars.
//!
//! Scalar inputs arrive as loosely typed runtime values, so `"3.14"`, `true`
//! and `[7]` all have a numeric reading. This module holds the two primitives
//! the rest of the crate builds on:
//!
//! - [`parse_numeric_string()`] - text to `f64`, yielding `NaN` for anything
//!   that is not a numeric string
//! - [`format_number()`] - `f64` to the shortest text that reads back to the
//!   same number
//!
//! # Examples
//!
//! ```
//! use gql_scalars::number::{format_number, parse_numeric_string};
//!
//! assert_eq!(parse_numeric_string(" 42 "), 42.0);
//! assert_eq!(parse_numeric_string("0x1F"), 31.0);
//! assert!(parse_numeric_string("12abc").is_nan());
//!
//! assert_eq!(format_number(42.0), "42");
//! assert_eq!(format_number(1e21), "1e+21");
//! ```

use std::sync::LazyLock;

use regex::Regex;

static NUMERIC_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[+-]?(?:(?P<inf>Infinity)|(?P<dec>(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?))|0[xX](?P<hex>[0-9a-fA-F]+)|0[oO](?P<oct>[0-7]+)|0[bB](?P<bin>[01]+))$",
    )
    .expect("numeric string pattern is valid")
});

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal pattern is valid")
});

/// Reads plain decimal text, with no surrounding whitespace.
///
/// Unlike [`parse_numeric_string`], words such as `inf`, `NaN` or
/// `Infinity` and radix prefixes are rejected with `None`.
pub fn parse_decimal(text: &str) -> Option<f64> {
    if !DECIMAL.is_match(text) {
        return None;
    }
    text.parse().ok()
}

/// Whitespace and line terminators skipped around a numeric string.
fn is_numeric_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Converts text to a number.
///
/// Surrounding whitespace is ignored and blank text reads as `0`. Signed
/// decimals with optional fraction and exponent, `Infinity`, and unsigned
/// `0x`/`0o`/`0b` integers are accepted. Everything else is `NaN`.
pub fn parse_numeric_string(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_numeric_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }

    let Some(caps) = NUMERIC_STRING.captures(trimmed) else {
        return f64::NAN;
    };

    if caps.name("inf").is_some() {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    if caps.name("dec").is_some() {
        return trimmed.parse::<f64>().unwrap_or(f64::NAN);
    }

    let radix_digits = [("hex", 16), ("oct", 8), ("bin", 2)]
        .into_iter()
        .find_map(|(group, radix)| caps.name(group).map(|m| (m.as_str(), radix)));

    match radix_digits {
        Some((digits, radix)) => digits.chars().fold(0.0, |acc, c| {
            acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
        }),
        None => f64::NAN,
    }
}

/// Renders a number as the shortest text that parses back to it.
///
/// Whole numbers print without a fraction, and exponent notation is used
/// only for magnitudes of `1e21` and above or below `1e-6`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }

    // LowerExp gives the shortest round-trip digits: "-1.2345e3"
    let exp_form = format!("{:e}", n.abs());
    let (mantissa, exponent) = exp_form.split_once('e').unwrap_or((&exp_form, "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n_pos = exponent + 1;
    let sign = if n < 0.0 { "-" } else { "" };

    let body = if k <= n_pos && n_pos <= 21 {
        format!("{}{}", digits, "0".repeat((n_pos - k) as usize))
    } else if 0 < n_pos && n_pos <= 21 {
        let (int_part, frac_part) = digits.split_at(n_pos as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n_pos && n_pos <= 0 {
        format!("0.{}{}", "0".repeat((-n_pos) as usize), digits)
    } else {
        let exp_sign = if n_pos - 1 >= 0 { "+" } else { "-" };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, exp_sign, (n_pos - 1).abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exp_sign, (n_pos - 1).abs())
        }
    };

    format!("{}{}", sign, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_partial_numbers() {
        for text in ["1.2.3", "12px", "--1", "-0x10", "inf", "NaN", "1e", "e5", "."] {
            assert!(parse_numeric_string(text).is_nan(), "expected NaN for {:?}", text);
        }
    }

    #[test]
    fn test_parse_accepts_loose_decimals() {
        assert_eq!(parse_numeric_string("1."), 1.0);
        assert_eq!(parse_numeric_string(".5"), 0.5);
        assert_eq!(parse_numeric_string("+2e3"), 2000.0);
        assert_eq!(parse_numeric_string("\n\t-7 "), -7.0);
        assert_eq!(parse_numeric_string("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_numeric_string("0b101"), 5.0);
        assert_eq!(parse_numeric_string("0o17"), 15.0);
    }

    #[test]
    fn test_decimal_rejects_words_and_radix() {
        for text in ["inf", "-inf", "NaN", "infinity", "Infinity", "0x10", " 1", ""] {
            assert_eq!(parse_decimal(text), None, "expected None for {:?}", text);
        }
        assert_eq!(parse_decimal("1e3"), Some(1000.0));
        assert_eq!(parse_decimal("-0.25"), Some(-0.25));
    }

    #[test]
    fn test_format_switches_to_exponent_form() {
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(-0.0), "0");
    }
}
