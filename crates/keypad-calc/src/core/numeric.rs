//! Display-string numerics: keypad digits, parsing, and formatting
//!
//! The display is text the user builds one key at a time, so it can hold
//! partial or malformed numerals. [`parse_display`] maps anything it does not
//! recognise to NaN rather than failing, and [`format_number`] renders results
//! the way a JavaScript `Number` prints itself (`Infinity`, `NaN`, `1e+21`).

use crate::core::{CalcError, CalcResult};

/// Largest decimal exponent rendered positionally before switching to `e+`
const MAX_POSITIONAL_EXPONENT: i32 = 21;

/// Smallest decimal exponent rendered positionally before switching to `e-`
const MIN_POSITIONAL_EXPONENT: i32 = -6;

/// A single keypad entry: `0`-`9` or the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    /// The decimal point key
    pub const POINT: Self = Self('.');

    /// Creates a digit from a character, `None` unless `0`-`9` or `.`
    #[must_use]
    pub const fn new(c: char) -> Option<Self> {
        if c.is_ascii_digit() || c == '.' {
            Some(Self(c))
        } else {
            None
        }
    }

    /// Creates a numeric digit from its value (0-9)
    #[must_use]
    pub fn from_value(d: u8) -> Option<Self> {
        char::from_digit(u32::from(d), 10).map(Self)
    }

    /// Returns the character appended to the display
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Returns true for the decimal point key
    #[must_use]
    pub const fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        Self::new(c).ok_or(CalcError::InvalidDigit(c))
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses the display text into a number
///
/// Accepts an optional leading `-`, digits with at most one decimal point
/// (not trailing), an optional exponent, and the `Infinity` / `-Infinity`
/// spellings produced by [`format_number`]. Everything else is NaN.
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    match text {
        "Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if is_well_formed(text) {
        text.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn is_well_formed(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once('e') {
        Some((m, e)) => (m, Some(e)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => {
            !frac_part.is_empty() && all_digits(int_part) && all_digits(frac_part)
        }
        None => !mantissa.is_empty() && all_digits(mantissa),
    };

    let exponent_ok = exponent.map_or(true, |e| {
        let digits = e.strip_prefix(|c| c == '+' || c == '-').unwrap_or(e);
        !digits.is_empty() && all_digits(digits)
    });

    mantissa_ok && exponent_ok
}

/// Formats a number for the display
///
/// Uses the shortest digit string that round-trips, positional notation for
/// decimal exponents in `[-7, 21)` and `d.ddde±x` otherwise. Negative zero
/// prints as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits as `d.ddddeN`
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific;
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= MAX_POSITIONAL_EXPONENT {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_POSITIONAL_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if MIN_POSITIONAL_EXPONENT < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", e.abs())
        }
    };

    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Digit tests =====

    #[test]
    fn test_digit_accepts_keypad_chars() {
        for c in "0123456789.".chars() {
            assert_eq!(Digit::new(c).map(Digit::as_char), Some(c));
        }
    }

    #[test]
    fn test_digit_rejects_other_chars() {
        for c in ['a', '+', '-', ' ', 'e', '٣'] {
            assert!(Digit::new(c).is_none(), "{c:?} should be rejected");
        }
    }

    #[test]
    fn test_digit_try_from_error() {
        assert_eq!(Digit::try_from('x'), Err(CalcError::InvalidDigit('x')));
        assert_eq!(Digit::try_from('7'), Ok(Digit::new('7').unwrap()));
    }

    #[test]
    fn test_digit_from_value() {
        assert_eq!(Digit::from_value(0).unwrap().as_char(), '0');
        assert_eq!(Digit::from_value(9).unwrap().as_char(), '9');
        assert!(Digit::from_value(10).is_none());
    }

    #[test]
    fn test_digit_point() {
        assert!(Digit::POINT.is_point());
        assert!(!Digit::from_value(1).unwrap().is_point());
        assert_eq!(Digit::POINT.to_string(), ".");
    }

    // ===== parse_display tests =====

    #[test]
    fn test_parse_integers_and_decimals() {
        assert_eq!(parse_display("0"), 0.0);
        assert_eq!(parse_display("53"), 53.0);
        assert_eq!(parse_display("3.25"), 3.25);
        assert_eq!(parse_display(".5"), 0.5);
        assert_eq!(parse_display("007"), 7.0);
    }

    #[test]
    fn test_parse_negative_and_exponent() {
        assert_eq!(parse_display("-4"), -4.0);
        assert_eq!(parse_display("1e+21"), 1e21);
        assert_eq!(parse_display("1.5e-7"), 1.5e-7);
    }

    #[test]
    fn test_parse_infinity_spellings() {
        assert_eq!(parse_display("Infinity"), f64::INFINITY);
        assert_eq!(parse_display("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_malformed_is_nan() {
        for text in [
            "1.2.3", "5.", ".", "", "-", "NaN", "Infinity5", "NaN7", "1e", "1e+", "inf", "nan",
            "--1", "1-2",
        ] {
            assert!(parse_display(text).is_nan(), "{text:?} should parse to NaN");
        }
    }

    // ===== format_number tests =====

    #[test]
    fn test_format_integers_have_no_fraction() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-20.0), "-20");
        assert_eq!(format_number(123_456_789.0), "123456789");
    }

    #[test]
    fn test_format_zero_and_negative_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_shortest_roundtrip_digits() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.75), "-0.75");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_positional_boundaries() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1e-6), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
    }

    #[test]
    fn test_format_exponent_with_fraction() {
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2.25e30), "-2.25e+30");
    }

    // ===== Property-based tests =====

    proptest! {
        #[test]
        fn prop_format_then_parse_is_identity(x in proptest::num::f64::NORMAL) {
            prop_assert_eq!(parse_display(&format_number(x)), x);
        }

        #[test]
        fn prop_integers_format_like_i64(n in -1_000_000_000i64..1_000_000_000i64) {
            prop_assert_eq!(format_number(n as f64), n.to_string());
        }

        #[test]
        fn prop_digit_strings_parse(s in "[1-9][0-9]{0,12}") {
            prop_assert_eq!(parse_display(&s), s.parse::<f64>().unwrap());
        }
    }
}
