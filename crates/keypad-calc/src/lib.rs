//! Keypad Calculator
//!
//! A single-screen calculator engine: digit entry, one pending binary
//! operation at a time, and a light/dark theme toggle. Rendering is left to
//! the caller; the [`driver`] module exposes everything a front end draws.
//!
//! # Design
//!
//! - **Explicit state**: display, accumulator and pending operator live in a
//!   [`CalculatorState`](core::CalculatorState) owned by the engine
//! - **No arithmetic errors**: division by zero shows `Infinity`, malformed
//!   input shows `NaN`
//! - **Typed themes**: a closed set of variants with fully specified palettes
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut driver = KeypadDriver::new();
//! let display = driver.press_all(["2", "+", "3", "x", "4", "="]).unwrap();
//! assert_eq!(display, "20"); // left to right, no precedence
//!
//! driver.toggle_theme();
//! assert_eq!(driver.frame().theme_label, "Dark Mode");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;
pub mod theme;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_number, parse_display, CalcError, CalcResult, Calculator, CalculatorState, Digit,
        Operation,
    };
    pub use crate::driver::{CalculatorDriver, Frame, KeypadDriver};
    pub use crate::keypad::{ButtonStyle, Keypad, KeypadAction, KeypadButton};
    pub use crate::theme::{Color, Palette, ThemeError, ThemeSet, ThemeVariant};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn digit(c: char) -> Digit {
        Digit::new(c).unwrap()
    }

    #[test]
    fn test_prelude_imports() {
        let mut driver = KeypadDriver::new();
        assert_eq!(driver.press_all(["2", "+", "3", "="]).unwrap(), "5");
    }

    #[test]
    fn test_calculator_direct() {
        let mut calc = Calculator::new();
        calc.append_digit(digit('6'));
        calc.select_operator(Operation::Multiply);
        calc.append_digit(digit('7'));
        calc.equals();
        assert_eq!(calc.display(), "42");
    }

    // Scenarios below drive the engine directly, without the keypad

    #[test]
    fn test_digits_concatenate() {
        let mut calc = Calculator::new();
        calc.append_digit(digit('5'));
        calc.append_digit(digit('3'));
        assert_eq!(calc.display(), "53");
    }

    #[test]
    fn test_operator_stashes_display() {
        let mut calc = Calculator::new();
        calc.append_digit(digit('5'));
        calc.select_operator(Operation::Add);
        assert_eq!(calc.accumulator(), Some(5.0));
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_seven_plus_three() {
        let mut calc = Calculator::new();
        calc.append_digit(digit('7'));
        calc.select_operator(Operation::Add);
        calc.append_digit(digit('3'));
        calc.equals();
        assert_eq!(calc.display(), "10");
    }

    #[test]
    fn test_eight_over_zero() {
        let mut calc = Calculator::new();
        calc.append_digit(digit('8'));
        calc.select_operator(Operation::Divide);
        calc.append_digit(digit('0'));
        calc.equals();
        assert_eq!(calc.display(), "Infinity");
    }

    #[test]
    fn test_clear_after_any_state() {
        let mut calc = Calculator::new();
        calc.append_digit(digit('9'));
        calc.select_operator(Operation::Modulo);
        calc.append_digit(digit('4'));
        calc.clear();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.accumulator(), None);
        assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn test_chained_operators() {
        let mut calc = Calculator::new();
        calc.append_digit(digit('2'));
        calc.select_operator(Operation::Add);
        calc.append_digit(digit('3'));
        calc.select_operator(Operation::Multiply);
        calc.append_digit(digit('4'));
        calc.equals();
        assert_eq!(calc.display(), "20");
    }

    #[test]
    fn test_theme_variant_parses_by_name() {
        assert_eq!("DARK".parse::<ThemeVariant>(), Ok(ThemeVariant::Dark));
        assert_eq!(
            "neon".parse::<ThemeVariant>(),
            Err(ThemeError::UnknownVariant("neon".into()))
        );
    }
}
