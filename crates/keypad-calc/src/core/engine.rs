//! Calculator engine
//!
//! Holds the display text, an optional accumulator (left operand) and an
//! optional pending operator. Every transition is synchronous and infallible;
//! numeric edge cases surface as `Infinity` or `NaN` on the display.

use super::numeric::{format_number, parse_display, Digit};
use super::operations::Operation;
use serde::{Deserialize, Serialize};

/// The display value shown before any input and after a clear
pub const INITIAL_DISPLAY: &str = "0";

/// Engine state: exactly what the display and the pending operation need
///
/// If `pending` is `None`, `accumulator` is `None` as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text currently shown (also the right operand being typed)
    pub display: String,
    /// Left operand of the pending operation
    pub accumulator: Option<f64>,
    /// Operation awaiting its right operand
    pub pending: Option<Operation>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            accumulator: None,
            pending: None,
        }
    }
}

impl CalculatorState {
    /// Returns true if this is the initial (or cleared) state
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.display == INITIAL_DISPLAY && self.accumulator.is_none() && self.pending.is_none()
    }
}

/// Keypad calculator with at most one pending binary operation
///
/// Operators chain left to right with no precedence: `2 + 3 x 4 =` is `20`.
///
/// ```rust
/// use keypad_calc::prelude::*;
///
/// let mut calc = Calculator::new();
/// calc.append_digit(Digit::from_value(7).unwrap());
/// calc.select_operator(Operation::Add);
/// calc.append_digit(Digit::from_value(3).unwrap());
/// calc.equals();
/// assert_eq!(calc.display(), "10");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    /// Creates a calculator showing `0` with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes from a previously captured state
    #[must_use]
    pub fn from_state(state: CalculatorState) -> Self {
        Self { state }
    }

    /// Returns the text to render
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Returns the stashed left operand, if an operation is in progress
    #[must_use]
    pub fn accumulator(&self) -> Option<f64> {
        self.state.accumulator
    }

    /// Returns the operation awaiting its right operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.state.pending
    }

    /// Returns the full state snapshot
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Appends a digit or decimal point
    ///
    /// A display of exactly `0` is replaced rather than extended. Repeated
    /// decimal points are accepted and later parse to NaN.
    pub fn append_digit(&mut self, digit: Digit) {
        if self.state.display == INITIAL_DISPLAY {
            self.state.display = digit.as_char().to_string();
        } else {
            self.state.display.push(digit.as_char());
        }
        tracing::trace!(digit = %digit, display = %self.state.display, "digit appended");
    }

    /// Selects the next operator, resolving any pending one first
    pub fn select_operator(&mut self, op: Operation) {
        let operand = parse_display(&self.state.display);

        match (self.state.accumulator, self.state.pending) {
            (None, _) => {
                self.state.accumulator = Some(operand);
            }
            (Some(acc), Some(pending)) => {
                let result = pending.apply(acc, operand);
                tracing::debug!(%pending, lhs = acc, rhs = operand, result, "chained operation resolved");
                self.state.accumulator = Some(result);
            }
            (Some(_), None) => {}
        }

        self.state.pending = Some(op);
        self.state.display = INITIAL_DISPLAY.to_string();
        tracing::debug!(
            op = %op,
            accumulator = ?self.state.accumulator,
            "operator selected"
        );
    }

    /// Resolves the pending operation onto the display
    ///
    /// A no-op unless both an accumulator and an operator are present.
    pub fn equals(&mut self) {
        let (Some(acc), Some(op)) = (self.state.accumulator, self.state.pending) else {
            tracing::debug!(display = %self.state.display, "equals with nothing pending");
            return;
        };

        let operand = parse_display(&self.state.display);
        let result = op.apply(acc, operand);
        self.state.display = format_number(result);
        self.state.accumulator = None;
        self.state.pending = None;
        tracing::debug!(%op, lhs = acc, rhs = operand, display = %self.state.display, "equals");
    }

    /// Resets to the initial state
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
        tracing::debug!("cleared");
    }
}
