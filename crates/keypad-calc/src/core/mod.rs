//! Core calculator: the single-pending-operation state machine
//!
//! Error prevention: digits and operators are typed values, so the only
//! fallible steps are converting raw keypad input into them.

pub mod engine;
pub mod numeric;
mod operations;

pub use engine::{Calculator, CalculatorState};
pub use numeric::{format_number, parse_display, Digit};
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Arithmetic never fails (division by zero shows `Infinity`), so these only
/// cover invalid input at the typed boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Character is not a keypad digit or decimal point
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),

    /// No keypad button carries this label
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),
}
