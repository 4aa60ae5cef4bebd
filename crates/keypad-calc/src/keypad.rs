//! Calculator keypad layout
//!
//! Visual feedback: each button carries its label, grid position, and a
//! style role the renderer maps onto the active palette.
//!
//! Layout:
//! ```text
//! [ C ] [ √ ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ x ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ • ] [ ∞ ] [ = ]
//! ```
//!
//! `√` clears and `∞` evaluates, exactly like `C` and `=`.

use crate::core::{CalcError, CalcResult, Calculator, Digit, Operation};
use crate::theme::{Color, Palette};

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// Append a digit or the decimal point
    Digit(Digit),
    /// Select an operator
    Operator(Operation),
    /// Resolve the pending operation
    Equals,
    /// Reset the calculator
    Clear,
}

impl KeypadAction {
    /// Applies this action to the calculator
    pub fn apply(self, calc: &mut Calculator) {
        match self {
            Self::Digit(d) => calc.append_digit(d),
            Self::Operator(op) => calc.select_operator(op),
            Self::Equals => calc.equals(),
            Self::Clear => calc.clear(),
        }
    }
}

/// Which palette color fills a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonStyle {
    /// Digits and the secondary equals key
    Number,
    /// Accent-colored operators and equals
    Accent,
    /// Muted top-row keys
    Faded,
}

impl ButtonStyle {
    /// Fill color for this style
    #[must_use]
    pub const fn fill(self, palette: &Palette) -> Color {
        match self {
            Self::Number => palette.button,
            Self::Accent => palette.main,
            Self::Faded => palette.faded_button,
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text printed on the button
    pub label: &'static str,
    /// Stable identifier for renderers and tests
    pub id: &'static str,
    /// The action this button performs
    pub action: KeypadAction,
    /// Fill role
    pub style: ButtonStyle,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

/// The fixed 5x4 button grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

/// `(label, id, action, style)` in row-major order
type ButtonSpec = (&'static str, &'static str, KeypadAction, ButtonStyle);

const fn digit(c: char) -> KeypadAction {
    match Digit::new(c) {
        Some(d) => KeypadAction::Digit(d),
        None => KeypadAction::Clear,
    }
}

const LAYOUT: [[ButtonSpec; 4]; 5] = {
    use ButtonStyle::{Accent, Faded, Number};
    use KeypadAction::{Clear, Equals, Operator};
    [
        [
            ("C", "btn-clear", Clear, Faded),
            ("√", "btn-sqrt", Clear, Faded),
            ("%", "btn-mod", Operator(Operation::Modulo), Faded),
            ("÷", "btn-divide", Operator(Operation::Divide), Accent),
        ],
        [
            ("7", "btn-7", digit('7'), Number),
            ("8", "btn-8", digit('8'), Number),
            ("9", "btn-9", digit('9'), Number),
            ("x", "btn-times", Operator(Operation::Multiply), Accent),
        ],
        [
            ("4", "btn-4", digit('4'), Number),
            ("5", "btn-5", digit('5'), Number),
            ("6", "btn-6", digit('6'), Number),
            ("-", "btn-minus", Operator(Operation::Subtract), Accent),
        ],
        [
            ("1", "btn-1", digit('1'), Number),
            ("2", "btn-2", digit('2'), Number),
            ("3", "btn-3", digit('3'), Number),
            ("+", "btn-plus", Operator(Operation::Add), Accent),
        ],
        [
            ("0", "btn-0", digit('0'), Number),
            ("•", "btn-decimal", KeypadAction::Digit(Digit::POINT), Number),
            ("∞", "btn-infinity", Equals, Number),
            ("=", "btn-equals", Equals, Accent),
        ],
    ]
};

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = LAYOUT
            .iter()
            .enumerate()
            .flat_map(|(row, specs)| {
                specs
                    .iter()
                    .enumerate()
                    .map(move |(col, &(label, id, action, style))| KeypadButton {
                        label,
                        id,
                        action,
                        style,
                        row,
                        col,
                    })
            })
            .collect();

        Self {
            buttons,
            rows: LAYOUT.len(),
            cols: LAYOUT[0].len(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Iterates the grid one row at a time
    pub fn rows(&self) -> impl Iterator<Item = &[KeypadButton]> {
        self.buttons.chunks(self.cols)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by its printed label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.label == label)
    }

    /// Finds a button by identifier
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Resolves a label or keyboard key to an action
    ///
    /// Button labels win; otherwise ASCII spellings such as `*`, `/`, `.`,
    /// `Enter` and `Escape` are accepted.
    pub fn resolve(&self, key: &str) -> CalcResult<KeypadAction> {
        self.find_button_by_label(key)
            .map(|b| b.action)
            .or_else(|| Self::key_to_action(key))
            .ok_or_else(|| CalcError::UnknownButton(key.to_string()))
    }

    /// Maps a keyboard key to a keypad action
    #[must_use]
    pub fn key_to_action(key: &str) -> Option<KeypadAction> {
        match key {
            "." => Some(KeypadAction::Digit(Digit::POINT)),
            "Enter" => Some(KeypadAction::Equals),
            "Escape" | "c" => Some(KeypadAction::Clear),
            _ => {
                let mut chars = key.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return None;
                };
                Digit::try_from(c)
                    .map(KeypadAction::Digit)
                    .ok()
                    .or_else(|| Operation::from_symbol(c).map(KeypadAction::Operator))
            }
        }
    }
}
