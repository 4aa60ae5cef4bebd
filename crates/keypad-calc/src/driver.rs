//! Headless keypad driver
//!
//! The driver is the UI layer with the pixels taken out: it turns button
//! labels into engine calls, owns the light/dark toggle, and exposes a
//! [`Frame`] a renderer can draw verbatim after every press.

use crate::core::{CalcResult, Calculator, Operation};
use crate::keypad::{Keypad, KeypadAction};
use crate::theme::{Palette, ThemeSet, ThemeVariant};
use serde::Serialize;

/// Abstract driver trait for calculator interactions
///
/// Renderers and test specifications talk to this trait, so the same
/// button sequences can drive any front end.
pub trait CalculatorDriver {
    /// Presses the button with the given label
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Gets the text to render on the display
    fn display(&self) -> String;

    /// Resets the calculator state
    fn clear(&mut self);

    /// Presses every label in order and returns the final display
    ///
    /// Stops at the first unknown label; earlier presses stay applied.
    fn press_all<I, S>(&mut self, labels: I) -> CalcResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Self: Sized,
    {
        for label in labels {
            self.press(label.as_ref())?;
        }
        Ok(self.display())
    }
}

/// Everything a renderer needs to draw one screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Display text
    pub display: String,
    /// Operator awaiting its right operand, if any
    pub pending: Option<Operation>,
    /// Active theme variant
    pub theme: ThemeVariant,
    /// Label next to the theme switch
    pub theme_label: &'static str,
    /// Colors for the active theme
    pub palette: Palette,
}

/// Keypad-backed driver owning the engine and the theme toggle
#[derive(Debug, Clone, Default)]
pub struct KeypadDriver {
    calculator: Calculator,
    keypad: Keypad,
    variant: ThemeVariant,
    themes: ThemeSet,
}

impl KeypadDriver {
    /// Creates a driver with the built-in themes, starting in light mode
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom theme set
    #[must_use]
    pub fn with_themes(mut self, themes: ThemeSet) -> Self {
        self.themes = themes;
        self
    }

    /// Starts in the given theme variant
    #[must_use]
    pub fn with_variant(mut self, variant: ThemeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Applies an already-resolved action
    pub fn press_action(&mut self, action: KeypadAction) {
        action.apply(&mut self.calculator);
    }

    /// Returns the active theme variant
    #[must_use]
    pub fn theme(&self) -> ThemeVariant {
        self.variant
    }

    /// Returns the palette for the active theme
    #[must_use]
    pub fn palette(&self) -> &Palette {
        self.themes.palette(self.variant)
    }

    /// Returns the loaded theme set
    #[must_use]
    pub fn themes(&self) -> &ThemeSet {
        &self.themes
    }

    /// Flips between light and dark, returning the new variant
    ///
    /// Calculator state is untouched.
    pub fn toggle_theme(&mut self) -> ThemeVariant {
        self.set_theme(self.variant.toggled());
        self.variant
    }

    /// Switches to the given variant
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        tracing::info!(from = %self.variant, to = %variant, "theme changed");
        self.variant = variant;
    }

    /// Captures the current screen
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            display: self.calculator.display().to_string(),
            pending: self.calculator.pending_operator(),
            theme: self.variant,
            theme_label: self.variant.label(),
            palette: *self.palette(),
        }
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        let action = match self.keypad.resolve(label) {
            Ok(action) => action,
            Err(e) => {
                tracing::warn!(label, error = %e, "rejected key");
                return Err(e);
            }
        };
        self.press_action(action);
        tracing::debug!(label, display = %self.calculator.display(), "pressed");
        Ok(())
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn clear(&mut self) {
        self.calculator.clear();
    }
}
