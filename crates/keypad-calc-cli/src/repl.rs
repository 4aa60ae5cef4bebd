//! Line-oriented keypad session over stdin

use crate::commands::FrameFormat;
use crate::error::CliResult;
use crate::output::format_frame;
use keypad_calc::driver::{CalculatorDriver, KeypadDriver};
use std::io::{BufRead, Write};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    /// Blank line
    Blank,
    /// `theme`: flip light/dark
    ToggleTheme,
    /// `quit` or `exit`
    Quit,
    /// Button labels to press in order
    Press(Vec<&'a str>),
}

impl<'a> ReplCommand<'a> {
    /// Splits a line into a command or a batch of labels
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let labels: Vec<&str> = line.split_whitespace().collect();
        match labels.as_slice() {
            [] => Self::Blank,
            ["theme"] => Self::ToggleTheme,
            ["quit" | "exit"] => Self::Quit,
            _ => Self::Press(labels),
        }
    }
}

/// Runs a session until `quit` or end of input
///
/// Rejected labels are reported on `errors` and the session continues;
/// presses before the bad label on the same line stay applied.
pub fn run<R, W, E>(
    driver: &mut KeypadDriver,
    format: FrameFormat,
    input: R,
    out: &mut W,
    errors: &mut E,
) -> CliResult<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    for line in input.lines() {
        let line = line?;
        match ReplCommand::parse(&line) {
            ReplCommand::Blank => {}
            ReplCommand::Quit => break,
            ReplCommand::ToggleTheme => {
                let variant = driver.toggle_theme();
                writeln!(out, "{}", variant.label())?;
            }
            ReplCommand::Press(labels) => {
                if let Err(e) = driver.press_all(labels) {
                    writeln!(errors, "Error: {e}")?;
                }
                writeln!(out, "{}", format_frame(&driver.frame(), format)?)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
