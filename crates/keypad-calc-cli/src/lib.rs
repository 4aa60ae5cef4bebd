//! Keypad Calculator CLI Library
//!
//! Terminal front end for the `keypad-calc` engine: one-shot button
//! presses, a stdin session, a colored keypad view and palette dumps.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)] // String building is clear and correct
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod repl;

pub use commands::{
    Cli, ColorArg, Commands, FrameFormat, PaletteFormat, PressArgs, ReplArgs, ThemeArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{format_frame, Renderer};
