//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use keypad_calc::theme::ThemeVariant;
use std::path::PathBuf;

/// keypad-calc: a keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to stderr as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Starting theme (light, dark)
    #[arg(long, default_value = "light", global = true)]
    pub theme: ThemeVariant,

    /// Palette file (YAML or JSON) with `light` and `dark` sections
    #[arg(long, global = true, env = "KEYPAD_CALC_PALETTE")]
    pub palette: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press buttons in order and print the display
    Press(PressArgs),

    /// Read button labels from stdin, one batch per line
    Repl(ReplArgs),

    /// Draw the keypad and display in the active theme
    Keypad,

    /// Print the active palette
    Theme(ThemeArgs),
}

/// Arguments for the press command
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Button labels: 0-9 . • + - x * / ÷ % = ∞ C √
    #[arg(required = true)]
    pub labels: Vec<String>,

    /// Print the display after every press
    #[arg(long)]
    pub trace: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: FrameFormat,
}

/// Arguments for the repl command
#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Output format after each line
    #[arg(long, default_value = "text")]
    pub format: FrameFormat,
}

/// Arguments for the theme command
#[derive(Args, Debug)]
pub struct ThemeArgs {
    /// Output format
    #[arg(long, default_value = "text")]
    pub format: PaletteFormat,

    /// Print both light and dark palettes
    #[arg(long)]
    pub all: bool,
}

/// How a calculator frame is printed
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameFormat {
    /// Display text only
    #[default]
    Text,
    /// Full frame as JSON
    Json,
}

/// How a palette is printed
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaletteFormat {
    /// Human-readable swatches
    #[default]
    Text,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

/// Color output argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
