//! keypad-calc: keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc press 7 + 3 =         # prints 10
//! keypad-calc press --trace 8 ÷ 0 = # display after every press
//! keypad-calc repl                  # labels from stdin, line by line
//! keypad-calc --theme dark keypad   # draw the keypad
//! keypad-calc theme --format yaml   # dump the active palette
//! ```

use clap::Parser;
use keypad_calc::driver::CalculatorDriver;
use keypad_calc::theme::ThemeVariant;
use keypad_calc_cli::{
    format_frame, logging, repl, Cli, CliConfig, CliResult, ColorChoice, Commands, FrameFormat,
    PaletteFormat, PressArgs, Renderer, ReplArgs, ThemeArgs, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli);
    logging::init(config.verbosity, config.log_json);

    match cli.command {
        Commands::Press(args) => run_press(&config, &args),
        Commands::Repl(args) => run_repl(&config, &args),
        Commands::Keypad => run_keypad(&config),
        Commands::Theme(args) => run_theme(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_log_json(cli.log_json)
        .with_color(color)
        .with_theme(cli.theme)
        .with_palette(cli.palette.clone())
}

fn run_press(config: &CliConfig, args: &PressArgs) -> CliResult<()> {
    let mut driver = config.driver()?;
    let renderer = Renderer::new(config.color.should_color());

    for label in &args.labels {
        driver.press(label)?;
        if args.trace {
            renderer.line(&format!("{label:>2}  {}", driver.display()))?;
        }
    }

    // the last trace line already shows the final display
    if !args.trace || args.format == FrameFormat::Json {
        renderer.line(&format_frame(&driver.frame(), args.format)?)?;
    }
    Ok(())
}

fn run_repl(config: &CliConfig, args: &ReplArgs) -> CliResult<()> {
    let mut driver = config.driver()?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    repl::run(
        &mut driver,
        args.format,
        stdin.lock(),
        &mut stdout,
        &mut stderr,
    )
}

fn run_keypad(config: &CliConfig) -> CliResult<()> {
    let driver = config.driver()?;
    let renderer = Renderer::new(config.color.should_color());
    renderer.line(&renderer.render_keypad(&driver.frame(), driver.keypad()))
}

fn run_theme(config: &CliConfig, args: &ThemeArgs) -> CliResult<()> {
    let themes = config.themes()?;
    let renderer = Renderer::new(config.color.should_color());
    let palette = themes.palette(config.theme);

    let text = match (args.format, args.all) {
        (PaletteFormat::Text, false) => renderer.render_palette(config.theme, palette),
        (PaletteFormat::Text, true) => [ThemeVariant::Light, ThemeVariant::Dark]
            .into_iter()
            .map(|variant| renderer.render_palette(variant, themes.palette(variant)))
            .collect::<Vec<_>>()
            .join("\n\n"),
        (PaletteFormat::Json, false) => serde_json::to_string_pretty(palette)?,
        (PaletteFormat::Json, true) => themes.to_json()?,
        (PaletteFormat::Yaml, false) => serde_yaml_ng::to_string(palette)?,
        (PaletteFormat::Yaml, true) => themes.to_yaml()?,
    };
    renderer.line(text.trim_end())
}
