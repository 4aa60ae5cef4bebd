//! Terminal rendering of frames, the keypad and palettes

use crate::commands::FrameFormat;
use crate::error::CliResult;
use console::{style, Style, Term};
use keypad_calc::driver::Frame;
use keypad_calc::keypad::{ButtonStyle, Keypad};
use keypad_calc::theme::{Color, Palette, ThemeVariant};

/// Characters inside the display box
const DISPLAY_WIDTH: usize = 26;

/// Formats a frame for `press` and `repl` output
pub fn format_frame(frame: &Frame, format: FrameFormat) -> CliResult<String> {
    match format {
        FrameFormat::Text => Ok(frame.display.clone()),
        FrameFormat::Json => Ok(serde_json::to_string(frame)?),
    }
}

/// Draws calculator output to stdout
#[derive(Debug)]
pub struct Renderer {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Renderer {
    /// Create a renderer writing to stdout
    #[must_use]
    pub fn new(use_color: bool) -> Self {
        Self {
            term: Term::stdout(),
            use_color,
        }
    }

    /// Writes one line to stdout
    pub fn line(&self, text: &str) -> CliResult<()> {
        self.term.write_line(text)?;
        Ok(())
    }

    /// Foreground/background style from two palette colors
    fn paint(&self, fg: Color, bg: Color) -> Style {
        Style::new()
            .color256(fg.to_ansi256())
            .on_color256(bg.to_ansi256())
            .force_styling(self.use_color)
    }

    /// Display box with the pending operator on the left
    #[must_use]
    pub fn render_display(&self, frame: &Frame) -> String {
        let palette = &frame.palette;
        let pending = frame.pending.map_or(" ", |op| op.symbol());
        let inner = format!(
            " {pending}{:>width$} ",
            frame.display,
            width = DISPLAY_WIDTH - 1
        );
        let border = format!("+{}+", "-".repeat(DISPLAY_WIDTH + 2));
        let body = self.paint(palette.text, palette.background).apply_to(inner);
        format!("{border}\n|{body}|\n{border}")
    }

    /// Full screen: theme label, display and keypad grid
    #[must_use]
    pub fn render_keypad(&self, frame: &Frame, keypad: &Keypad) -> String {
        let mut out = String::new();
        let label = if self.use_color {
            style(frame.theme_label).bold().force_styling(true).to_string()
        } else {
            frame.theme_label.to_string()
        };
        out.push_str(&format!(" {label}\n"));
        out.push_str(&self.render_display(frame));

        for row in keypad.rows() {
            out.push('\n');
            for button in row {
                let fill = button.style.fill(&frame.palette);
                let cell = format!("[{:^5}]", button.label);
                let painted = self.button_style(button.style, fill, &frame.palette);
                out.push_str(&painted.apply_to(cell).to_string());
            }
        }
        out
    }

    fn button_style(&self, kind: ButtonStyle, fill: Color, palette: &Palette) -> Style {
        let base = self.paint(palette.text, fill);
        match kind {
            ButtonStyle::Accent => base.bold(),
            ButtonStyle::Number | ButtonStyle::Faded => base,
        }
    }

    /// Palette as labelled swatches plus the text contrast
    #[must_use]
    pub fn render_palette(&self, variant: ThemeVariant, palette: &Palette) -> String {
        let entries = [
            ("background", palette.background),
            ("text", palette.text),
            ("button", palette.button),
            ("main", palette.main),
            ("faded_button", palette.faded_button),
        ];

        let mut out = format!("{variant} ({})", variant.label());
        for (name, color) in entries {
            let swatch = self.paint(color, color).apply_to("██");
            if self.use_color {
                out.push_str(&format!("\n  {name:<13}{color}  {swatch}"));
            } else {
                out.push_str(&format!("\n  {name:<13}{color}"));
            }
        }

        let verdict = if palette.is_legible() {
            "legible"
        } else {
            "low contrast"
        };
        out.push_str(&format!(
            "\n  {:<13}{:.2}:1 ({verdict})",
            "contrast",
            palette.text_contrast()
        ));
        out
    }
}
