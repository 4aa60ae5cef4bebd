//! Light/dark themes with typed color palettes
//!
//! A theme is one of a closed set of variants, each mapped to a [`Palette`]
//! with a fixed set of named colors. Palettes loaded from JSON or YAML must
//! name every color; missing or unknown fields are rejected at load time.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Minimum contrast ratio for large text (WCAG 2.1 AA)
pub const MIN_CONTRAST_LARGE: f32 = 3.0;

/// Errors raised while resolving or loading themes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// Color string is not `#rgb` or `#rrggbb`
    #[error("Invalid color {0:?}: expected #rgb or #rrggbb")]
    InvalidColor(String),

    /// Theme name is not a known variant
    #[error("Unknown theme {0:?}: expected light or dark")]
    UnknownVariant(String),

    /// Palette document failed to parse (includes missing fields)
    #[error("Invalid palette: {0}")]
    Parse(String),

    /// Palette file could not be read
    #[error("Failed to read palette {path}: {message}")]
    Io {
        /// File that failed
        path: String,
        /// Underlying I/O error
        message: String,
    },
}

/// Color represented as RGB values, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    /// Create a new color
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from hex value (e.g., 0xF8970A)
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Parses `#rgb` or `#rrggbb` (case-insensitive)
    pub fn parse_hex(text: &str) -> Result<Self, ThemeError> {
        let invalid = || ThemeError::InvalidColor(text.to_string());
        let hex = text.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

        match hex.len() {
            // Each nibble doubles: #f80 -> #ff8800
            3 => {
                let r = (value >> 8) & 0xF;
                let g = (value >> 4) & 0xF;
                let b = value & 0xF;
                Ok(Self::from_hex(
                    ((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11),
                ))
            }
            6 => Ok(Self::from_hex(value)),
            _ => Err(invalid()),
        }
    }

    /// Get the relative luminance (per WCAG 2.1)
    #[must_use]
    pub fn relative_luminance(&self) -> f32 {
        let r = srgb_to_linear(f32::from(self.r) / 255.0);
        let g = srgb_to_linear(f32::from(self.g) / 255.0);
        let b = srgb_to_linear(f32::from(self.b) / 255.0);

        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Calculate contrast ratio with another color
    #[must_use]
    pub fn contrast_ratio(&self, other: &Self) -> f32 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();

        let lighter = l1.max(l2);
        let darker = l1.min(l2);

        (lighter + 0.05) / (darker + 0.05)
    }

    /// Nearest xterm-256 palette index (6x6x6 cube or grayscale ramp)
    #[must_use]
    pub fn to_ansi256(&self) -> u8 {
        let (r, g, b) = (self.r, self.g, self.b);
        if r == g && g == b {
            return match r {
                0..=7 => 16,
                249..=255 => 231,
                v => 232 + ((u16::from(v) - 8) / 10).min(23) as u8,
            };
        }
        let level = |c: u8| -> u8 {
            if c < 48 {
                0
            } else if c < 115 {
                1
            } else {
                ((u16::from(c) - 35) / 40) as u8
            }
        };
        16 + 36 * level(r) + 6 * level(g) + level(b)
    }
}

fn srgb_to_linear(value: f32) -> f32 {
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// The named colors a theme supplies to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    /// Screen background
    #[serde(alias = "BACKGROUND_COLOR")]
    pub background: Color,
    /// Display and button label text
    #[serde(alias = "TEXT_COLOR")]
    pub text: Color,
    /// Digit button fill
    #[serde(alias = "BUTTON_COLOR")]
    pub button: Color,
    /// Accent: operator buttons and the theme switch
    #[serde(alias = "MAIN_COLOR")]
    pub main: Color,
    /// Secondary buttons (clear, modulo)
    #[serde(alias = "FADED_BUTTON_COLOR")]
    pub faded_button: Color,
}

impl Palette {
    /// Built-in light palette
    pub const LIGHT: Self = Self {
        background: Color::from_hex(0xF1F2F3),
        text: Color::from_hex(0x222222),
        button: Color::from_hex(0xFFFFFF),
        main: Color::from_hex(0xF8970A),
        faded_button: Color::from_hex(0xD2D3DA),
    };

    /// Built-in dark palette
    pub const DARK: Self = Self {
        background: Color::from_hex(0x17171C),
        text: Color::from_hex(0xFFFFFF),
        button: Color::from_hex(0x2E2F38),
        main: Color::from_hex(0xF8970A),
        faded_button: Color::from_hex(0x4E505F),
    };

    /// Contrast of label text against digit buttons
    #[must_use]
    pub fn text_contrast(&self) -> f32 {
        self.text.contrast_ratio(&self.button)
    }

    /// Returns true if button labels meet WCAG AA for large text
    #[must_use]
    pub fn is_legible(&self) -> bool {
        self.text_contrast() >= MIN_CONTRAST_LARGE
    }
}

/// The closed set of theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Light background, dark text
    #[default]
    Light,
    /// Dark background, light text
    Dark,
}

impl ThemeVariant {
    /// Returns the other variant
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns true for the dark variant
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Label shown next to the theme switch
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light Mode",
            Self::Dark => "Dark Mode",
        }
    }

    /// Built-in palette for this variant
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::LIGHT,
            Self::Dark => Palette::DARK,
        }
    }
}

impl FromStr for ThemeVariant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeError::UnknownVariant(s.to_string())),
        }
    }
}

impl std::fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// One palette per variant, built in or loaded from a file
///
/// ```yaml
/// light:
///   background: "#F1F2F3"
///   text: "#222"
///   button: "#fff"
///   main: "#f8970a"
///   faded_button: "#D2D3DA"
/// dark:
///   ...
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSet {
    /// Palette used by [`ThemeVariant::Light`]
    pub light: Palette,
    /// Palette used by [`ThemeVariant::Dark`]
    pub dark: Palette,
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self {
            light: Palette::LIGHT,
            dark: Palette::DARK,
        }
    }
}

impl ThemeSet {
    /// Palette for the given variant
    #[must_use]
    pub const fn palette(&self, variant: ThemeVariant) -> &Palette {
        match variant {
            ThemeVariant::Light => &self.light,
            ThemeVariant::Dark => &self.dark,
        }
    }

    /// Parses a theme set from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(json).map_err(|e| ThemeError::Parse(e.to_string()))
    }

    /// Parses a theme set from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ThemeError> {
        serde_yaml_ng::from_str(yaml).map_err(|e| ThemeError::Parse(e.to_string()))
    }

    /// Loads a theme set, choosing the format by file extension
    ///
    /// `.json` is parsed as JSON; anything else as YAML.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let themes = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        tracing::debug!(path = %path.display(), "loaded theme set");
        Ok(themes)
    }

    /// Serializes to pretty JSON
    pub fn to_json(&self) -> Result<String, ThemeError> {
        serde_json::to_string_pretty(self).map_err(|e| ThemeError::Parse(e.to_string()))
    }

    /// Serializes to YAML
    pub fn to_yaml(&self) -> Result<String, ThemeError> {
        serde_yaml_ng::to_string(self).map_err(|e| ThemeError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_YAML: &str = r##"
light:
  background: "#F1F2F3"
  text: "#222"
  button: "#fff"
  main: "#f8970a"
  faded_button: "#D2D3DA"
dark:
  background: "#000000"
  text: "#ffffff"
  button: "#111111"
  main: "#00ff00"
  faded_button: "#333333"
"##;

    // ===== Color tests =====

    #[test]
    fn test_color_parse_six_digit() {
        assert_eq!(
            Color::parse_hex("#F8970A").unwrap(),
            Color::new(0xF8, 0x97, 0x0A)
        );
        assert_eq!(Color::parse_hex("#f8970a").unwrap(), Color::from_hex(0xF8970A));
    }

    #[test]
    fn test_color_parse_three_digit_expands() {
        assert_eq!(Color::parse_hex("#222").unwrap(), Color::from_hex(0x222222));
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::from_hex(0xFFFFFF));
        assert_eq!(Color::parse_hex("#f80").unwrap(), Color::from_hex(0xFF8800));
    }

    #[test]
    fn test_color_parse_rejects_malformed() {
        for text in ["F8970A", "#F897", "#GGGGGG", "#", "", "#+12345", "#12345678"] {
            assert!(
                matches!(Color::parse_hex(text), Err(ThemeError::InvalidColor(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_color_display_is_lower_hex() {
        assert_eq!(Color::from_hex(0xD2D3DA).to_string(), "#d2d3da");
    }

    #[test]
    fn test_color_serde_as_string() {
        let json = serde_json::to_string(&Color::from_hex(0x17171C)).unwrap();
        assert_eq!(json, "\"#17171c\"");
        let back: Color = serde_json::from_str("\"#17171C\"").unwrap();
        assert_eq!(back, Color::from_hex(0x17171C));
    }

    #[test]
    fn test_contrast_black_white() {
        let ratio = Color::new(0, 0, 0).contrast_ratio(&Color::new(255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.1);
    }

    #[test]
    fn test_to_ansi256() {
        assert_eq!(Color::new(0, 0, 0).to_ansi256(), 16);
        assert_eq!(Color::new(255, 255, 255).to_ansi256(), 231);
        assert_eq!(Color::new(255, 0, 0).to_ansi256(), 196);
        assert_eq!(Color::from_hex(0x808080).to_ansi256(), 244);
    }

    // ===== Palette tests =====

    #[test]
    fn test_builtin_palettes_are_legible() {
        assert!(Palette::LIGHT.is_legible());
        assert!(Palette::DARK.is_legible());
    }

    #[test]
    fn test_builtin_palettes_share_accent() {
        assert_eq!(Palette::LIGHT.main, Palette::DARK.main);
        assert_ne!(Palette::LIGHT.background, Palette::DARK.background);
    }

    #[test]
    fn test_palette_accepts_uppercase_keys() {
        let json = r##"{
            "BACKGROUND_COLOR": "#F1F2F3",
            "TEXT_COLOR": "#222",
            "BUTTON_COLOR": "#fff",
            "MAIN_COLOR": "#f8970a",
            "FADED_BUTTON_COLOR": "#D2D3DA"
        }"##;
        let palette: Palette = serde_json::from_str(json).unwrap();
        assert_eq!(palette, Palette::LIGHT);
    }

    // ===== ThemeVariant tests =====

    #[test]
    fn test_variant_default_is_light() {
        assert_eq!(ThemeVariant::default(), ThemeVariant::Light);
    }

    #[test]
    fn test_variant_toggle() {
        assert_eq!(ThemeVariant::Light.toggled(), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::Dark.toggled(), ThemeVariant::Light);
        assert!(ThemeVariant::Dark.is_dark());
        assert!(!ThemeVariant::Light.is_dark());
    }

    #[test]
    fn test_variant_labels() {
        assert_eq!(ThemeVariant::Light.label(), "Light Mode");
        assert_eq!(ThemeVariant::Dark.label(), "Dark Mode");
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("dark".parse::<ThemeVariant>(), Ok(ThemeVariant::Dark));
        assert_eq!("LIGHT".parse::<ThemeVariant>(), Ok(ThemeVariant::Light));
        assert_eq!(
            "sepia".parse::<ThemeVariant>(),
            Err(ThemeError::UnknownVariant("sepia".into()))
        );
    }

    #[test]
    fn test_variant_palette() {
        assert_eq!(ThemeVariant::Light.palette(), Palette::LIGHT);
        assert_eq!(ThemeVariant::Dark.palette(), Palette::DARK);
    }

    // ===== ThemeSet tests =====

    #[test]
    fn test_theme_set_default_matches_builtins() {
        let themes = ThemeSet::default();
        assert_eq!(themes.palette(ThemeVariant::Light), &Palette::LIGHT);
        assert_eq!(themes.palette(ThemeVariant::Dark), &Palette::DARK);
    }

    #[test]
    fn test_theme_set_from_yaml() {
        let themes = ThemeSet::from_yaml_str(FULL_YAML).unwrap();
        assert_eq!(themes.light, Palette::LIGHT);
        assert_eq!(themes.dark.main, Color::from_hex(0x00FF00));
    }

    #[test]
    fn test_theme_set_missing_field_rejected() {
        let yaml = FULL_YAML.replace("  main: \"#00ff00\"\n", "");
        let err = ThemeSet::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(&err, ThemeError::Parse(msg) if msg.contains("main")));
    }

    #[test]
    fn test_theme_set_unknown_field_rejected() {
        let yaml = FULL_YAML.replace(
            "faded_button: \"#333333\"",
            "faded_button: \"#333333\"\n  accent2: \"#123456\"",
        );
        assert!(matches!(
            ThemeSet::from_yaml_str(&yaml),
            Err(ThemeError::Parse(_))
        ));
    }

    #[test]
    fn test_theme_set_bad_color_rejected() {
        let yaml = FULL_YAML.replace("#00ff00", "green");
        let err = ThemeSet::from_yaml_str(&yaml).unwrap_err();
        assert!(err.to_string().contains("green"));
    }

    #[test]
    fn test_theme_set_json_roundtrip() {
        let json = ThemeSet::default().to_json().unwrap();
        assert_eq!(ThemeSet::from_json_str(&json).unwrap(), ThemeSet::default());
    }

    #[test]
    fn test_theme_set_yaml_roundtrip() {
        let yaml = ThemeSet::default().to_yaml().unwrap();
        assert_eq!(ThemeSet::from_yaml_str(&yaml).unwrap(), ThemeSet::default());
    }

    #[test]
    fn test_theme_set_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("themes.yaml");
        std::fs::File::create(&yaml_path)
            .unwrap()
            .write_all(FULL_YAML.as_bytes())
            .unwrap();
        assert_eq!(
            ThemeSet::load(&yaml_path).unwrap().dark.main,
            Color::from_hex(0x00FF00)
        );

        let json_path = dir.path().join("themes.json");
        std::fs::write(&json_path, ThemeSet::default().to_json().unwrap()).unwrap();
        assert_eq!(ThemeSet::load(&json_path).unwrap(), ThemeSet::default());
    }

    #[test]
    fn test_theme_set_load_missing_file() {
        let err = ThemeSet::load(Path::new("/nonexistent/themes.yaml")).unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }
}
