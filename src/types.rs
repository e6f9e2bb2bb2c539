// SPDX-License-Identifier: Apache-2.0

//! Core types for tinta: "Parse, Don't Validate".
//!
//! Colors, themes and output modes are closed sets. Parsing happens once at the
//! edge (CLI, config file, constructor) so the printer never re-checks them.

use std::fmt;
use std::str::FromStr;

/// Error returned when a string does not name a member of one of the closed sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: &'static str,
    input: String,
    expected: &'static str,
}

impl ParseError {
    fn new(kind: &'static str, input: &str, expected: &'static str) -> Self {
        Self {
            kind,
            input: input.to_string(),
            expected,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid {} '{}'. {} must be one of {}",
            self.kind,
            self.input,
            capitalize(self.kind),
            self.expected
        )
    }
}

impl std::error::Error for ParseError {}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Color: the fixed color table
// =============================================================================

/// A message color.
///
/// `gray` and `grey` parse to the same variant, so both spellings always render
/// identically. `White` is the foreground of dark HTML pages; default-colored
/// text is promoted to it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Black,
    Red,
    Green,
    Orange,
    Blue,
    Gray,
    White,
}

/// ANSI sequence that ends every colored terminal line.
pub const ANSI_RESET: &str = "\x1b[0m";

impl Color {
    /// Every color, in table order.
    pub const ALL: [Color; 7] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Orange,
        Color::Blue,
        Color::Gray,
        Color::White,
    ];

    /// Escape sequence that switches a terminal to this color.
    ///
    /// Black is the terminal's own foreground, so it is a plain reset.
    pub fn ansi(self) -> &'static str {
        match self {
            Color::Black => ANSI_RESET,
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Orange => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Gray => "\x1b[90m",
            Color::White => "\x1b[37m",
        }
    }

    /// CSS color value used in `style="color: ..."`.
    pub fn css(self) -> &'static str {
        self.name()
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Gray => "gray",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "orange" => Ok(Color::Orange),
            "blue" => Ok(Color::Blue),
            "gray" | "grey" => Ok(Color::Gray),
            "white" => Ok(Color::White),
            _ => Err(ParseError::new(
                "color",
                s,
                "'black', 'red', 'green', 'orange', 'blue', 'gray', 'grey' and 'white'",
            )),
        }
    }
}

// =============================================================================
// Theme: HTML page preset
// =============================================================================

/// Background preset for HTML output. Ignored on terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Page background color.
    pub fn background(self) -> &'static str {
        match self {
            Theme::Dark => "#333",
            Theme::Light => "#eee",
        }
    }

    /// Page foreground color.
    pub fn foreground(self) -> Color {
        match self {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    // Exact match only: "Dark" is rejected, like any other unknown theme.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(ParseError::new("theme", s, "'dark' and 'light'")),
        }
    }
}

// =============================================================================
// OutputMode: where messages go and how they are colored
// =============================================================================

/// Output target, fixed for the lifetime of a printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Text console, colored with ANSI escape sequences.
    #[default]
    Terminal,
    /// HTML response body, colored with inline CSS.
    Markup,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Terminal => "terminal",
            OutputMode::Markup => "markup",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" => Ok(OutputMode::Terminal),
            "markup" | "html" => Ok(OutputMode::Markup),
            _ => Err(ParseError::new("mode", s, "'terminal' and 'markup'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_and_grey_are_synonyms() {
        let gray: Color = "gray".parse().unwrap();
        let grey: Color = "grey".parse().unwrap();
        assert_eq!(gray, grey);
        assert_eq!(gray.ansi(), grey.ansi());
        assert_eq!(gray.css(), grey.css());
    }

    #[test]
    fn test_ansi_tokens() {
        assert_eq!(Color::Black.ansi(), "\x1b[0m");
        assert_eq!(Color::Red.ansi(), "\x1b[31m");
        assert_eq!(Color::Green.ansi(), "\x1b[32m");
        assert_eq!(Color::Orange.ansi(), "\x1b[33m");
        assert_eq!(Color::Blue.ansi(), "\x1b[34m");
        assert_eq!(Color::Gray.ansi(), "\x1b[90m");
    }

    #[test]
    fn test_color_parse() {
        assert_eq!("RED".parse::<Color>().unwrap(), Color::Red);
        assert_eq!(" orange ".parse::<Color>().unwrap(), Color::Orange);
        assert_eq!(Color::default(), Color::Black);

        let err = "purple".parse::<Color>().unwrap_err();
        assert!(err.to_string().contains("purple"));
    }

    #[test]
    fn test_every_color_name_parses_back() {
        for color in Color::ALL {
            assert_eq!(color.name().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
        assert!("Dark".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_error_message() {
        let err = "blue".parse::<Theme>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid theme 'blue'. Theme must be one of 'dark' and 'light'"
        );
    }

    #[test]
    fn test_theme_colors() {
        assert_eq!(Theme::Dark.background(), "#333");
        assert_eq!(Theme::Dark.foreground(), Color::White);
        assert_eq!(Theme::Light.background(), "#eee");
        assert_eq!(Theme::Light.foreground(), Color::Black);
    }

    #[test]
    fn test_output_mode_parse() {
        assert_eq!("terminal".parse::<OutputMode>().unwrap(), OutputMode::Terminal);
        assert_eq!("Markup".parse::<OutputMode>().unwrap(), OutputMode::Markup);
        assert_eq!("html".parse::<OutputMode>().unwrap(), OutputMode::Markup);
        assert!("web".parse::<OutputMode>().is_err());
    }
}
