// SPDX-License-Identifier: Apache-2.0

//! Turning a message and a color into the bytes a given output understands.

use crate::types::{ANSI_RESET, Color, Theme};

/// Formats single message lines for one kind of output.
pub trait ColorRenderer {
    /// Render one message line, trailing newline included.
    fn render(&self, message: &str, color: Color) -> String;

    /// Text written once, before the first message.
    fn preamble(&self) -> Option<String> {
        None
    }
}

/// Terminal output: ANSI color, then the message, then a reset.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl ColorRenderer for AnsiRenderer {
    fn render(&self, message: &str, color: Color) -> String {
        format!("{}{}{}\n", color.ansi(), message, ANSI_RESET)
    }
}

/// HTML output: a `<pre>` page with a themed stylesheet and one inline-styled
/// `<span>` per message.
///
/// Messages are inserted verbatim, so callers may embed their own markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    theme: Theme,
}

impl HtmlRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}

impl ColorRenderer for HtmlRenderer {
    fn render(&self, message: &str, color: Color) -> String {
        format!("<span style=\"color: {};\">{}</span>\n", color.css(), message)
    }

    fn preamble(&self) -> Option<String> {
        Some(format!(
            "<pre><style>
    body {{
        background: {background};
        color: {foreground};
        font-size: 1.10rem;
        max-width: 1200px;
        margin: 1.15rem auto;
    }}

    pre {{
        white-space: pre-wrap;
        word-wrap: break-word;
    }}
</style>",
            background = self.theme.background(),
            foreground = self.theme.foreground().css(),
        ))
    }
}
