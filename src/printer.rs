// SPDX-License-Identifier: Apache-2.0

//! Status message output for terminals and HTML pages.
//!
//! A [`Printer`] picks its rendering once, at construction, from an explicit
//! [`OutputMode`]. Every severity method funnels through one `emit` routine
//! that logs first and prints second, so a failed log write also suppresses
//! the visible line.

use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::log_file::LogFile;
use crate::render::{AnsiRenderer, ColorRenderer, HtmlRenderer};
use crate::types::{Color, OutputMode, Theme};

/// Writes colored status messages to a terminal or an HTML response body.
pub struct Printer<W: Write = Stdout> {
    mode: OutputMode,
    theme: Theme,
    renderer: Box<dyn ColorRenderer>,
    log: Option<LogFile>,
    out: W,
}

impl Printer<Stdout> {
    /// Create a printer writing to standard output.
    ///
    /// See [`Printer::with_writer`].
    pub fn new(mode: OutputMode, log_path: Option<PathBuf>, theme: &str) -> Result<Self> {
        Self::with_writer(io::stdout(), mode, log_path, theme)
    }
}

impl<W: Write> Printer<W> {
    /// Create a printer writing to `out`.
    ///
    /// In [`OutputMode::Markup`] `theme` must be `"dark"` or `"light"`; anything
    /// else fails with [`Error::InvalidConfiguration`] before a single byte is
    /// written. On success the HTML preamble is written immediately. In
    /// [`OutputMode::Terminal`] the theme is ignored.
    ///
    /// `log_path` is not checked here; problems surface on the first message.
    pub fn with_writer(
        out: W,
        mode: OutputMode,
        log_path: Option<PathBuf>,
        theme: &str,
    ) -> Result<Self> {
        let theme = match mode {
            OutputMode::Terminal => Theme::default(),
            OutputMode::Markup => theme.parse::<Theme>()?,
        };
        let renderer: Box<dyn ColorRenderer> = match mode {
            OutputMode::Terminal => Box::new(AnsiRenderer),
            OutputMode::Markup => Box::new(HtmlRenderer::new(theme)),
        };

        let mut printer = Self {
            mode,
            theme,
            renderer,
            log: log_path.map(LogFile::new),
            out,
        };

        if let Some(preamble) = printer.renderer.preamble() {
            printer.write_out(&preamble)?;
        }

        tracing::debug!(%mode, %theme, log = ?printer.log_path(), "printer ready");
        Ok(printer)
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// The active theme. Always [`Theme::Dark`] in terminal mode.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn log_path(&self) -> Option<&Path> {
        self.log.as_ref().map(LogFile::path)
    }

    /// Consume the printer and return its output stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print `text` in `color`.
    ///
    /// Black text on a dark HTML page is printed white instead, so the default
    /// color stays readable.
    pub fn message(&mut self, text: &str, color: Color) -> Result<()> {
        let color = if self.mode == OutputMode::Markup
            && self.theme == Theme::Dark
            && color == Color::Black
        {
            Color::White
        } else {
            color
        };
        self.emit(text, color)
    }

    /// Print `text` in the default color.
    pub fn plain(&mut self, text: &str) -> Result<()> {
        self.message(text, Color::default())
    }

    /// Print `text` in red.
    pub fn error(&mut self, text: &str) -> Result<()> {
        self.emit(text, Color::Red)
    }

    /// Print `text` in orange.
    pub fn warning(&mut self, text: &str) -> Result<()> {
        self.emit(text, Color::Orange)
    }

    /// Print `text` in green.
    pub fn success(&mut self, text: &str) -> Result<()> {
        self.emit(text, Color::Green)
    }

    fn emit(&mut self, text: &str, color: Color) -> Result<()> {
        if let Some(log) = &self.log {
            log.append(text).map_err(|source| {
                tracing::warn!(path = %log.path().display(), error = %source, "log write failed");
                Error::Log {
                    path: log.path().to_path_buf(),
                    source,
                }
            })?;
        }

        let line = self.renderer.render(text, color);
        self.write_out(&line)
    }

    fn write_out(&mut self, s: &str) -> Result<()> {
        self.out.write_all(s.as_bytes()).map_err(Error::Output)?;
        self.out.flush().map_err(Error::Output)
    }
}

impl<W: Write> std::fmt::Debug for Printer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Printer")
            .field("mode", &self.mode)
            .field("theme", &self.theme)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}
