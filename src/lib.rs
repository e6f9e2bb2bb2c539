// SPDX-License-Identifier: Apache-2.0

//! Colored status messages for terminals and HTML pages.
//!
//! ```no_run
//! use tinta::{Color, OutputMode, Printer};
//!
//! let mut out = Printer::new(OutputMode::Terminal, Some("logs/run.log".into()), "dark")?;
//! out.plain("Starting import")?;
//! out.message("3 files queued", Color::Blue)?;
//! out.warning("skipping empty file")?;
//! out.success("done")?;
//! # Ok::<(), tinta::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod log_file;
pub mod printer;
pub mod render;
pub mod table;
pub mod types;

pub use error::{Error, Result};
pub use log_file::LogFile;
pub use printer::Printer;
pub use render::{AnsiRenderer, ColorRenderer, HtmlRenderer};
pub use types::{Color, OutputMode, ParseError, Theme};
