// SPDX-License-Identifier: Apache-2.0

//! Message log: append-only record of every emitted message.
//!
//! Format: `[YYYY-MM-DDTHH:MM:SS+HH:MM] message`, one line per message.
//! The file is opened per write, so nothing is held between calls.

use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// An append-only log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    /// Wraps `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped line, creating missing parent directories first.
    pub fn append(&self, message: &str) -> io::Result<()> {
        self.ensure_parent_dir()?;

        let now = Local::now().format("%Y-%m-%dT%H:%M:%S%:z");
        let line = format!("[{}] {}\n", now, message);

        // One write_all per line keeps concurrent appenders line-atomic.
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        f.write_all(line.as_bytes())?;
        tracing::trace!(path = %self.path.display(), "appended log line");
        Ok(())
    }

    fn ensure_parent_dir(&self) -> io::Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Ok(()),
        };
        if parent.exists() {
            return Ok(());
        }

        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder.create(parent)?;
        tracing::debug!(dir = %parent.display(), "created log directory");
        Ok(())
    }

    /// Read the last `n` lines, optionally keeping only those containing
    /// `filter` (case-insensitive). A missing file reads as empty.
    pub fn read_tail(&self, n: usize, filter: Option<&str>) -> io::Result<Vec<String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let filtered: Vec<String> = match filter {
            Some(keyword) => {
                let kw = keyword.to_lowercase();
                content
                    .lines()
                    .filter(|l| l.to_lowercase().contains(&kw))
                    .map(str::to_string)
                    .collect()
            }
            None => content.lines().map(str::to_string).collect(),
        };

        let skip = filtered.len().saturating_sub(n);
        Ok(filtered.into_iter().skip(skip).collect())
    }

    /// Truncate the log. A missing file is left missing.
    pub fn clear(&self) -> io::Result<()> {
        if self.path.exists() {
            std::fs::write(&self.path, "")?;
        }
        Ok(())
    }
}
