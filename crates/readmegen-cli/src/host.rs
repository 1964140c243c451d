//! Terminal implementations of the notification and download boundaries

use std::fs;
use std::path::{Path, PathBuf};

use readmegen_core::{Download, DownloadSink, Notice, Notifier, Result};
use tracing::info;

/// Prints notices to stderr
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: Notice) {
        eprintln!("{}", notice);
    }
}

/// Saves downloads into a directory under their suggested name
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    /// Sink writing into `dir`, created on first use
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Target directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DownloadSink for DirectorySink {
    fn emit(&mut self, download: &Download) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&download.file_name);
        fs::write(&path, &download.bytes)?;
        info!(path = %path.display(), mime = download.mime_type, "saved download");
        self.written.push(path);
        Ok(())
    }
}
