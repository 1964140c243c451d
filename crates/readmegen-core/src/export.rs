//! File export
//!
//! A download is a named byte sequence with a MIME type. Hosts decide what
//! "emit" means: a browser download, a file on disk, an upload.

use tracing::{debug, warn};

use crate::error::Result;
use crate::notify::{Notice, Notifier};

/// File name of the exported document
pub const README_FILE_NAME: &str = "README.md";

/// MIME type of the exported document
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";

/// A user-facing download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name
    pub file_name: String,
    /// MIME type
    pub mime_type: &'static str,
    /// File contents
    pub bytes: Vec<u8>,
}

impl Download {
    /// `README.md` download holding exactly `text`
    pub fn readme(text: &str) -> Self {
        Self {
            file_name: README_FILE_NAME.to_string(),
            mime_type: MARKDOWN_MIME_TYPE,
            bytes: text.as_bytes().to_vec(),
        }
    }
}

/// Destination for downloads
pub trait DownloadSink {
    /// Hand the download to the user
    fn emit(&mut self, download: &Download) -> Result<()>;
}

/// Collecting sink
impl DownloadSink for Vec<Download> {
    fn emit(&mut self, download: &Download) -> Result<()> {
        self.push(download.clone());
        Ok(())
    }
}

/// Result of an export request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The sink received the document
    Emitted,
    /// Nothing to export; the user was asked to generate first
    NothingToExport,
}

/// Export `text` as `README.md`.
///
/// Empty text is rejected with [`Notice::GenerateFirst`] and the sink is
/// not touched. A sink failure is reported with [`Notice::DownloadFailed`]
/// and then returned.
pub fn export_readme(
    text: &str,
    sink: &mut dyn DownloadSink,
    notifier: &mut dyn Notifier,
) -> Result<ExportOutcome> {
    if text.is_empty() {
        notifier.notify(Notice::GenerateFirst);
        return Ok(ExportOutcome::NothingToExport);
    }

    let download = Download::readme(text);
    debug!(
        file = %download.file_name,
        mime = download.mime_type,
        bytes = download.bytes.len(),
        "emitting download"
    );
    if let Err(err) = sink.emit(&download) {
        warn!(error = %err, "download failed");
        notifier.notify(Notice::DownloadFailed);
        return Err(err);
    }
    Ok(ExportOutcome::Emitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadmeError;
    use std::io;

    struct ReadOnlySink;

    impl DownloadSink for ReadOnlySink {
        fn emit(&mut self, _download: &Download) -> Result<()> {
            Err(ReadmeError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[test]
    fn test_readme_download() {
        let download = Download::readme("# X");
        assert_eq!(download.file_name, "README.md");
        assert_eq!(download.mime_type, "text/markdown");
        assert_eq!(download.bytes, b"# X");
    }

    #[test]
    fn test_export_emits_exact_text() {
        let mut sink: Vec<Download> = Vec::new();
        let mut notices: Vec<Notice> = Vec::new();

        let outcome = export_readme("# Edited by hand", &mut sink, &mut notices).unwrap();

        assert_eq!(outcome, ExportOutcome::Emitted);
        assert_eq!(sink, vec![Download::readme("# Edited by hand")]);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_export_empty_notifies_once() {
        let mut sink: Vec<Download> = Vec::new();
        let mut notices: Vec<Notice> = Vec::new();

        let outcome = export_readme("", &mut sink, &mut notices).unwrap();

        assert_eq!(outcome, ExportOutcome::NothingToExport);
        assert!(sink.is_empty());
        assert_eq!(notices, vec![Notice::GenerateFirst]);
    }

    #[test]
    fn test_export_sink_failure_notifies_then_errors() {
        let mut notices: Vec<Notice> = Vec::new();

        let result = export_readme("# X", &mut ReadOnlySink, &mut notices);

        assert!(matches!(result, Err(ReadmeError::Io(_))));
        assert_eq!(notices, vec![Notice::DownloadFailed]);
    }
}
