//! User notifications
//!
//! Every user-facing failure ends in a notice rather than an error. Hosts
//! decide how to show them (dialog, stderr, status bar).

use std::fmt;

/// Messages shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Copy or download was requested while the output is empty
    GenerateFirst,
    /// The README reached the clipboard
    Copied,
    /// Both clipboard mechanisms failed
    CopyFailed,
    /// The download sink rejected the document
    DownloadFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Notice::GenerateFirst => "Generate the README first.",
            Notice::Copied => "README copied to clipboard!",
            Notice::CopyFailed => "Copy failed - select and copy manually.",
            Notice::DownloadFailed => "Download failed - save the text manually.",
        };
        f.write_str(message)
    }
}

/// Receives notices for display
pub trait Notifier {
    /// Show a notice to the user
    fn notify(&mut self, notice: Notice);
}

/// Collecting notifier, mostly useful for tests and headless hosts
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
