//! Clipboard copy with a single fallback
//!
//! The primary mechanism is tried first when it reports itself available.
//! If it is absent or its write fails, the fallback is tried exactly once.
//! There are no retries; a failed fallback asks the user to copy by hand.

use tracing::{debug, warn};

use crate::error::Result;
use crate::notify::{Notice, Notifier};

/// A mechanism that can place text on the user's clipboard
pub trait Clipboard {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Whether the mechanism exists on this host
    fn is_available(&self) -> bool {
        true
    }

    /// Place `text` on the clipboard
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Result of a copy request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The primary mechanism succeeded
    Copied,
    /// The fallback mechanism succeeded
    CopiedWithFallback,
    /// Both mechanisms failed
    Failed,
    /// Nothing to copy; the user was asked to generate first
    NothingToCopy,
}

impl CopyOutcome {
    /// Whether the text reached the clipboard
    pub fn is_copied(self) -> bool {
        matches!(self, CopyOutcome::Copied | CopyOutcome::CopiedWithFallback)
    }
}

/// Copy `text`, reporting the result through `notifier`.
///
/// Exactly one notice is sent per call.
pub fn copy_text(
    text: &str,
    primary: &mut dyn Clipboard,
    fallback: &mut dyn Clipboard,
    notifier: &mut dyn Notifier,
) -> CopyOutcome {
    if text.is_empty() {
        notifier.notify(Notice::GenerateFirst);
        return CopyOutcome::NothingToCopy;
    }

    if primary.is_available() {
        match primary.write_text(text) {
            Ok(()) => {
                debug!(clipboard = primary.name(), "copied");
                notifier.notify(Notice::Copied);
                return CopyOutcome::Copied;
            }
            Err(e) => {
                warn!(clipboard = primary.name(), error = %e, "clipboard write failed, trying fallback");
            }
        }
    } else {
        debug!(clipboard = primary.name(), "clipboard unavailable, trying fallback");
    }

    match fallback.write_text(text) {
        Ok(()) => {
            debug!(clipboard = fallback.name(), "copied with fallback");
            notifier.notify(Notice::Copied);
            CopyOutcome::CopiedWithFallback
        }
        Err(e) => {
            warn!(clipboard = fallback.name(), error = %e, "fallback copy failed");
            notifier.notify(Notice::CopyFailed);
            CopyOutcome::Failed
        }
    }
}
