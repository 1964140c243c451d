//! Editing session
//!
//! Holds the state a README form host needs between user actions: the
//! form snapshot, the text currently shown in the output area, and the
//! preview pane. Hosts keep one `Session` and call its methods in response
//! to button presses; nothing here is global.

use tracing::debug;

use crate::assembler::{assemble_with_config, AssemblerConfig};
use crate::clipboard::{copy_text, Clipboard, CopyOutcome};
use crate::error::Result;
use crate::export::{export_readme, DownloadSink, ExportOutcome};
use crate::fields::FormFields;
use crate::notify::Notifier;
use crate::preview::render_preview;

/// Preview pane state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    /// Whether the pane is shown
    pub visible: bool,
    /// Last rendered HTML
    pub html: String,
}

/// README form session
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Current form input
    pub fields: FormFields,
    config: AssemblerConfig,
    output: String,
    preview: Preview,
}

impl Session {
    /// Empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with a custom assembler configuration
    pub fn with_config(config: AssemblerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Session pre-filled with the sample form and already generated
    pub fn with_sample() -> Self {
        let mut session = Self {
            fields: FormFields::sample(),
            ..Self::default()
        };
        session.generate();
        session
    }

    /// Assembler configuration in use
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Text currently in the output area
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Preview pane state
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    /// Assemble the README from the current fields, replacing the output
    /// and the preview content.
    pub fn generate(&mut self) -> &str {
        self.output = assemble_with_config(&self.fields, &self.config);
        self.preview.html = render_preview(&self.output);
        debug!(bytes = self.output.len(), "generated README");
        &self.output
    }

    /// Replace the output text, as when the user edits it by hand.
    ///
    /// The fields are not updated from the edit.
    pub fn set_output(&mut self, text: impl Into<String>) {
        self.output = text.into();
    }

    /// Show or hide the preview.
    ///
    /// When the pane becomes visible it is re-rendered from the output
    /// text, or from a fresh assembly if the output is empty. Returns the
    /// new visibility.
    pub fn toggle_preview(&mut self) -> bool {
        self.preview.visible = !self.preview.visible;
        if self.preview.visible {
            self.preview.html = if self.output.is_empty() {
                render_preview(&assemble_with_config(&self.fields, &self.config))
            } else {
                render_preview(&self.output)
            };
        }
        self.preview.visible
    }

    /// Reset the form, the output and the preview
    pub fn clear(&mut self) {
        self.fields = FormFields::default();
        self.output.clear();
        self.preview = Preview::default();
        debug!("session cleared");
    }

    /// Copy the output text to the clipboard
    pub fn copy(
        &self,
        primary: &mut dyn Clipboard,
        fallback: &mut dyn Clipboard,
        notifier: &mut dyn Notifier,
    ) -> CopyOutcome {
        copy_text(&self.output, primary, fallback, notifier)
    }

    /// Emit the output text as `README.md`
    pub fn download(
        &self,
        sink: &mut dyn DownloadSink,
        notifier: &mut dyn Notifier,
    ) -> Result<ExportOutcome> {
        export_readme(&self.output, sink, notifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::test_utils::MemoryClipboard;
    use crate::export::Download;
    use crate::notify::Notice;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.output().is_empty());
        assert_eq!(session.preview(), &Preview::default());
    }

    #[test]
    fn test_sample_session_is_generated() {
        let session = Session::with_sample();
        assert!(session.output().starts_with("# Awesome Project\n"));
        assert!(session.output().contains("- Lightweight"));
        assert!(session.preview().html.starts_with("<h1>Awesome Project</h1>"));
        assert!(!session.preview().visible);
    }

    #[test]
    fn test_generate_overwrites_hand_edits() {
        let mut session = Session::new();
        session.fields.name = "Widget".to_string();
        session.generate();
        session.set_output("hand edited");

        let output = session.generate().to_string();

        assert!(output.starts_with("# Widget"));
        assert_eq!(session.fields.name, "Widget");
    }

    #[test]
    fn test_toggle_preview_uses_hand_edited_output() {
        let mut session = Session::with_sample();
        session.set_output("## Edited");

        assert!(session.toggle_preview());
        assert_eq!(session.preview().html, "<h2>Edited</h2>");

        assert!(!session.toggle_preview());
        assert_eq!(session.preview().html, "<h2>Edited</h2>");
    }

    #[test]
    fn test_toggle_preview_with_empty_output_assembles() {
        let mut session = Session::new();
        session.fields.name = "Fresh".to_string();

        session.toggle_preview();

        assert!(session.preview().html.starts_with("<h1>Fresh</h1>"));
        assert!(session.output().is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut session = Session::with_sample();
        session.toggle_preview();

        session.clear();

        assert_eq!(session.fields, FormFields::default());
        assert!(session.output().is_empty());
        assert!(!session.preview().visible);
        assert!(session.preview().html.is_empty());
    }

    #[test]
    fn test_custom_config_flows_into_generate() {
        let mut session = Session::with_config(AssemblerConfig {
            profile_url_template: "https://example.org/~{author}".to_string(),
        });
        session.fields.author = "ann".to_string();

        assert!(session.generate().ends_with("(https://example.org/~ann)"));
    }

    #[test]
    fn test_copy_on_empty_output() {
        let session = Session::new();
        let mut primary = MemoryClipboard::working();
        let mut fallback = MemoryClipboard::working();
        let mut notices: Vec<Notice> = Vec::new();

        let outcome = session.copy(&mut primary, &mut fallback, &mut notices);

        assert_eq!(outcome, CopyOutcome::NothingToCopy);
        assert!(primary.contents.is_none());
        assert!(fallback.contents.is_none());
        assert_eq!(notices, vec![Notice::GenerateFirst]);
    }

    #[test]
    fn test_copy_uses_displayed_text() {
        let mut session = Session::with_sample();
        session.set_output("tweaked");
        let mut primary = MemoryClipboard::working();
        let mut fallback = MemoryClipboard::working();
        let mut notices: Vec<Notice> = Vec::new();

        session.copy(&mut primary, &mut fallback, &mut notices);

        assert_eq!(primary.contents.as_deref(), Some("tweaked"));
    }

    #[test]
    fn test_download_on_empty_output() {
        let session = Session::new();
        let mut sink: Vec<Download> = Vec::new();
        let mut notices: Vec<Notice> = Vec::new();

        let outcome = session.download(&mut sink, &mut notices).unwrap();

        assert_eq!(outcome, ExportOutcome::NothingToExport);
        assert!(sink.is_empty());
        assert_eq!(notices, vec![Notice::GenerateFirst]);
    }

    #[test]
    fn test_download_emits_output() {
        let session = Session::with_sample();
        let mut sink: Vec<Download> = Vec::new();
        let mut notices: Vec<Notice> = Vec::new();

        session.download(&mut sink, &mut notices).unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].bytes, session.output().as_bytes());
        assert!(notices.is_empty());
    }
}
