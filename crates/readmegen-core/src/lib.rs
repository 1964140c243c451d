//! readmegen-core - README generation and preview
//!
//! Core library for readmegen: assembles a Markdown README from a handful
//! of form fields and renders a lightweight HTML preview of it.
//!
//! # Example
//!
//! ```
//! use readmegen_core::{assemble, render_preview, FormFields};
//!
//! let fields = FormFields {
//!     name: "Hello".to_string(),
//!     features_raw: "Fast, Small".to_string(),
//!     ..FormFields::default()
//! };
//!
//! let readme = assemble(&fields);
//! assert!(readme.contains("# Hello"));
//! assert!(readme.contains("- Fast\n- Small"));
//!
//! let html = render_preview(&readme);
//! assert!(html.starts_with("<h1>Hello</h1>"));
//! ```

pub mod assembler;
pub mod clipboard;
pub mod error;
pub mod export;
pub mod fields;
pub mod notify;
pub mod preview;
pub mod session;

// Re-export main types and functions
pub use assembler::{assemble, assemble_with_config, AssemblerConfig, DEFAULT_PROFILE_URL_TEMPLATE};
pub use clipboard::{copy_text, Clipboard, CopyOutcome};
pub use error::{ReadmeError, Result};
pub use export::{
    export_readme, Download, DownloadSink, ExportOutcome, MARKDOWN_MIME_TYPE, README_FILE_NAME,
};
pub use fields::{split_features, FormFields};
pub use notify::{Notice, Notifier};
pub use preview::{render_preview, standalone_page, HeadingLevel, PreviewRenderer, RewriteRule};
pub use session::{Preview, Session};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
