//! readmegen CLI - Command-line interface library
//!
//! This library provides the CLI functionality for readmegen:
//! - Generate: assemble a README from a config file and flags
//! - Preview: render a README to lightweight HTML
//! - Copy: put a README on the clipboard
//! - Export: save a README as `README.md`
//! - Init: write a sample `readmegen.toml`
//!
//! # Binary Usage
//!
//! ```bash
//! # Start from the sample project
//! readmegen init
//!
//! # Assemble README.md, with a standalone preview page
//! readmegen generate -o README.md --preview preview.html --standalone
//!
//! # Copy it to the clipboard
//! readmegen copy
//! ```

pub mod app;
pub mod clipboard;
pub mod config;
pub mod host;

// Re-export main entry point and types
pub use app::{
    copy_command, export_command, generate_command, init_command, preview_command, FieldArgs,
};
pub use app::run_cli;
pub use config::{Settings, CONFIG_FILE_NAME};
