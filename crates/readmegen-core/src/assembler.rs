//! README Assembler
//!
//! This module turns a [`FormFields`] snapshot into a Markdown README.
//!
//! Sections always appear in the same order: title, description, features,
//! installation, usage, license, author attribution. Features, installation,
//! usage and attribution are omitted when their field is blank. Field values
//! are inserted as-is; Markdown syntax typed into a field is not escaped.
//!
//! # Example
//!
//! ```
//! use readmegen_core::{assemble, FormFields};
//!
//! let fields = FormFields {
//!     name: "Widget".to_string(),
//!     install_command: "cargo install widget".to_string(),
//!     ..FormFields::default()
//! };
//!
//! let readme = assemble(&fields);
//! assert!(readme.starts_with("# Widget"));
//! assert!(readme.contains("```bash\ncargo install widget\n```"));
//! ```

use crate::fields::FormFields;

/// Placeholder replaced by the author handle in a profile link template
pub const AUTHOR_PLACEHOLDER: &str = "{author}";

/// Profile link used when no template is configured
pub const DEFAULT_PROFILE_URL_TEMPLATE: &str = "https://github.com/{author}";

/// Fence language for the installation block
const INSTALL_FENCE_LANGUAGE: &str = "bash";

/// Assembler configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Link template for the author attribution; `{author}` is substituted
    pub profile_url_template: String,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            profile_url_template: DEFAULT_PROFILE_URL_TEMPLATE.to_string(),
        }
    }
}

impl AssemblerConfig {
    /// Profile URL for an author handle
    pub fn profile_url(&self, author: &str) -> String {
        self.profile_url_template.replace(AUTHOR_PLACEHOLDER, author)
    }
}

/// Assemble a README with the default configuration
pub fn assemble(fields: &FormFields) -> String {
    assemble_with_config(fields, &AssemblerConfig::default())
}

/// Assemble a README with a custom configuration
pub fn assemble_with_config(fields: &FormFields, config: &AssemblerConfig) -> String {
    let mut readme = format!(
        "# {}\n\n{}\n\n",
        fields.name_or_default(),
        fields.description_or_default()
    );

    let features = fields.features();
    if !features.is_empty() {
        readme.push_str("## Features\n\n");
        readme.push_str(&bullet_list(&features));
        readme.push('\n');
    }

    if let Some(install) = fields.install() {
        readme.push_str("\n## Installation\n\n");
        readme.push_str(&fenced(INSTALL_FENCE_LANGUAGE, install));
        readme.push('\n');
    }

    if let Some(usage) = fields.usage() {
        readme.push_str("\n## Usage\n\n");
        readme.push_str(usage);
        readme.push('\n');
    }

    readme.push_str("\n\n## License\n");
    readme.push_str(fields.license_or_default());
    readme.push('\n');

    if let Some(author) = fields.author() {
        readme.push_str("\n\n---\n\n");
        readme.push_str(&attribution(author, &config.profile_url(author)));
    }

    readme.push('\n');
    readme.trim().to_string()
}

fn bullet_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn fenced(language: &str, body: &str) -> String {
    format!("```{}\n{}\n```", language, body)
}

fn attribution(author: &str, url: &str) -> String {
    format!("👨‍💻 Created by [{}]({})", author, url)
}
