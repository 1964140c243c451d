//! Form fields
//!
//! The flat record of project metadata a host collects before assembling
//! a README. Every field is a plain string; blank values fall back to a
//! default or drop their section at assembly time.

use serde::{Deserialize, Serialize};

/// Title used when `name` is blank
pub const DEFAULT_NAME: &str = "Project Name";

/// Description used when `description` is blank
pub const DEFAULT_DESCRIPTION: &str = "Short description of the project.";

/// License used when `license` is blank
pub const DEFAULT_LICENSE: &str = "MIT";

/// Snapshot of the metadata form.
///
/// Serialized keys follow the form's field ids (`install`, `usage`,
/// `features`). The camelCase spellings are accepted as aliases so browser
/// hosts can hand over plain JS objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    /// Project title
    pub name: String,
    /// One-line description
    pub description: String,
    /// Shell command rendered in the Installation section
    #[serde(rename = "install", alias = "installCommand", alias = "install_command")]
    pub install_command: String,
    /// Free text rendered verbatim in the Usage section
    #[serde(rename = "usage", alias = "usageText", alias = "usage_text")]
    pub usage_text: String,
    /// Comma-separated feature list
    #[serde(rename = "features", alias = "featuresRaw", alias = "features_raw")]
    pub features_raw: String,
    /// License name
    pub license: String,
    /// Profile handle used for the attribution link
    pub author: String,
}

impl FormFields {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// The values a fresh form is pre-populated with so the first render
    /// is never empty.
    pub fn sample() -> Self {
        Self {
            name: "Awesome Project".to_string(),
            description: "A one-line description of what the project solves.".to_string(),
            features_raw: "Fast, Lightweight, Easy".to_string(),
            author: "your-github-username".to_string(),
            ..Self::default()
        }
    }

    /// Resolved project title
    pub fn name_or_default(&self) -> &str {
        non_blank(&self.name).unwrap_or(DEFAULT_NAME)
    }

    /// Resolved description
    pub fn description_or_default(&self) -> &str {
        non_blank(&self.description).unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Resolved license
    pub fn license_or_default(&self) -> &str {
        non_blank(&self.license).unwrap_or(DEFAULT_LICENSE)
    }

    /// Trimmed install command, if any
    pub fn install(&self) -> Option<&str> {
        non_blank(&self.install_command)
    }

    /// Trimmed usage text, if any
    pub fn usage(&self) -> Option<&str> {
        non_blank(&self.usage_text)
    }

    /// Trimmed author handle, if any
    pub fn author(&self) -> Option<&str> {
        non_blank(&self.author)
    }

    /// Feature entries in input order, trimmed, with empty entries dropped
    pub fn features(&self) -> Vec<&str> {
        split_features(&self.features_raw)
    }
}

/// Split a comma-separated feature list.
///
/// ```
/// use readmegen_core::split_features;
///
/// assert_eq!(split_features("Fast, , Lightweight ,,Easy"), vec!["Fast", "Lightweight", "Easy"]);
/// ```
pub fn split_features(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .collect()
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
