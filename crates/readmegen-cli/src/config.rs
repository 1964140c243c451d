//! Configuration file support
//!
//! Settings are loaded from `readmegen.toml` in the working directory:
//!
//! ```toml
//! [project]
//! name = "Awesome Project"
//! description = "A one-line description of what the project solves."
//! install = "cargo install awesome"
//! features = "Fast, Lightweight, Easy"
//! author = "octocat"
//!
//! [links]
//! profile = "https://github.com/{author}"
//!
//! [output]
//! readme = "README.md"
//! preview = "preview.html"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use readmegen_core::{AssemblerConfig, FormFields, DEFAULT_PROFILE_URL_TEMPLATE, README_FILE_NAME};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "readmegen.toml";

/// Top-level settings structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Form values
    pub project: FormFields,
    /// Link templates
    pub links: LinkSettings,
    /// Output locations
    pub output: OutputSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize settings to TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Settings pre-filled with the sample project
    pub fn sample() -> Self {
        Self {
            project: FormFields::sample(),
            ..Self::default()
        }
    }

    /// Load settings.
    ///
    /// An explicit path must exist. Without one, `readmegen.toml` in `dir`
    /// is used when present, and defaults otherwise.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let candidate = dir.join(CONFIG_FILE_NAME);
                if !candidate.exists() {
                    debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
                candidate
            }
        };

        debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Assembler configuration derived from the link settings
    pub fn assembler_config(&self) -> AssemblerConfig {
        AssemblerConfig {
            profile_url_template: self.links.profile.clone(),
        }
    }
}

/// Link template settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSettings {
    /// Author profile link; `{author}` is replaced with the handle
    pub profile: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE_URL_TEMPLATE.to_string(),
        }
    }
}

/// Output location settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Where the README is read from and written to
    pub readme: PathBuf,
    /// Where `generate` writes the HTML preview, if anywhere
    pub preview: Option<PathBuf>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            readme: PathBuf::from(README_FILE_NAME),
            preview: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_from_toml() {
        let toml = r#"
[project]
name = "Widget"
install = "cargo install widget"
features = "Fast, Small"

[links]
profile = "https://gitlab.com/{author}"

[output]
preview = "site/preview.html"
"#;

        let settings = Settings::from_toml_str(toml).unwrap();

        assert_eq!(settings.project.name, "Widget");
        assert_eq!(settings.project.install_command, "cargo install widget");
        assert_eq!(settings.links.profile, "https://gitlab.com/{author}");
        assert_eq!(settings.output.readme, PathBuf::from("README.md"));
        assert_eq!(
            settings.output.preview,
            Some(PathBuf::from("site/preview.html"))
        );
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.project, FormFields::default());
        assert_eq!(settings.links.profile, "https://github.com/{author}");
        assert_eq!(settings.output.readme, PathBuf::from("README.md"));
        assert!(settings.output.preview.is_none());
    }

    #[test]
    fn test_sample_roundtrips_through_toml() {
        let settings = Settings::sample();
        let toml = settings.to_toml_string().unwrap();

        assert!(toml.contains("name = \"Awesome Project\""));
        assert!(toml.contains("features = \"Fast, Lightweight, Easy\""));
        assert_eq!(Settings::from_toml_str(&toml).unwrap(), settings);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Settings::from_toml_str("[project\nname = ").is_err());
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");

        let err = Settings::load(Some(missing.as_path()), temp.path()).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Settings::load(None, temp.path()).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_from_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[project]\nauthor = \"ann\"\n",
        )
        .unwrap();

        let settings = Settings::load(None, temp.path()).unwrap();
        assert_eq!(settings.project.author, "ann");
    }
}
