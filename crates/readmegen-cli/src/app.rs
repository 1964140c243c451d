//! CLI Application logic
//!
//! Contains the command-line interface implementation. The README file on
//! disk plays the part of the output text area: `generate` writes it, and
//! `preview`, `copy` and `export` read whatever it currently holds,
//! including hand edits.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use readmegen_core::{
    standalone_page, Clipboard, CopyOutcome, DownloadSink, ExportOutcome, FormFields, Notifier,
    Session,
};

use crate::clipboard::{Osc52Clipboard, SystemClipboard};
use crate::config::{Settings, CONFIG_FILE_NAME};
use crate::host::{DirectorySink, TerminalNotifier};

/// Title of standalone preview pages
const PREVIEW_PAGE_TITLE: &str = "README preview";

#[derive(Parser)]
#[command(name = "readmegen")]
#[command(author, version, about = "Generate a README.md from project metadata", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./readmegen.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Form values given on the command line; each overrides the config file
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Start from the sample project instead of the config file
    #[arg(long)]
    pub sample: bool,

    /// Project name
    #[arg(long)]
    pub name: Option<String>,

    /// One-line description
    #[arg(long)]
    pub description: Option<String>,

    /// Installation command
    #[arg(long)]
    pub install: Option<String>,

    /// Usage text
    #[arg(long)]
    pub usage: Option<String>,

    /// Comma-separated feature list
    #[arg(long)]
    pub features: Option<String>,

    /// License name
    #[arg(long)]
    pub license: Option<String>,

    /// Author profile handle
    #[arg(long)]
    pub author: Option<String>,
}

impl FieldArgs {
    /// Overlay the flags onto `base`
    pub fn apply(&self, base: &FormFields) -> FormFields {
        let mut fields = if self.sample {
            FormFields::sample()
        } else {
            base.clone()
        };

        let overrides = [
            (&self.name, &mut fields.name),
            (&self.description, &mut fields.description),
            (&self.install, &mut fields.install_command),
            (&self.usage, &mut fields.usage_text),
            (&self.features, &mut fields.features_raw),
            (&self.license, &mut fields.license),
            (&self.author, &mut fields.author),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = value.clone();
            }
        }
        fields
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a README from the config file and flags
    Generate {
        #[command(flatten)]
        fields: FieldArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write the HTML preview to this file
        #[arg(long)]
        preview: Option<PathBuf>,

        /// Wrap the preview in a complete HTML page
        #[arg(long)]
        standalone: bool,
    },

    /// Render a README to preview HTML
    Preview {
        /// Input Markdown file (defaults to the configured README)
        input: Option<PathBuf>,

        #[command(flatten)]
        fields: FieldArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the preview in a complete HTML page
        #[arg(long)]
        standalone: bool,
    },

    /// Copy a README to the clipboard
    Copy {
        /// Input Markdown file (defaults to the configured README)
        input: Option<PathBuf>,
    },

    /// Save a README as README.md in a directory
    Export {
        /// Input Markdown file (defaults to the configured README)
        input: Option<PathBuf>,

        /// Target directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Write a readmegen.toml filled with sample values
    Init {
        /// Output file
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments, loads the configuration and dispatches to the
/// appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let load_settings = || Settings::load(cli.config.as_deref(), Path::new("."));

    match cli.command {
        Commands::Generate {
            fields,
            output,
            preview,
            standalone,
        } => {
            let settings = load_settings()?;
            let markdown = generate_command(
                &settings,
                &fields,
                output.as_deref(),
                preview.as_deref(),
                standalone,
            )?;
            if output.is_none() {
                println!("{}", markdown);
            }
        }
        Commands::Preview {
            input,
            fields,
            output,
            standalone,
        } => {
            let settings = load_settings()?;
            let html =
                preview_command(&settings, &fields, input.as_deref(), output.as_deref(), standalone)?;
            if output.is_none() {
                println!("{}", html);
            }
        }
        Commands::Copy { input } => {
            let settings = load_settings()?;
            let mut primary = SystemClipboard::detect();
            let mut fallback = Osc52Clipboard::stdout();
            copy_command(
                &settings,
                input.as_deref(),
                &mut primary,
                &mut fallback,
                &mut TerminalNotifier,
            )?;
        }
        Commands::Export { input, dir } => {
            let settings = load_settings()?;
            let mut sink = DirectorySink::new(dir);
            if export_command(&settings, input.as_deref(), &mut sink, &mut TerminalNotifier)?
                == ExportOutcome::Emitted
            {
                for path in sink.written() {
                    eprintln!("  Created: {}", path.display());
                }
            }
        }
        Commands::Init { output, force } => {
            init_command(&output, force)?;
        }
    }

    Ok(())
}

fn session_for(settings: &Settings, fields: &FieldArgs) -> Session {
    let mut session = Session::with_config(settings.assembler_config());
    session.fields = fields.apply(&settings.project);
    session
}

/// Execute the generate command
///
/// Returns the assembled Markdown. It is written to `output` when given;
/// printing it otherwise is left to the caller.
pub fn generate_command(
    settings: &Settings,
    fields: &FieldArgs,
    output: Option<&Path>,
    preview: Option<&Path>,
    standalone: bool,
) -> Result<String> {
    let mut session = session_for(settings, fields);
    let markdown = session.generate().to_string();
    info!(name = session.fields.name_or_default(), "assembled README");

    if let Some(path) = output {
        fs::write(path, &markdown)
            .with_context(|| format!("Failed to write README: {}", path.display()))?;
        eprintln!("  Created: {}", path.display());
    }

    if let Some(path) = preview.or(settings.output.preview.as_deref()) {
        let html = page(&session.preview().html, standalone);
        fs::write(path, html)
            .with_context(|| format!("Failed to write preview: {}", path.display()))?;
        eprintln!("  Created: {}", path.display());
    }

    Ok(markdown)
}

/// Execute the preview command
///
/// Renders the README text, or a fresh assembly from the config file and
/// flags when the README is empty or absent.
pub fn preview_command(
    settings: &Settings,
    fields: &FieldArgs,
    input: Option<&Path>,
    output: Option<&Path>,
    standalone: bool,
) -> Result<String> {
    let mut session = session_for(settings, fields);
    session.set_output(read_text_surface(settings, input)?);
    session.toggle_preview();

    let html = page(&session.preview().html, standalone);
    if let Some(path) = output {
        fs::write(path, &html)
            .with_context(|| format!("Failed to write preview: {}", path.display()))?;
        eprintln!("  Created: {}", path.display());
    }
    Ok(html)
}

/// Execute the copy command
pub fn copy_command(
    settings: &Settings,
    input: Option<&Path>,
    primary: &mut dyn Clipboard,
    fallback: &mut dyn Clipboard,
    notifier: &mut dyn Notifier,
) -> Result<CopyOutcome> {
    let mut session = Session::new();
    session.set_output(read_text_surface(settings, input)?);
    let outcome = session.copy(primary, fallback, notifier);
    debug!(?outcome, "copy finished");
    Ok(outcome)
}

/// Execute the export command
pub fn export_command(
    settings: &Settings,
    input: Option<&Path>,
    sink: &mut dyn DownloadSink,
    notifier: &mut dyn Notifier,
) -> Result<ExportOutcome> {
    let mut session = Session::new();
    session.set_output(read_text_surface(settings, input)?);
    session
        .download(sink, notifier)
        .context("Failed to export README")
}

/// Execute the init command
pub fn init_command(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}\n\
             \n\
             Use --force to overwrite it.",
            output.display()
        );
    }

    let content = Settings::sample()
        .to_toml_string()
        .context("Failed to serialize sample config")?;
    fs::write(output, content)
        .with_context(|| format!("Failed to write config file: {}", output.display()))?;
    eprintln!("  Created: {}", output.display());
    Ok(())
}

/// Read the README that stands in for the output text area.
///
/// An explicitly named file must exist. The configured default may be
/// missing, which reads as empty text.
fn read_text_surface(settings: &Settings, input: Option<&Path>) -> Result<String> {
    let path = match input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            path
        }
        None => {
            let path = settings.output.readme.as_path();
            if !path.exists() {
                debug!(path = %path.display(), "no README yet");
                return Ok(String::new());
            }
            path
        }
    };

    fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path.display()))
}

fn page(html: &str, standalone: bool) -> String {
    if standalone {
        standalone_page(PREVIEW_PAGE_TITLE, html)
    } else {
        html.to_string()
    }
}
