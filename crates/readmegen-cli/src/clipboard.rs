//! Terminal clipboard backends
//!
//! The primary backend pipes text into the platform's clipboard helper
//! (`pbcopy`, `clip`, `wl-copy` or `xclip`). The fallback writes an
//! OSC 52 escape sequence, which most terminal emulators turn into a
//! clipboard write, including over SSH.

use std::env;
use std::io::{self, IsTerminal, Write};
use std::process::{Command, Stdio};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use readmegen_core::{Clipboard, ReadmeError, Result};
use tracing::debug;

/// External helper program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    /// Program name
    pub program: String,
    /// Program arguments
    pub args: Vec<String>,
}

impl ClipboardCommand {
    fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    /// Pick the helper for this host from the OS and display environment
    pub fn detect() -> Option<Self> {
        if cfg!(target_os = "macos") {
            return Some(Self::new("pbcopy", &[]));
        }
        if cfg!(windows) {
            return Some(Self::new("clip", &[]));
        }
        Self::detect_unix(|name| env::var_os(name).is_some())
    }

    fn detect_unix(has_var: impl Fn(&str) -> bool) -> Option<Self> {
        if has_var("WAYLAND_DISPLAY") {
            Some(Self::new("wl-copy", &[]))
        } else if has_var("DISPLAY") {
            Some(Self::new("xclip", &["-selection", "clipboard"]))
        } else {
            None
        }
    }
}

/// Clipboard helper process
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    command: Option<ClipboardCommand>,
}

impl SystemClipboard {
    /// Use the helper detected for this host
    pub fn detect() -> Self {
        Self {
            command: ClipboardCommand::detect(),
        }
    }

    /// Use a specific helper
    pub fn with_command(command: ClipboardCommand) -> Self {
        Self {
            command: Some(command),
        }
    }
}

impl Clipboard for SystemClipboard {
    fn name(&self) -> &str {
        self.command
            .as_ref()
            .map(|command| command.program.as_str())
            .unwrap_or("system")
    }

    fn is_available(&self) -> bool {
        self.command.is_some()
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        let command = self
            .command
            .as_ref()
            .ok_or_else(|| ReadmeError::ClipboardUnavailable("no clipboard helper".to_string()))?;

        debug!(program = %command.program, "spawning clipboard helper");
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                ReadmeError::ClipboardUnavailable(format!("{}: {}", command.program, e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(err) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(ReadmeError::ClipboardWrite(format!(
                    "{}: {}",
                    command.program, err
                )));
            }
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(ReadmeError::ClipboardWrite(format!(
                "{} exited with {}",
                command.program, status
            )));
        }
        Ok(())
    }
}

/// OSC 52 clipboard write
pub struct Osc52Clipboard<W: Write> {
    writer: W,
    is_terminal: bool,
}

impl Osc52Clipboard<io::Stdout> {
    /// Write to stdout, only when stdout is a terminal
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let is_terminal = stdout.is_terminal();
        Self {
            writer: stdout,
            is_terminal,
        }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    /// Write to an arbitrary sink, treated as a terminal
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            is_terminal: true,
        }
    }

    /// Consume the backend and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Escape sequence asking the terminal to set the clipboard to `text`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn name(&self) -> &str {
        "osc52"
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        if !self.is_terminal {
            return Err(ReadmeError::ClipboardUnavailable(
                "stdout is not a terminal".to_string(),
            ));
        }
        self.writer.write_all(osc52_sequence(text).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
