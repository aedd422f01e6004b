//! Status messages and their severity levels
//!
//! The CLI prints them on stdout/stderr; the terminal browser shows them in
//! its status bar.

use colored::Colorize;

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Results; never suppressed
    Normal,
    Error,
    Success,
    Warning,
    /// Secondary text, hidden in quiet mode
    Info,
}

impl MessageLevel {
    /// Symbol put in front of the message text
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Normal | Self::Info => "",
            Self::Error => "✗ ",
            Self::Success => "✓ ",
            Self::Warning => "⚠ ",
        }
    }

    /// Whether the message belongs on stderr
    #[must_use]
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, Self::Error | Self::Warning)
    }
}

/// Sink for user-facing messages
///
/// # Examples
///
/// ```no_run
/// use cookbook::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("Tarte aux pommes");
/// output.error("Erreur de chargement des recettes.");
/// ```
pub trait OutputWriter {
    /// Emit one message
    fn emit(&self, level: MessageLevel, message: &str);

    fn write(&self, message: &str) {
        self.emit(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.emit(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.emit(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.emit(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.emit(MessageLevel::Info, message);
    }
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode, success and info messages are suppressed; results and
/// diagnostics are always shown.
#[derive(Debug, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Colored line for `message`, or `None` when quiet mode hides it
    #[must_use]
    pub fn render(&self, level: MessageLevel, message: &str) -> Option<String> {
        let line = match level {
            MessageLevel::Normal => message.to_string(),
            MessageLevel::Error => format!("{}{message}", level.prefix()).red().to_string(),
            MessageLevel::Warning => format!("{}{message}", level.prefix()).yellow().to_string(),
            MessageLevel::Success if !self.quiet => {
                format!("{}{message}", level.prefix().green())
            }
            MessageLevel::Info if !self.quiet => message.dimmed().to_string(),
            MessageLevel::Success | MessageLevel::Info => return None,
        };
        Some(line)
    }
}

impl OutputWriter for StdoutWriter {
    fn emit(&self, level: MessageLevel, message: &str) {
        let Some(line) = self.render(level, message) else {
            return;
        };
        if level.is_diagnostic() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}
