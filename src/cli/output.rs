//! Terminal output for release runs.

use anstyle::{AnsiColor, Color, Style};
use std::io::IsTerminal;

const HEADER: Style = Style::new().bold();
const PROGRESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
const SUCCESS: Style = Style::new()
    .bold()
    .fg_color(Some(Color::Ansi(AnsiColor::Green)));
const WARNING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const ERROR: Style = Style::new()
    .bold()
    .fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Prints release progress, colored when attached to a terminal.
///
/// Quiet mode suppresses everything except errors.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    color: bool,
    stderr_color: bool,
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            color: std::io::stdout().is_terminal(),
            stderr_color: std::io::stderr().is_terminal(),
        }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        paint(self.color, style, text)
    }

    fn paint_stderr(&self, style: Style, text: &str) -> String {
        paint(self.stderr_color, style, text)
    }

    /// Detail line, shown only in verbose mode.
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("  {}", message);
        }
    }

    /// Step announcement.
    pub fn progress(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", self.paint(PROGRESS, "→"), message);
        }
    }

    /// Completion line.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", self.paint(SUCCESS, "✓"), message);
        }
    }

    /// Warning, on stderr.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", self.paint_stderr(WARNING, "⚠"), message);
        }
    }

    /// Error, on stderr. Printed even in quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", self.paint_stderr(ERROR, "✗"), message);
    }

    /// Section header.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!("{}", self.paint(HEADER, title));
        }
    }

    /// Indented detail under the previous line.
    pub fn indent(&self, message: &str) {
        if !self.quiet {
            println!("    {}", message);
        }
    }
}

fn paint(color: bool, style: Style, text: &str) -> String {
    if color {
        format!("{}{}{}", style.render(), text, style.render_reset())
    } else {
        text.to_string()
    }
}
