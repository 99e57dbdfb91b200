//! Colored terminal output.

use colored::Colorize;
use std::io::{self, Write};

/// Writes status lines to stdout/stderr honoring verbose and quiet modes.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Prints a message only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.verbose && !self.quiet {
            writeln!(io::stdout(), "{}", message.dimmed())?;
        }
        Ok(())
    }

    /// Prints a success line.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if !self.quiet {
            writeln!(io::stdout(), "{} {}", "✓".green().bold(), message)?;
        }
        Ok(())
    }

    /// Prints a warning line to stderr. Shown even in quiet mode.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        writeln!(io::stderr(), "{} {}", "⚠".yellow().bold(), message.yellow())
    }

    /// Prints an error line to stderr. Shown even in quiet mode.
    pub fn error(&self, message: &str) -> io::Result<()> {
        writeln!(io::stderr(), "{} {}", "✗".red().bold(), message)
    }

    /// Prints a progress line.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if !self.quiet {
            writeln!(io::stdout(), "{} {}", "→".cyan(), message)?;
        }
        Ok(())
    }

    /// Prints a section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if !self.quiet {
            writeln!(io::stdout(), "\n{}", title.bold().underline())?;
        }
        Ok(())
    }

    /// Prints an indented line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if !self.quiet {
            writeln!(io::stdout(), "  {message}")?;
        }
        Ok(())
    }
}
