//! Console sink implementation

use crate::core::{LogLevel, Result};
use colored::Colorize;

/// Prints formatted lines to the terminal.
///
/// Error and Critical lines go to stderr, everything else to stdout.
/// With colors enabled the whole line is tinted by the level's color.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Print one formatted line, routed by level
    pub fn print(&self, level: LogLevel, line: &str) {
        let output = if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line.to_string()
        };

        match level {
            LogLevel::Error | LogLevel::Critical => eprintln!("{}", output),
            _ => println!("{}", output),
        }
    }

    pub fn flush(&self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let sink = ConsoleSink::new();
        assert!(sink.use_colors);

        let sink = ConsoleSink::with_colors(false);
        assert!(!sink.use_colors);
    }

    #[test]
    fn test_print_does_not_panic() {
        let sink = ConsoleSink::with_colors(true);
        sink.print(LogLevel::Debug, "debug line");
        sink.print(LogLevel::Critical, "critical line");
        sink.flush().expect("flush console");
    }
}
