//! File logging example
//!
//! Demonstrates the identity tokens, the logging macros, and what happens
//! when the log file cannot be opened.
//!
//! Run with: cargo run --example file_logging

use template_logger::prelude::*;
use template_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Template Logger - File Logging Example ===\n");

    println!("1. Identity tokens resolved from the operating system:");
    let logger = Logger::new("application.log")
        .with_template("[%asctime%] %login%@%device% [%level%]: %message%")?;

    logger.info("Application started")?;
    logger.debug("Loading configuration...")?;
    logger.info("Configuration loaded successfully")?;
    logger.warn("Using default settings for some options")?;

    println!("2. Logging through the macros:");
    for i in 1..=5 {
        info!(logger, "Processing item {}/5", i)?;
        if i == 3 {
            warn!(logger, "Item {} took longer than expected", i)?;
        }
    }

    logger.info("All operations completed")?;
    logger.flush()?;

    println!("3. A logger with an unwritable path stays usable:");
    let broken = Logger::new("/nonexistent-dir/sub/app.log");
    match broken.log(LogLevel::Info, "Never reaches a file", Sinks::BOTH) {
        Ok(()) => println!("   unexpected success"),
        Err(e) => println!("   file delivery failed as expected: {}", e),
    }
    // Console-only delivery still works
    broken.log(LogLevel::Info, "Console keeps working", Sinks::CONSOLE)?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
