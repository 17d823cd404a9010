//! Basic logger usage example
//!
//! Demonstrates logging at different levels, console mirroring, and the
//! token template that shapes every line.
//!
//! Run with: cargo run --example basic_usage

use template_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Template Logger - Basic Usage Example ===\n");

    // Create a logger writing to app.log in append mode
    let logger = Logger::new("app.log");

    println!("1. Logging at different levels (file only):");
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warn("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.critical("This is a critical message")?;

    println!("\n2. Mirroring lines to the console:");
    logger.log(LogLevel::Info, "Visible on console and in the file", Sinks::BOTH)?;
    logger.log(LogLevel::Error, "Errors go to stderr on the console", Sinks::BOTH)?;

    println!("\n3. Swapping the template:");
    logger.set_template("%level% | %message%")?;
    logger.log(LogLevel::Info, "Leaner line shape", Sinks::BOTH)?;

    // A template without %message% is rejected; the active one survives
    let rejected = logger.set_template("[%asctime%] [%level%]");
    println!("   Rejected template: {}", rejected.unwrap_err());
    logger.log(LogLevel::Info, "Still using the previous template", Sinks::BOTH)?;

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'app.log' for the full log output");

    Ok(())
}
