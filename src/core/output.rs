//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Errors go to stderr so `--json` output stays parseable when something fails.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an informational message with consistent styling
///
/// # Format
/// ```text
///
/// <message>
///
/// ```
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}
