//! Terminal output utilities
//!
//! Status lines go to stderr; stdout is left to the script's result line
//! (an address or a JSON array), so it can be captured directly.

use colored::Colorize;

pub struct Display;

impl Display {
	/// Displays a formatted section header with underline
	pub fn header(text: &str) {
		eprintln!("\n{}", text.bold().cyan());
		eprintln!("{}", "─".repeat(text.chars().count()).cyan());
	}

	/// Displays a success message with green checkmark
	pub fn success(message: &str) {
		eprintln!("{} {}", "✓".green().bold(), message);
	}

	/// Displays an error message with red X symbol
	pub fn error(message: &str) {
		eprintln!("{} {}", "✗".red().bold(), message.red());
	}

	/// Displays a warning message with yellow warning symbol
	pub fn warning(message: &str) {
		eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
	}
}
