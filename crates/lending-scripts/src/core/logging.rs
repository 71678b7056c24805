//! Logging setup and structured operation logging
//!
//! Logs are written to stderr: stdout is reserved for the single result line
//! each script prints, so it can be piped into other tooling.

use crate::cli::output::Display;
use std::time::{Duration, Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging with configurable verbosity
///
/// Controlled via RUST_LOG, defaulting to info for this crate and warn for
/// dependencies.
pub fn init_logging() {
	use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("lending_scripts=info,warn"));

	tracing_subscriber::registry()
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(true)
				.with_thread_ids(false)
				.with_file(false)
				.with_line_number(false)
				.compact(),
		)
		.with(env_filter)
		.init();
}

/// Log operation start with structured context
pub fn operation_start(operation: &str, context: &str) {
	info!(operation = operation, context = context, "Operation started");
}

/// Progress update for multi-transaction operations
///
/// # Arguments
/// * `operation` - Name of the operation in progress
/// * `step` - Current step description
/// * `progress` - Optional progress tuple (current, total)
pub fn operation_progress(operation: &str, step: &str, progress: Option<(usize, usize)>) {
	match progress {
		Some((current, total)) => {
			info!(
				operation = operation,
				step = step,
				current = current,
				total = total,
				"Operation progress"
			);
		},
		None => {
			info!(operation = operation, step = step, "Operation step");
		},
	}
}

/// Log operation completion with the time elapsed since `started`
pub fn operation_complete(operation: &str, started: Instant) {
	info!(
		operation = operation,
		duration_ms = duration_ms(started.elapsed()),
		"Operation completed"
	);
}

/// Whole milliseconds in `elapsed`, saturating at `u64::MAX`
fn duration_ms(elapsed: Duration) -> u64 {
	u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Operation failure with both user and developer logging
///
/// Prints the full error chain to stderr and records it in the logs.
pub fn operation_error(operation: &str, error: &anyhow::Error) {
	Display::error(&format!("{} failed: {:#}", operation, error));
	error!(
		operation = operation,
		error = %error,
		"Operation failed"
	);
}
