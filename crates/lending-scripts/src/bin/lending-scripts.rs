//! Entry point for the lending deployment scripts
//!
//! Parses the command line, sets up logging, runs the selected script and
//! maps its result to the process exit status: 0 on success, 1 on any error.
//! Result lines reach stdout only once the whole script has succeeded.

use anyhow::{Context as _, Result};
use clap::Parser;
use lending_scripts::{
	cli::{output::Display, Cli, Commands},
	constants::{nft_fixture, token_fixture},
	core::{logging, ArtifactRegistry, Config},
	operations::{LendingOps, NftCollection, NftOps, TokenOps},
	types::records::to_json_line,
	Context,
};
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::instrument;

#[tokio::main]
async fn main() -> ExitCode {
	// Load environment variables from .env file if it exists
	let _ = dotenvy::dotenv();

	logging::init_logging();

	let cli = Cli::parse();
	let operation = cli.command.name();

	let outcome = run(cli).await;
	report(operation, outcome, &mut std::io::stdout().lock())
}

/// Writes the result lines of a successful run, or logs the failure
///
/// Nothing is written to `out` when the run failed.
fn report(operation: &str, outcome: Result<Vec<String>>, out: &mut impl Write) -> ExitCode {
	let written = outcome.and_then(|lines| {
		for line in lines {
			writeln!(out, "{}", line).context("Failed to write result")?;
		}
		out.flush().context("Failed to write result")
	});

	match written {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => {
			logging::operation_error(operation, &error);
			ExitCode::FAILURE
		},
	}
}

/// Dispatch the selected script and collect its result lines
async fn run(cli: Cli) -> Result<Vec<String>> {
	let config = Config::load(cli.config.as_deref(), cli.overrides())
		.context("Failed to load configuration")?;

	match cli.command {
		Commands::DeployLending => deploy_lending(&config).await,
		Commands::MintTestNfts => mint_test_nfts(&config).await,
		Commands::MintTestTokens => mint_test_tokens(&config).await,
		Commands::Artifacts => list_artifacts(&config),
	}
}

#[instrument(skip(config), fields(network = %config.network_name))]
async fn deploy_lending(config: &Config) -> Result<Vec<String>> {
	let ctx = Arc::new(Context::connect(config).await?);
	let address = LendingOps::new(ctx).deploy().await?;

	Ok(vec![address.to_checksum(None)])
}

#[instrument(skip(config), fields(network = %config.network_name))]
async fn mint_test_nfts(config: &Config) -> Result<Vec<String>> {
	let ctx = Arc::new(Context::connect(config).await?);
	let records = NftOps::new(ctx)
		.mint_test_nfts(&NftCollection::lil_pudgys(), &nft_fixture::TOKEN_IDS)
		.await?;

	Ok(vec![to_json_line(&records)?])
}

#[instrument(skip(config), fields(network = %config.network_name))]
async fn mint_test_tokens(config: &Config) -> Result<Vec<String>> {
	let ctx = Arc::new(Context::connect(config).await?);
	let records = TokenOps::new(ctx)
		.deploy_test_tokens(&token_fixture::SYMBOLS)
		.await?;

	Ok(vec![to_json_line(&records)?])
}

fn list_artifacts(config: &Config) -> Result<Vec<String>> {
	let registry = ArtifactRegistry::new(config.artifacts.clone());
	let names = registry.list()?;

	Display::header(&format!("Artifacts in {}", registry.root().display()));
	if names.is_empty() {
		Display::warning("No compiled contracts found; run the Solidity build first");
		return Ok(Vec::new());
	}

	let mut deployable = Vec::with_capacity(names.len());
	for name in names {
		match registry.load(&name) {
			Ok(_) => deployable.push(name),
			Err(e) => Display::warning(&format!("{}: {}", name, e)),
		}
	}
	Display::success("Listed deployable contracts");
	Ok(deployable)
}
