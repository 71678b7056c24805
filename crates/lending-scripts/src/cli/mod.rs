//! Command-line interface definitions and parsing
//!
//! Each script is a subcommand without arguments. Global flags select the
//! network and artifacts; they fall back to environment variables and then
//! to the configuration file.

pub mod output;

use crate::{constants::env_vars, core::config::Overrides};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lending-scripts")]
#[command(about = "Deploy the NFT lending contract and mint test fixtures")]
#[command(version)]
pub struct Cli {
	/// Network configuration file (defaults to ./lending.toml when present)
	#[arg(short, long, global = true, env = "LENDING_CONFIG")]
	pub config: Option<PathBuf>,

	/// Named network from the configuration file
	#[arg(short, long, global = true, env = env_vars::NETWORK)]
	pub network: Option<String>,

	/// RPC endpoint, overriding the selected network's
	#[arg(long, global = true, env = env_vars::RPC_URL)]
	pub rpc_url: Option<String>,

	/// Root directory of the compiled contract artifacts
	#[arg(long, global = true, env = env_vars::ARTIFACTS)]
	pub artifacts: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
	/// Deploy the NftLending contract and print its address
	DeployLending,

	/// Deploy the LilPudgys test collection, mint the fixture ids, print JSON records
	MintTestNfts,

	/// Deploy the wBTC/wETH/USDT/USDC test tokens, print JSON records
	MintTestTokens,

	/// List contracts available in the artifacts directory
	Artifacts,
}

impl Commands {
	/// Operation name used in logs and error messages
	pub fn name(&self) -> &'static str {
		match self {
			Self::DeployLending => "deploy-lending",
			Self::MintTestNfts => "mint-test-nfts",
			Self::MintTestTokens => "mint-test-tokens",
			Self::Artifacts => "artifacts",
		}
	}
}

impl Cli {
	/// Configuration overrides from flags and the signing key environment variable
	pub fn overrides(&self) -> Overrides {
		Overrides {
			network: self.network.clone(),
			rpc_url: self.rpc_url.clone(),
			private_key: std::env::var(env_vars::DEPLOYER_PRIVATE_KEY)
				.ok()
				.filter(|key| !key.trim().is_empty()),
			artifacts: self.artifacts.clone(),
		}
	}
}
