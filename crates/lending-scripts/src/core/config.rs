//! Network configuration loading
//!
//! Configuration comes from an optional TOML file holding a map of named
//! networks, then from environment variables and command-line flags (both
//! collected into [`Overrides`] by the CLI layer). Without a file the scripts
//! target a local development node with the well-known account #0.

use crate::{
	constants::{self, dev_accounts},
	types::error::{Error, Result},
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for one named network
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkConfig {
	pub rpc_url: String,
	/// Expected chain id; checked against the node when set
	#[serde(default)]
	pub chain_id: Option<u64>,
	#[serde(default)]
	pub private_key: Option<String>,
	#[serde(default = "default_confirmation_timeout")]
	pub confirmation_timeout_secs: u64,
	#[serde(default = "default_poll_interval")]
	pub poll_interval_ms: u64,
}

fn default_confirmation_timeout() -> u64 {
	constants::DEFAULT_CONFIRMATION_TIMEOUT_SECS
}

fn default_poll_interval() -> u64 {
	constants::DEFAULT_POLL_INTERVAL_MS
}

fn default_network_name() -> String {
	constants::DEFAULT_NETWORK.to_string()
}

fn default_artifacts() -> PathBuf {
	PathBuf::from(constants::DEFAULT_ARTIFACTS_DIR)
}

impl NetworkConfig {
	/// Local development node at the default endpoint
	pub fn local() -> Self {
		Self {
			rpc_url: constants::DEFAULT_RPC_URL.to_string(),
			chain_id: None,
			private_key: None,
			confirmation_timeout_secs: default_confirmation_timeout(),
			poll_interval_ms: default_poll_interval(),
		}
	}
}

/// On-disk layout of the configuration file
#[derive(Debug, Deserialize)]
struct ConfigFile {
	#[serde(default = "default_network_name")]
	default_network: String,
	#[serde(default = "default_artifacts")]
	artifacts: PathBuf,
	#[serde(default)]
	networks: HashMap<String, NetworkConfig>,
}

impl Default for ConfigFile {
	fn default() -> Self {
		Self {
			default_network: default_network_name(),
			artifacts: default_artifacts(),
			networks: HashMap::new(),
		}
	}
}

/// Values that take precedence over the configuration file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	pub network: Option<String>,
	pub rpc_url: Option<String>,
	pub private_key: Option<String>,
	pub artifacts: Option<PathBuf>,
}

/// Resolved configuration for a single script run
#[derive(Debug, Clone)]
pub struct Config {
	pub network_name: String,
	pub network: NetworkConfig,
	pub artifacts: PathBuf,
}

impl Config {
	/// Load configuration from a file path
	///
	/// An explicitly given path must exist. Without one, the default file name
	/// is tried in the working directory and the built-in local network is used
	/// when it is absent.
	///
	/// # Errors
	/// Returns Error if the file is missing, unreadable, or does not describe
	/// the selected network
	pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
		let (path, explicit) = match path {
			Some(path) => (path.to_path_buf(), true),
			None => (PathBuf::from(constants::DEFAULT_CONFIG_FILE), false),
		};

		if !path.exists() {
			if explicit {
				return Err(Error::ConfigNotFound(path));
			}
			return Self::resolve(ConfigFile::default(), overrides);
		}

		let content = std::fs::read_to_string(&path)?;
		Self::from_toml(&content, overrides)
	}

	/// Parse configuration from TOML content
	///
	/// # Errors
	/// Returns Error if the TOML is malformed or the selected network is unknown
	pub fn from_toml(content: &str, overrides: Overrides) -> Result<Self> {
		let file: ConfigFile = toml::from_str(content)?;
		Self::resolve(file, overrides)
	}

	fn resolve(mut file: ConfigFile, overrides: Overrides) -> Result<Self> {
		// The local network is always available, even if the file omits it
		file.networks
			.entry(constants::DEFAULT_NETWORK.to_string())
			.or_insert_with(NetworkConfig::local);

		let network_name = overrides.network.unwrap_or(file.default_network);
		let mut network = file
			.networks
			.remove(&network_name)
			.ok_or_else(|| Error::NetworkNotFound(network_name.clone()))?;

		if let Some(rpc_url) = overrides.rpc_url {
			network.rpc_url = rpc_url;
		}
		if let Some(private_key) = overrides.private_key {
			network.private_key = Some(private_key);
		}

		let config = Self {
			network_name,
			network,
			artifacts: overrides.artifacts.unwrap_or(file.artifacts),
		};
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<()> {
		if self.network.rpc_url.trim().is_empty() {
			return Err(Error::InvalidConfig(format!(
				"network {} has an empty rpc_url",
				self.network_name
			)));
		}
		if self.network.confirmation_timeout_secs == 0 {
			return Err(Error::InvalidConfig(
				"confirmation_timeout_secs must be greater than zero".to_string(),
			));
		}
		if self.network.poll_interval_ms == 0 {
			return Err(Error::InvalidConfig(
				"poll_interval_ms must be greater than zero".to_string(),
			));
		}
		Ok(())
	}

	/// Private key used to sign, falling back to the development account
	pub fn private_key(&self) -> &str {
		self.network
			.private_key
			.as_deref()
			.unwrap_or(dev_accounts::DEPLOYER_PRIVATE_KEY)
	}

	/// Whether the signer is the well-known development account
	pub fn uses_dev_account(&self) -> bool {
		self.network.private_key.is_none()
	}

	pub fn confirmation_timeout(&self) -> Duration {
		Duration::from_secs(self.network.confirmation_timeout_secs)
	}

	pub fn poll_interval(&self) -> Duration {
		Duration::from_millis(self.network.poll_interval_ms)
	}
}
