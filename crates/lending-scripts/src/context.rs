//! Per-run context shared by the operations
//!
//! Holds the backend that signs and confirms transactions and the registry
//! that resolves contract factories. Built once per invocation and owned by
//! that run only.

use crate::{
	core::{
		ArtifactRegistry, Config, ContractBackend, ContractFactory, Provider, RpcBackend,
		SigningIdentity, TxBuilder,
	},
	types::error::Result,
};
use alloy_primitives::Address;
use std::sync::Arc;
use tracing::{info, warn};

pub struct Context {
	backend: Arc<dyn ContractBackend>,
	artifacts: ArtifactRegistry,
}

impl Context {
	pub fn new(backend: Arc<dyn ContractBackend>, artifacts: ArtifactRegistry) -> Self {
		Self { backend, artifacts }
	}

	/// Connect to the configured network with its signing identity
	///
	/// # Errors
	/// Returns Error if the key is invalid or the node is unreachable
	pub async fn connect(config: &Config) -> Result<Self> {
		let identity = SigningIdentity::from_config(config)?;
		let provider =
			Provider::new(&config.network.rpc_url, &identity, config.network.chain_id).await?;

		if config.uses_dev_account() && !provider.chain().is_local() {
			warn!(
				chain = %provider.chain(),
				"Signing with the public development account on a non-local chain"
			);
		}

		let balance = provider.balance(identity.address()).await?;
		info!(
			network = %config.network_name,
			chain = %provider.chain(),
			deployer = %identity.address(),
			balance = %balance,
			artifacts = %config.artifacts.display(),
			"Connected"
		);

		let tx_builder = TxBuilder::new(provider)
			.with_confirmation(config.poll_interval(), config.confirmation_timeout());
		let backend = RpcBackend::new(tx_builder, identity.address());

		Ok(Self::new(
			Arc::new(backend),
			ArtifactRegistry::new(config.artifacts.clone()),
		))
	}

	pub fn backend(&self) -> &dyn ContractBackend {
		self.backend.as_ref()
	}

	pub fn artifacts(&self) -> &ArtifactRegistry {
		&self.artifacts
	}

	/// Address of the signing identity
	pub fn deployer(&self) -> Address {
		self.backend.signer_address()
	}

	/// Resolve a named contract into a deployable factory
	pub fn factory(&self, name: &str) -> Result<ContractFactory> {
		self.artifacts.factory(name)
	}
}
