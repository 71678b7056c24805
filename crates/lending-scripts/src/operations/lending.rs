//! Lending contract deployment
//!
//! Deploys a single `NftLending` instance. The contract takes no constructor
//! arguments.

use crate::{
	constants::contracts,
	core::logging,
	types::error::Result,
	Context,
};
use alloy_primitives::Address;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

/// Lending contract deployment handler
pub struct LendingOps {
	ctx: Arc<Context>,
}

impl LendingOps {
	pub fn new(ctx: Arc<Context>) -> Self {
		Self { ctx }
	}

	/// Deploys the lending contract and returns its confirmed address
	///
	/// # Errors
	/// Returns error if the artifact cannot be resolved or the deployment
	/// is rejected or reverts
	#[instrument(skip(self))]
	pub async fn deploy(&self) -> Result<Address> {
		let started = Instant::now();
		logging::operation_start("deploy-lending", contracts::NFT_LENDING);

		let factory = self.ctx.factory(contracts::NFT_LENDING)?;
		let lending = factory.deploy(self.ctx.backend(), &[]).await?;
		info!(
			address = %lending.address(),
			block = ?lending.deployment().block_number,
			"Lending contract ready"
		);

		logging::operation_complete("deploy-lending", started);
		Ok(lending.address())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::backend::MockContractBackend;
	use crate::operations::test_support::{context, counting_backend, rpc_failure, write_artifact};
	use crate::types::Error;
	use serde_json::json;
	use tempfile::TempDir;

	#[tokio::test]
	async fn test_deploy_lending() {
		let temp_dir = TempDir::new().unwrap();
		write_artifact(temp_dir.path(), "NftLending", json!([]));

		let ctx = context(counting_backend(100), temp_dir.path());
		let address = LendingOps::new(ctx).deploy().await.unwrap();

		assert_eq!(address, Address::left_padding_from(&100u64.to_be_bytes()));
	}

	#[tokio::test]
	async fn test_redeploy_yields_new_address() {
		let temp_dir = TempDir::new().unwrap();
		write_artifact(temp_dir.path(), "NftLending", json!([]));

		let ops = LendingOps::new(context(counting_backend(1), temp_dir.path()));
		let first = ops.deploy().await.unwrap();
		let second = ops.deploy().await.unwrap();

		assert_ne!(first, second);
	}

	#[tokio::test]
	async fn test_missing_artifact_submits_nothing() {
		let temp_dir = TempDir::new().unwrap();
		let mut backend = MockContractBackend::new();
		backend.expect_deploy().never();

		let err = LendingOps::new(context(backend, temp_dir.path()))
			.deploy()
			.await
			.unwrap_err();
		assert!(matches!(err, Error::ArtifactNotFound(..)));
	}

	#[tokio::test]
	async fn test_reverted_deployment() {
		let temp_dir = TempDir::new().unwrap();
		write_artifact(temp_dir.path(), "NftLending", json!([]));

		let mut backend = MockContractBackend::new();
		backend
			.expect_deploy()
			.times(1)
			.returning(|_| Box::pin(async move { Err(rpc_failure()) }));

		let result = LendingOps::new(context(backend, temp_dir.path())).deploy().await;
		assert!(matches!(result, Err(Error::RpcError(_))));
	}
}
