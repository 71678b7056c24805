//! Test NFT collection deployment and minting
//!
//! Deploys one collection, then mints each requested token id to the deployer.
//! Mints are issued one at a time, each only after the previous one is
//! confirmed; records are built once every mint has succeeded.

use crate::{
	constants::{contracts, nft_fixture},
	core::logging,
	types::{error::Result, records::NftRecord},
	Context,
};
use alloy_dyn_abi::DynSolValue;
use alloy_primitives::U256;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

/// Constructor parameters of an NFT collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftCollection {
	pub name: String,
	pub symbol: String,
	/// Metadata base URI, including the trailing slash
	pub base_uri: String,
}

impl NftCollection {
	/// The collection the frontend fixtures expect
	pub fn lil_pudgys() -> Self {
		Self {
			name: nft_fixture::COLLECTION_NAME.to_string(),
			symbol: nft_fixture::COLLECTION_SYMBOL.to_string(),
			base_uri: nft_fixture::BASE_URI.to_string(),
		}
	}

	pub fn image_url(&self, token_id: u64) -> String {
		format!("{}image/{}", self.base_uri, token_id)
	}

	fn constructor_args(&self) -> Vec<DynSolValue> {
		vec![
			DynSolValue::String(self.name.clone()),
			DynSolValue::String(self.symbol.clone()),
			DynSolValue::String(self.base_uri.clone()),
		]
	}
}

/// NFT minting operations handler
pub struct NftOps {
	ctx: Arc<Context>,
}

impl NftOps {
	pub fn new(ctx: Arc<Context>) -> Self {
		Self { ctx }
	}

	/// Deploys a collection and mints every token id to the deployer
	///
	/// # Returns
	/// One record per token id, in input order
	///
	/// # Errors
	/// Returns error on the first failed deployment or mint; remaining mints
	/// are not attempted
	#[instrument(skip(self, collection), fields(collection = %collection.name))]
	pub async fn mint_test_nfts(
		&self,
		collection: &NftCollection,
		token_ids: &[u64],
	) -> Result<Vec<NftRecord>> {
		let started = Instant::now();
		logging::operation_start("mint-test-nfts", &format!("{} tokens", token_ids.len()));

		let backend = self.ctx.backend();
		let owner = self.ctx.deployer();

		let factory = self.ctx.factory(contracts::NFT)?;
		let nft = factory.deploy(backend, &collection.constructor_args()).await?;

		let total = token_ids.len();
		for (i, token_id) in token_ids.iter().enumerate() {
			let confirmation = nft
				.send(
					backend,
					"safeMint",
					&[
						DynSolValue::Address(owner),
						DynSolValue::Uint(U256::from(*token_id), 256),
					],
				)
				.await?;

			info!(token_id = token_id, tx_hash = %confirmation.tx_hash, "Minted");
			logging::operation_progress("mint-test-nfts", "safeMint", Some((i + 1, total)));
		}

		let records = token_ids
			.iter()
			.map(|token_id| NftRecord {
				address: nft.address(),
				token_id: *token_id,
				name: collection.name.clone(),
				image: collection.image_url(*token_id),
			})
			.collect();

		logging::operation_complete("mint-test-nfts", started);
		Ok(records)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::operations::test_support::{
		confirmed, context, counting_backend, deployer, rpc_failure, write_artifact,
	};
	use crate::types::Error;
	use alloy_primitives::Address;
	use serde_json::{json, Value};
	use std::sync::atomic::{AtomicU64, Ordering};
	use std::sync::Mutex;
	use tempfile::TempDir;

	fn nft_abi() -> Value {
		json!([
			{
				"type": "constructor",
				"inputs": [
					{"name": "name", "type": "string"},
					{"name": "symbol", "type": "string"},
					{"name": "baseURI", "type": "string"}
				],
				"stateMutability": "nonpayable"
			},
			{
				"type": "function",
				"name": "safeMint",
				"inputs": [
					{"name": "to", "type": "address"},
					{"name": "tokenId", "type": "uint256"}
				],
				"outputs": [],
				"stateMutability": "nonpayable"
			}
		])
	}

	#[test]
	fn test_image_url() {
		assert_eq!(
			NftCollection::lil_pudgys().image_url(4314),
			"https://api.pudgypenguins.io/lil/image/4314"
		);
	}

	#[tokio::test]
	async fn test_mints_in_order_to_deployer() {
		let temp_dir = TempDir::new().unwrap();
		write_artifact(temp_dir.path(), "NFT", nft_abi());

		let minted = Arc::new(Mutex::new(Vec::new()));
		let mut backend = counting_backend(500);
		let collection_address = Address::left_padding_from(&500u64.to_be_bytes());
		let log = minted.clone();
		backend
			.expect_transact()
			.withf(move |to, _| *to == collection_address)
			.times(4)
			.returning(move |_, input| {
				// safeMint(address,uint256): selector, recipient word, token id word
				let recipient = Address::from_slice(&input[16..36]);
				let token_id = U256::from_be_slice(&input[36..68]);
				log.lock().unwrap().push((recipient, token_id));
				Box::pin(async move { Ok(confirmed(1, None)) })
			});

		let ctx = context(backend, temp_dir.path());
		let records = NftOps::new(ctx)
			.mint_test_nfts(&NftCollection::lil_pudgys(), &nft_fixture::TOKEN_IDS)
			.await
			.unwrap();

		assert_eq!(records.len(), nft_fixture::TOKEN_IDS.len());
		for (record, token_id) in records.iter().zip(nft_fixture::TOKEN_IDS) {
			assert_eq!(record.token_id, token_id);
			assert_eq!(record.address, collection_address);
			assert_eq!(record.name, "LilPudgys");
			assert_eq!(
				record.image,
				format!("https://api.pudgypenguins.io/lil/image/{}", token_id)
			);
		}

		let minted = minted.lock().unwrap();
		let expected: Vec<_> = nft_fixture::TOKEN_IDS
			.iter()
			.map(|id| (deployer(), U256::from(*id)))
			.collect();
		assert_eq!(*minted, expected);
	}

	#[tokio::test]
	async fn test_third_mint_failure_aborts() {
		let temp_dir = TempDir::new().unwrap();
		write_artifact(temp_dir.path(), "NFT", nft_abi());

		let calls = Arc::new(AtomicU64::new(0));
		let mut backend = counting_backend(1);
		let counter = calls.clone();
		backend.expect_transact().returning(move |_, _| {
			let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
			Box::pin(async move {
				if n == 3 {
					Err(rpc_failure())
				} else {
					Ok(confirmed(n, None))
				}
			})
		});

		let result = NftOps::new(context(backend, temp_dir.path()))
			.mint_test_nfts(&NftCollection::lil_pudgys(), &nft_fixture::TOKEN_IDS)
			.await;

		assert!(matches!(
			result,
			Err(Error::ContractCallFailed { ref method, .. }) if method == "safeMint"
		));
		// The fourth mint is never submitted
		assert_eq!(calls.load(Ordering::SeqCst), 3);
	}

	#[tokio::test]
	async fn test_collection_deploy_failure_skips_mints() {
		let temp_dir = TempDir::new().unwrap();
		write_artifact(temp_dir.path(), "NFT", nft_abi());

		let mut backend = crate::core::backend::MockContractBackend::new();
		backend.expect_signer_address().return_const(deployer());
		backend
			.expect_deploy()
			.returning(|_| Box::pin(async move { Err(rpc_failure()) }));
		backend.expect_transact().never();

		let result = NftOps::new(context(backend, temp_dir.path()))
			.mint_test_nfts(&NftCollection::lil_pudgys(), &nft_fixture::TOKEN_IDS)
			.await;
		assert!(result.is_err());
	}
}
