//! Test ERC20 token deployment
//!
//! Deploys one `Token` instance per symbol, using the symbol as both name and
//! symbol. Deployments are sequential; records are only built after all of
//! them are confirmed.

use crate::{
	constants::{self, contracts},
	core::logging,
	types::{error::Result, records::TokenRecord},
	Context,
};
use alloy_dyn_abi::DynSolValue;
use std::sync::Arc;
use std::time::Instant;
use tracing::instrument;

/// Token deployment operations handler
pub struct TokenOps {
	ctx: Arc<Context>,
}

impl TokenOps {
	pub fn new(ctx: Arc<Context>) -> Self {
		Self { ctx }
	}

	/// Deploys one token contract per symbol
	///
	/// # Returns
	/// One record per symbol, in input order
	///
	/// # Errors
	/// Returns error on the first failed deployment; remaining symbols are
	/// not deployed
	#[instrument(skip(self))]
	pub async fn deploy_test_tokens(&self, symbols: &[&str]) -> Result<Vec<TokenRecord>> {
		let started = Instant::now();
		logging::operation_start("mint-test-tokens", &symbols.join(","));

		let factory = self.ctx.factory(contracts::TOKEN)?;
		let total = symbols.len();
		let mut addresses = Vec::with_capacity(symbols.len());

		for (i, symbol) in symbols.iter().enumerate() {
			let args = [
				DynSolValue::String(symbol.to_string()),
				DynSolValue::String(symbol.to_string()),
			];
			let token = factory.deploy(self.ctx.backend(), &args).await?;
			addresses.push(token.address());

			logging::operation_progress("mint-test-tokens", symbol, Some((i + 1, total)));
		}

		let records = symbols
			.iter()
			.zip(addresses)
			.map(|(symbol, address)| TokenRecord {
				symbol: symbol.to_string(),
				address,
				decimals: constants::DEFAULT_TOKEN_DECIMALS,
			})
			.collect();

		logging::operation_complete("mint-test-tokens", started);
		Ok(records)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::constants::token_fixture;
	use crate::core::backend::MockContractBackend;
	use crate::operations::test_support::{
		confirmed, context, counting_backend, rpc_failure, write_artifact,
	};
	use alloy_primitives::Address;
	use serde_json::{json, Value};
	use std::collections::HashSet;
	use std::sync::atomic::{AtomicU64, Ordering};
	use tempfile::TempDir;

	fn token_abi() -> Value {
		json!([{
			"type": "constructor",
			"inputs": [
				{"name": "name", "type": "string"},
				{"name": "symbol", "type": "string"}
			],
			"stateMutability": "nonpayable"
		}])
	}

	#[tokio::test]
	async fn test_deploys_one_token_per_symbol() {
		let temp_dir = TempDir::new().unwrap();
		write_artifact(temp_dir.path(), "Token", token_abi());

		let ctx = context(counting_backend(1), temp_dir.path());
		let records = TokenOps::new(ctx)
			.deploy_test_tokens(&token_fixture::SYMBOLS)
			.await
			.unwrap();

		assert_eq!(records.len(), 4);
		let symbols: Vec<_> = records.iter().map(|r| r.symbol.as_str()).collect();
		assert_eq!(symbols, vec!["wBTC", "wETH", "USDT", "USDC"]);
		assert!(records.iter().all(|r| r.decimals == 18));

		let addresses: HashSet<_> = records.iter().map(|r| r.address).collect();
		assert_eq!(addresses.len(), 4);
		assert!(!addresses.contains(&Address::ZERO));
	}

	#[tokio::test]
	async fn test_reruns_deploy_fresh_instances() {
		let temp_dir = TempDir::new().unwrap();
		write_artifact(temp_dir.path(), "Token", token_abi());

		let ops = TokenOps::new(context(counting_backend(1), temp_dir.path()));
		let first = ops.deploy_test_tokens(&token_fixture::SYMBOLS).await.unwrap();
		let second = ops.deploy_test_tokens(&token_fixture::SYMBOLS).await.unwrap();

		for (a, b) in first.iter().zip(&second) {
			assert_eq!(a.symbol, b.symbol);
			assert_ne!(a.address, b.address);
		}
	}

	#[tokio::test]
	async fn test_failed_deployment_stops_remaining() {
		let temp_dir = TempDir::new().unwrap();
		write_artifact(temp_dir.path(), "Token", token_abi());

		let calls = Arc::new(AtomicU64::new(0));
		let counter = calls.clone();
		let mut backend = MockContractBackend::new();
		backend.expect_deploy().returning(move |_| {
			let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
			Box::pin(async move {
				if n == 2 {
					Err(rpc_failure())
				} else {
					Ok(confirmed(n, Some(Address::with_last_byte(n as u8))))
				}
			})
		});

		let result = TokenOps::new(context(backend, temp_dir.path()))
			.deploy_test_tokens(&token_fixture::SYMBOLS)
			.await;

		assert!(result.is_err());
		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}
}
