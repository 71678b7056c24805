//! Blockchain provider and transaction management
//!
//! Wraps an alloy HTTP provider with the run's signing wallet attached, and a
//! transaction builder that submits requests and polls for their receipts.

use crate::{
	core::signing::SigningIdentity,
	types::{
		chain::ChainId,
		error::{Error, Result},
	},
};
use alloy_network::EthereumWallet;
use alloy_primitives::{Address, B256, U256};
use alloy_provider::{DynProvider, Provider as AlloyProvider, ProviderBuilder};
use alloy_rpc_types::{TransactionReceipt, TransactionRequest};
use std::time::Duration;
use tracing::debug;

/// Blockchain provider bound to one chain and one signing wallet
#[derive(Clone)]
pub struct Provider {
	inner: DynProvider,
	chain: ChainId,
}

impl std::fmt::Debug for Provider {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Provider")
			.field("chain", &self.chain)
			.field("inner", &"<DynProvider>")
			.finish()
	}
}

impl Provider {
	/// Connect to an RPC endpoint with the given signing identity
	///
	/// Validates connectivity by reading the chain id, and rejects the node if
	/// it does not serve the expected chain.
	///
	/// # Arguments
	/// * `rpc_url` - RPC endpoint URL
	/// * `identity` - Signing identity attached as the provider's wallet
	/// * `expected_chain` - Chain id the configuration expects, if any
	///
	/// # Errors
	/// Returns Error if the URL is invalid, the node is unreachable, or the
	/// chain id does not match
	pub async fn new(
		rpc_url: &str,
		identity: &SigningIdentity,
		expected_chain: Option<u64>,
	) -> Result<Self> {
		let url = rpc_url
			.parse()
			.map_err(|e| Error::RpcError(format!("Invalid RPC URL: {}", e)))?;

		let wallet = EthereumWallet::from(identity.signer().clone());
		let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

		let actual = provider
			.get_chain_id()
			.await
			.map_err(|e| Error::RpcError(format!("Failed to connect to {}: {}", rpc_url, e)))?;

		if let Some(expected) = expected_chain {
			if expected != actual {
				return Err(Error::ChainMismatch { expected, actual });
			}
		}

		Ok(Self {
			inner: provider.erased(),
			chain: ChainId::from_u64(actual),
		})
	}

	/// Retrieve ETH balance for specified address
	pub async fn balance(&self, address: Address) -> Result<U256> {
		self.inner
			.get_balance(address)
			.await
			.map_err(|e| Error::RpcError(format!("Failed to get balance: {}", e)))
	}

	pub fn chain(&self) -> ChainId {
		self.chain
	}
}

/// Transaction builder with receipt polling
///
/// Every send is awaited to a mined receipt before returning, which is what
/// lets callers issue dependent transactions in sequence.
#[derive(Debug, Clone)]
pub struct TxBuilder {
	provider: Provider,
	poll_interval: Duration,
	timeout: Duration,
}

impl TxBuilder {
	/// Create new transaction builder with provider
	pub fn new(provider: Provider) -> Self {
		Self {
			provider,
			poll_interval: Duration::from_millis(crate::constants::DEFAULT_POLL_INTERVAL_MS),
			timeout: Duration::from_secs(crate::constants::DEFAULT_CONFIRMATION_TIMEOUT_SECS),
		}
	}

	/// Configure how often and how long receipts are polled for
	pub fn with_confirmation(mut self, poll_interval: Duration, timeout: Duration) -> Self {
		self.poll_interval = poll_interval;
		self.timeout = timeout;
		self
	}

	/// Submit a transaction signed by the provider's wallet
	///
	/// Gas, nonce and chain id are filled in by the provider.
	///
	/// # Errors
	/// Returns Error if the node rejects the transaction
	pub async fn send(&self, mut tx: TransactionRequest) -> Result<B256> {
		if tx.chain_id.is_none() {
			tx.chain_id = Some(self.provider.chain().id());
		}

		let pending = self
			.provider
			.inner
			.send_transaction(tx)
			.await
			.map_err(|e| Error::RpcError(format!("Failed to send transaction: {}", e)))?;

		let hash = *pending.tx_hash();
		debug!(tx_hash = %hash, "Transaction submitted");
		Ok(hash)
	}

	/// Poll blockchain for transaction receipt with timeout
	///
	/// # Errors
	/// Returns Error if receipt retrieval fails or the timeout is reached
	pub async fn wait(&self, hash: B256) -> Result<TransactionReceipt> {
		let deadline = tokio::time::Instant::now() + self.timeout;

		loop {
			if let Some(receipt) = self
				.provider
				.inner
				.get_transaction_receipt(hash)
				.await
				.map_err(|e| Error::RpcError(format!("Failed to get receipt: {}", e)))?
			{
				return Ok(receipt);
			}

			if tokio::time::Instant::now() >= deadline {
				return Err(Error::ConfirmationTimeout(hash, self.timeout));
			}

			tokio::time::sleep(self.poll_interval).await;
		}
	}

	/// Submit a transaction and wait for a successful receipt
	///
	/// # Errors
	/// Returns Error if submission or polling fails, or the transaction reverted
	pub async fn send_and_wait(&self, tx: TransactionRequest) -> Result<TransactionReceipt> {
		let hash = self.send(tx).await?;
		let receipt = self.wait(hash).await?;

		if !receipt.status() {
			return Err(Error::TransactionReverted(hash));
		}

		debug!(
			tx_hash = %hash,
			block = ?receipt.block_number,
			gas_used = receipt.gas_used,
			"Transaction confirmed"
		);
		Ok(receipt)
	}
}
