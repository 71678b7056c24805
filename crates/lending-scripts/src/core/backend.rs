//! Contract backend: the chain-facing side of every script
//!
//! [`ContractBackend`] is the narrow interface the scripts need from a chain
//! client: who signs, deploy creation code, and invoke a method. Each call
//! resolves only once the transaction is confirmed.

use crate::{
	core::blockchain::TxBuilder,
	types::error::{Error, Result},
};
use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes, B256};
use alloy_rpc_types::{TransactionReceipt, TransactionRequest};
use async_trait::async_trait;

/// Result of one confirmed transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
	pub tx_hash: B256,
	pub block_number: Option<u64>,
	/// Address created by a deployment transaction
	pub contract_address: Option<Address>,
}

impl From<&TransactionReceipt> for Confirmation {
	fn from(receipt: &TransactionReceipt) -> Self {
		Self {
			tx_hash: receipt.transaction_hash,
			block_number: receipt.block_number,
			contract_address: receipt.contract_address,
		}
	}
}

/// Interface for submitting confirmed transactions on behalf of one signer
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait ContractBackend: Send + Sync {
	/// Address of the signing identity
	fn signer_address(&self) -> Address;

	/// Submit a contract creation transaction and wait for its confirmation
	async fn deploy(&self, creation_code: Bytes) -> Result<Confirmation>;

	/// Submit a call to a deployed contract and wait for its confirmation
	async fn transact(&self, to: Address, input: Bytes) -> Result<Confirmation>;
}

/// Backend talking to a JSON-RPC node
#[derive(Debug, Clone)]
pub struct RpcBackend {
	tx_builder: TxBuilder,
	signer_address: Address,
}

impl RpcBackend {
	pub fn new(tx_builder: TxBuilder, signer_address: Address) -> Self {
		Self {
			tx_builder,
			signer_address,
		}
	}
}

#[async_trait]
impl ContractBackend for RpcBackend {
	fn signer_address(&self) -> Address {
		self.signer_address
	}

	async fn deploy(&self, creation_code: Bytes) -> Result<Confirmation> {
		let tx = TransactionRequest::default()
			.from(self.signer_address)
			.into_create()
			.input(creation_code.into());

		let receipt = self.tx_builder.send_and_wait(tx).await?;
		let confirmation = Confirmation::from(&receipt);

		if confirmation.contract_address.is_none() {
			return Err(Error::DeploymentFailed(format!(
				"No contract address in receipt of {:?}",
				confirmation.tx_hash
			)));
		}
		Ok(confirmation)
	}

	async fn transact(&self, to: Address, input: Bytes) -> Result<Confirmation> {
		let tx = TransactionRequest::default()
			.from(self.signer_address)
			.to(to)
			.input(input.into());

		let receipt = self.tx_builder.send_and_wait(tx).await?;
		Ok(Confirmation::from(&receipt))
	}
}
