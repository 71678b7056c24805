//! Contract factories and deployed contract handles
//!
//! A [`ContractFactory`] turns a compiled artifact plus constructor arguments
//! into a confirmed deployment; a [`DeployedContract`] encodes method calls
//! against its ABI and submits them. Arguments are checked against the ABI
//! before anything reaches the chain.

use crate::{
	core::{
		artifacts::ContractArtifact,
		backend::{Confirmation, ContractBackend},
	},
	types::error::{Error, Result},
};
use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::JsonAbi;
use alloy_primitives::{Address, Bytes};
use tracing::info;

/// Handle producing new deployed instances of one compiled contract
#[derive(Debug, Clone)]
pub struct ContractFactory {
	artifact: ContractArtifact,
}

impl ContractFactory {
	pub fn new(artifact: ContractArtifact) -> Self {
		Self { artifact }
	}

	pub fn name(&self) -> &str {
		&self.artifact.name
	}

	/// Creation bytecode followed by the ABI-encoded constructor arguments
	///
	/// # Errors
	/// Returns Error::InvalidAbi if the arguments do not match the constructor
	pub fn deployment_code(&self, args: &[DynSolValue]) -> Result<Bytes> {
		let encoded_args = match self.artifact.abi.constructor() {
			Some(constructor) => {
				if constructor.inputs.len() != args.len() {
					return Err(Error::InvalidAbi(format!(
						"{} constructor takes {} arguments, got {}",
						self.name(),
						constructor.inputs.len(),
						args.len()
					)));
				}
				constructor.abi_encode_input(args).map_err(|e| {
					Error::InvalidAbi(format!("Failed to encode {} constructor: {}", self.name(), e))
				})?
			},
			None if args.is_empty() => Vec::new(),
			None => {
				return Err(Error::InvalidAbi(format!(
					"{} has no constructor but {} arguments were given",
					self.name(),
					args.len()
				)))
			},
		};

		let mut code = self.artifact.bytecode.to_vec();
		code.extend_from_slice(&encoded_args);
		Ok(code.into())
	}

	/// Deploy a new instance and wait for its confirmation
	///
	/// # Errors
	/// Returns Error if encoding fails, the deployment is rejected or reverts,
	/// or the receipt carries no contract address
	pub async fn deploy(
		&self,
		backend: &dyn ContractBackend,
		args: &[DynSolValue],
	) -> Result<DeployedContract> {
		let code = self.deployment_code(args)?;
		let confirmation = backend.deploy(code).await?;

		let address = confirmation.contract_address.ok_or_else(|| {
			Error::DeploymentFailed(format!("{}: no contract address in receipt", self.name()))
		})?;

		info!(
			contract = self.name(),
			address = %address,
			tx_hash = %confirmation.tx_hash,
			"Contract deployed"
		);

		Ok(DeployedContract {
			name: self.artifact.name.clone(),
			address,
			abi: self.artifact.abi.clone(),
			deployment: confirmation,
		})
	}
}

/// A confirmed on-chain instance of a compiled contract
#[derive(Debug, Clone)]
pub struct DeployedContract {
	name: String,
	address: Address,
	abi: JsonAbi,
	deployment: Confirmation,
}

impl DeployedContract {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn address(&self) -> Address {
		self.address
	}

	/// Confirmation of the deployment transaction
	pub fn deployment(&self) -> &Confirmation {
		&self.deployment
	}

	/// Encode a method call, selecting the overload by argument count
	///
	/// # Errors
	/// Returns Error::InvalidAbi if no matching method exists or encoding fails
	pub fn encode_call(&self, method: &str, args: &[DynSolValue]) -> Result<Bytes> {
		let function = self
			.abi
			.function(method)
			.and_then(|overloads| overloads.iter().find(|f| f.inputs.len() == args.len()))
			.ok_or_else(|| {
				Error::InvalidAbi(format!(
					"{} has no method {} taking {} arguments",
					self.name,
					method,
					args.len()
				))
			})?;

		let data = function.abi_encode_input(args).map_err(|e| {
			Error::InvalidAbi(format!("Failed to encode {}.{}: {}", self.name, method, e))
		})?;
		Ok(data.into())
	}

	/// Invoke a state-mutating method and wait for its confirmation
	///
	/// # Errors
	/// Returns Error::ContractCallFailed if submission or confirmation fails
	pub async fn send(
		&self,
		backend: &dyn ContractBackend,
		method: &str,
		args: &[DynSolValue],
	) -> Result<Confirmation> {
		let input = self.encode_call(method, args)?;

		backend
			.transact(self.address, input)
			.await
			.map_err(|e| Error::ContractCallFailed {
				address: self.address,
				method: method.to_string(),
				reason: e.to_string(),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::backend::MockContractBackend;
	use alloy_primitives::{keccak256, B256, U256};
	use serde_json::json;

	fn nft_artifact() -> ContractArtifact {
		ContractArtifact::from_json(
			"NFT",
			&json!({
				"abi": [
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
				],
				"bytecode": "0xdeadbeef"
			}),
		)
		.unwrap()
	}

	fn nft_args() -> Vec<DynSolValue> {
		vec![
			DynSolValue::String("LilPudgys".to_string()),
			DynSolValue::String("LP".to_string()),
			DynSolValue::String("https://api.pudgypenguins.io/lil/".to_string()),
		]
	}

	fn confirmation(address: Option<Address>) -> Confirmation {
		Confirmation {
			tx_hash: B256::with_last_byte(1),
			block_number: Some(1),
			contract_address: address,
		}
	}

	#[test]
	fn test_deployment_code_appends_constructor_args() {
		let factory = ContractFactory::new(nft_artifact());
		let code = factory.deployment_code(&nft_args()).unwrap();

		assert!(code.starts_with(&[0xde, 0xad, 0xbe, 0xef]));
		// Three offsets, then a length word and padded data per string; the
		// 33-byte base URI spills into a second data word
		assert_eq!(code.len(), 4 + 3 * 32 + 2 * (32 + 32) + (32 + 64));
	}

	#[test]
	fn test_constructor_arity_mismatch() {
		let factory = ContractFactory::new(nft_artifact());
		let err = factory
			.deployment_code(&[DynSolValue::String("LilPudgys".to_string())])
			.unwrap_err();
		assert!(matches!(err, Error::InvalidAbi(_)));
	}

	#[test]
	fn test_no_constructor_takes_no_args() {
		let artifact =
			ContractArtifact::from_json("NftLending", &json!({"abi": [], "bytecode": "0x6080"}))
				.unwrap();
		let factory = ContractFactory::new(artifact);

		assert_eq!(factory.deployment_code(&[]).unwrap(), Bytes::from(vec![0x60, 0x80]));
		assert!(factory.deployment_code(&[DynSolValue::Bool(true)]).is_err());
	}

	#[tokio::test]
	async fn test_deploy_and_send() {
		let contract_address = Address::with_last_byte(0x42);
		let owner = Address::with_last_byte(0x01);

		let mut backend = MockContractBackend::new();
		backend
			.expect_deploy()
			.withf(|code| code.starts_with(&[0xde, 0xad, 0xbe, 0xef]))
			.times(1)
			.returning(move |_| Box::pin(async move { Ok(confirmation(Some(contract_address))) }));
		backend
			.expect_transact()
			.withf(move |to, input| {
				*to == contract_address
					&& input[..4] == keccak256("safeMint(address,uint256)")[..4]
			})
			.times(1)
			.returning(|_, _| Box::pin(async move { Ok(confirmation(None)) }));

		let factory = ContractFactory::new(nft_artifact());
		let nft = factory.deploy(&backend, &nft_args()).await.unwrap();
		assert_eq!(nft.address(), contract_address);
		assert_eq!(nft.name(), "NFT");

		nft.send(
			&backend,
			"safeMint",
			&[DynSolValue::Address(owner), DynSolValue::Uint(U256::from(4314), 256)],
		)
		.await
		.unwrap();
	}

	#[tokio::test]
	async fn test_deploy_without_contract_address() {
		let mut backend = MockContractBackend::new();
		backend
			.expect_deploy()
			.returning(|_| Box::pin(async move { Ok(confirmation(None)) }));

		let factory = ContractFactory::new(nft_artifact());
		let err = factory.deploy(&backend, &nft_args()).await.unwrap_err();
		assert!(matches!(err, Error::DeploymentFailed(_)));
	}

	#[tokio::test]
	async fn test_unknown_method_is_not_submitted() {
		let mut backend = MockContractBackend::new();
		backend
			.expect_deploy()
			.returning(|_| {
				Box::pin(async move { Ok(confirmation(Some(Address::with_last_byte(9)))) })
			});
		backend.expect_transact().never();

		let nft = ContractFactory::new(nft_artifact())
			.deploy(&backend, &nft_args())
			.await
			.unwrap();
		let err = nft.send(&backend, "burn", &[]).await.unwrap_err();
		assert!(matches!(err, Error::InvalidAbi(_)));
	}
}
