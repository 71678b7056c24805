//! Output records printed by the minting scripts
//!
//! Each record stands for exactly one confirmed transaction. Field names are
//! part of the output format consumed by the frontend fixtures, hence the
//! explicit `tokenID` rename. Addresses are written in EIP-55 checksummed
//! form, matching what `deploy-lending` prints.

use alloy_primitives::Address;
use serde::{Serialize, Serializer};

/// One minted NFT in the test collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NftRecord {
	#[serde(serialize_with = "checksummed")]
	pub address: Address,
	#[serde(rename = "tokenID")]
	pub token_id: u64,
	pub name: String,
	pub image: String,
}

/// One deployed test ERC20 token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
	pub symbol: String,
	#[serde(serialize_with = "checksummed")]
	pub address: Address,
	pub decimals: u8,
}

fn checksummed<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
	serializer.serialize_str(&address.to_checksum(None))
}

/// Serialize records as a single JSON line
pub fn to_json_line<T: Serialize>(records: &[T]) -> crate::types::Result<String> {
	Ok(serde_json::to_string(records)?)
}
