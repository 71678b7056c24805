//! Hexadecimal string parsing utilities
//!
//! Handles both prefixed (0x) and unprefixed hex strings, as found in
//! configuration files, environment variables and compiler artifacts.

use crate::types::error::{Error, Result};
use alloy_primitives::{Bytes, B256};
use alloy_signer_local::PrivateKeySigner;

/// Utility struct providing hexadecimal conversion functions
pub struct Hex;

impl Hex {
	/// Decode a hexadecimal string to bytes
	///
	/// # Errors
	/// Returns Error::InvalidHex if the string contains invalid hex characters
	pub fn decode(s: &str) -> Result<Bytes> {
		let s = s.trim().trim_start_matches("0x");
		hex::decode(s)
			.map(Into::into)
			.map_err(|e| Error::InvalidHex(format!("{}: {}", s, e)))
	}

	/// Parse a private key from hexadecimal string
	///
	/// # Errors
	/// Returns Error::InvalidHex or Error::InvalidPrivateKey if parsing fails
	pub fn to_private_key(key: &str) -> Result<PrivateKeySigner> {
		let key = key.trim().trim_start_matches("0x");
		let bytes = hex::decode(key).map_err(|e| Error::InvalidHex(e.to_string()))?;

		if bytes.len() != 32 {
			return Err(Error::InvalidPrivateKey);
		}

		PrivateKeySigner::from_bytes(&B256::from_slice(&bytes)).map_err(|_| Error::InvalidPrivateKey)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;

	#[test]
	fn test_hex_decode() {
		let bytes = Hex::decode("0xdeadbeef").unwrap();
		assert_eq!(bytes, Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]));

		let bytes2 = Hex::decode("deadbeef").unwrap();
		assert_eq!(bytes, bytes2);

		assert!(matches!(Hex::decode("0xzz"), Err(Error::InvalidHex(_))));
	}

	#[test]
	fn test_private_key_parsing() {
		let signer = Hex::to_private_key(
			"0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
		)
		.unwrap();
		assert_eq!(signer.address(), address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));

		assert!(matches!(
			Hex::to_private_key("0xdeadbeef"),
			Err(Error::InvalidPrivateKey)
		));
	}
}
