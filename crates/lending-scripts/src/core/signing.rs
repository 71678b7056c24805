//! Signing identity resolution
//!
//! A script run uses exactly one signing identity, taken from the active
//! network configuration.

use crate::{
	core::config::Config,
	types::{error::Result, hex::Hex},
};
use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use tracing::debug;

/// Account that authorizes every transaction of a script run
#[derive(Debug, Clone)]
pub struct SigningIdentity {
	signer: PrivateKeySigner,
}

impl SigningIdentity {
	/// Resolve the signing identity of the configured network
	///
	/// # Errors
	/// Returns Error::InvalidPrivateKey if the configured key cannot be parsed
	pub fn from_config(config: &Config) -> Result<Self> {
		if config.uses_dev_account() {
			debug!(
				network = %config.network_name,
				"No private key configured, using development account #0"
			);
		}
		Self::from_private_key(config.private_key())
	}

	/// Build an identity from a hex-encoded private key
	pub fn from_private_key(key: &str) -> Result<Self> {
		Ok(Self {
			signer: Hex::to_private_key(key)?,
		})
	}

	pub fn address(&self) -> Address {
		self.signer.address()
	}

	pub fn signer(&self) -> &PrivateKeySigner {
		&self.signer
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::constants::dev_accounts;
	use crate::core::config::Overrides;
	use std::str::FromStr;

	#[test]
	fn test_default_identity_is_dev_account() {
		let config = Config::from_toml("", Overrides::default()).unwrap();
		let identity = SigningIdentity::from_config(&config).unwrap();

		assert_eq!(
			identity.address(),
			Address::from_str(dev_accounts::DEPLOYER_ADDRESS).unwrap()
		);
	}

	#[test]
	fn test_invalid_configured_key() {
		let overrides = Overrides {
			private_key: Some("0x1234".to_string()),
			..Default::default()
		};
		let config = Config::from_toml("", overrides).unwrap();

		assert!(SigningIdentity::from_config(&config).is_err());
	}
}
