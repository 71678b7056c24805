//! Blockchain chain identifier types
//!
//! Scripts mostly run against a local development node, so the well-known
//! development chain ids get names alongside the public networks.

use std::fmt;

/// Identifier for blockchain networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainId {
	Mainnet,
	Custom { id: u64 },
}

impl ChainId {
	/// Create ChainId from numeric identifier
	pub fn from_u64(id: u64) -> Self {
		match id {
			1 => Self::Mainnet,
			id => Self::Custom { id },
		}
	}

	/// Get the numeric chain identifier
	pub fn id(&self) -> u64 {
		match self {
			Self::Mainnet => 1,
			Self::Custom { id } => *id,
		}
	}

	/// Get a human-readable name for the chain
	pub fn name(&self) -> &str {
		match self {
			Self::Mainnet => "Ethereum Mainnet",
			Self::Custom { id: 11155111 } => "Sepolia",
			Self::Custom { id: 31337 } => "Hardhat/Anvil",
			Self::Custom { id: 1337 } => "Ganache",
			Self::Custom { id: 137 } => "Polygon",
			Self::Custom { id: 42161 } => "Arbitrum One",
			Self::Custom { id: 10 } => "Optimism",
			Self::Custom { .. } => "Custom Chain",
		}
	}

	/// Whether this is a local development chain
	pub fn is_local(&self) -> bool {
		matches!(self, Self::Custom { id: 31337 } | Self::Custom { id: 1337 })
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Mainnet => write!(f, "1 (Mainnet)"),
			Self::Custom { id } => write!(f, "{} ({})", id, self.name()),
		}
	}
}
