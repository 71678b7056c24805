//! Constants and fixture values used by the deployment scripts
//!
//! Contains the default development network, well-known development account,
//! contract names resolved from the artifact registry, and the fixed inputs of
//! the minting scripts.

/// Default RPC endpoint of a local Hardhat or Anvil node
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Name of the built-in network used when no configuration file exists
pub const DEFAULT_NETWORK: &str = "localhost";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "lending.toml";

/// Default compiled-artifacts root (Hardhat layout)
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Default decimal places for the test ERC20 tokens
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

/// Seconds to wait for a transaction receipt before giving up
pub const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 60;

/// Interval between receipt polls
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Well-known development account #0
///
/// Both Hardhat and Anvil derive this account from the default test mnemonic
/// and expose it as the first signer. Never use it outside a dev chain.
pub mod dev_accounts {
	pub const DEPLOYER_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

	pub const DEPLOYER_PRIVATE_KEY: &str =
		"0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
}

/// Environment variable names
pub mod env_vars {
	pub const NETWORK: &str = "LENDING_NETWORK";
	pub const RPC_URL: &str = "LENDING_RPC_URL";
	pub const ARTIFACTS: &str = "LENDING_ARTIFACTS";
	pub const DEPLOYER_PRIVATE_KEY: &str = "DEPLOYER_PRIVATE_KEY";
}

/// Contract names as they appear in the compiled artifacts
pub mod contracts {
	pub const NFT_LENDING: &str = "NftLending";
	pub const NFT: &str = "NFT";
	pub const TOKEN: &str = "Token";
}

/// Fixed inputs of the NFT minting script
pub mod nft_fixture {
	pub const COLLECTION_NAME: &str = "LilPudgys";
	pub const COLLECTION_SYMBOL: &str = "LP";
	pub const BASE_URI: &str = "https://api.pudgypenguins.io/lil/";
	pub const TOKEN_IDS: [u64; 4] = [4314, 5616, 11250, 5814];
}

/// Fixed inputs of the token deployment script
pub mod token_fixture {
	pub const SYMBOLS: [&str; 4] = ["wBTC", "wETH", "USDT", "USDC"];
}
