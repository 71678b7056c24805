//! Error types and result handling for the deployment scripts
//!
//! Every failure a script can hit (configuration, signing, artifact lookup,
//! RPC submission, confirmation) is unrecovered: it aborts the procedure and
//! surfaces as a non-zero exit status. The variants only exist to make the
//! printed message precise.

use alloy_primitives::{Address, B256};
use std::path::PathBuf;
use std::time::Duration;

/// Convenience Result type alias using the local Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all script operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
	// Config errors
	#[error("Configuration file not found: {0}")]
	ConfigNotFound(PathBuf),

	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("Network not configured: {0}")]
	NetworkNotFound(String),

	// Signing errors
	#[error("Invalid private key")]
	InvalidPrivateKey,

	// Artifact errors
	#[error("Contract artifact {0} not found under {1}")]
	ArtifactNotFound(String, PathBuf),

	#[error("Invalid artifact for {0}: {1}")]
	InvalidArtifact(String, String),

	#[error("Invalid ABI: {0}")]
	InvalidAbi(String),

	// Chain errors
	#[error("RPC connection failed: {0}")]
	RpcError(String),

	#[error("Chain ID mismatch: configured {expected}, node reports {actual}")]
	ChainMismatch { expected: u64, actual: u64 },

	#[error("Transaction {0:?} not confirmed within {1:?}")]
	ConfirmationTimeout(B256, Duration),

	#[error("Transaction {0:?} reverted")]
	TransactionReverted(B256),

	#[error("Deployment failed: {0}")]
	DeploymentFailed(String),

	#[error("Call to {method} on {address} failed: {reason}")]
	ContractCallFailed {
		address: Address,
		method: String,
		reason: String,
	},

	// Validation errors
	#[error("Invalid hex string: {0}")]
	InvalidHex(String),

	// IO errors
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	// JSON errors
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	// TOML errors
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}
