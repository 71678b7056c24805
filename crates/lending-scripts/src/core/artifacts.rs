//! Compiled-artifact registry
//!
//! Resolves contract names to their ABI and creation bytecode. Both the
//! Hardhat layout (`<root>/contracts/<Name>.sol/<Name>.json`, bytecode as a
//! hex string) and the Foundry layout (`<root>/<Name>.sol/<Name>.json`,
//! bytecode under `bytecode.object`) are understood.

use crate::{
	core::contracts::ContractFactory,
	types::{
		error::{Error, Result},
		hex::Hex,
	},
};
use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// ABI and creation bytecode of one compiled contract
#[derive(Debug, Clone)]
pub struct ContractArtifact {
	pub name: String,
	pub abi: JsonAbi,
	pub bytecode: Bytes,
}

impl ContractArtifact {
	/// Parse an artifact from compiler output JSON
	///
	/// # Errors
	/// Returns Error::InvalidArtifact if the ABI is missing or malformed, or
	/// there is no deployable bytecode (interfaces, abstract contracts, or
	/// unlinked libraries)
	pub fn from_json(name: &str, json: &Value) -> Result<Self> {
		let abi_value = json
			.get("abi")
			.ok_or_else(|| Error::InvalidArtifact(name.to_string(), "missing abi".to_string()))?;
		let abi: JsonAbi = serde_json::from_value(abi_value.clone())
			.map_err(|e| Error::InvalidArtifact(name.to_string(), format!("invalid abi: {}", e)))?;

		let bytecode_hex = match json.get("bytecode") {
			Some(Value::String(code)) => code.as_str(),
			Some(Value::Object(obj)) => obj.get("object").and_then(Value::as_str).unwrap_or(""),
			_ => "",
		};

		let bytecode = Hex::decode(bytecode_hex).map_err(|e| {
			Error::InvalidArtifact(name.to_string(), format!("invalid bytecode: {}", e))
		})?;
		if bytecode.is_empty() {
			return Err(Error::InvalidArtifact(
				name.to_string(),
				"no creation bytecode".to_string(),
			));
		}

		Ok(Self {
			name: name.to_string(),
			abi,
			bytecode,
		})
	}
}

/// Lookup of compiled contracts under an artifacts root
#[derive(Debug, Clone)]
pub struct ArtifactRegistry {
	root: PathBuf,
}

impl ArtifactRegistry {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	fn candidate_paths(&self, name: &str) -> [PathBuf; 2] {
		let file = format!("{}.sol/{}.json", name, name);
		[self.root.join("contracts").join(&file), self.root.join(&file)]
	}

	/// Load the artifact for a contract name
	///
	/// # Errors
	/// Returns Error::ArtifactNotFound if no artifact file exists, or the
	/// parse error of the file found
	pub fn load(&self, name: &str) -> Result<ContractArtifact> {
		for path in self.candidate_paths(name) {
			if path.exists() {
				debug!(contract = name, path = %path.display(), "Loading contract artifact");
				let content = std::fs::read_to_string(&path)?;
				let json: Value = serde_json::from_str(&content)?;
				return ContractArtifact::from_json(name, &json);
			}
		}

		Err(Error::ArtifactNotFound(name.to_string(), self.root.clone()))
	}

	/// Resolve a contract name into a deployable factory
	pub fn factory(&self, name: &str) -> Result<ContractFactory> {
		Ok(ContractFactory::new(self.load(name)?))
	}

	/// List contract names with artifacts under the root
	pub fn list(&self) -> Result<Vec<String>> {
		let mut names = Vec::new();

		for dir in [self.root.join("contracts"), self.root.clone()] {
			if dir.is_dir() {
				collect_artifact_names(&dir, &mut names)?;
			}
		}

		names.sort();
		names.dedup();
		Ok(names)
	}
}

fn collect_artifact_names(dir: &Path, names: &mut Vec<String>) -> Result<()> {
	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		let source_dir = entry.file_name();
		let is_source_dir = source_dir
			.to_str()
			.is_some_and(|name| name.ends_with(".sol"));

		if !is_source_dir || !entry.file_type()?.is_dir() {
			continue;
		}

		for artifact in std::fs::read_dir(entry.path())?.flatten() {
			let file_name = artifact.file_name();
			let Some(file_name) = file_name.to_str() else {
				continue;
			};
			// Hardhat writes a debug sidecar next to each artifact
			if file_name.ends_with(".dbg.json") {
				continue;
			}
			if let Some(name) = file_name.strip_suffix(".json") {
				names.push(name.to_string());
			}
		}
	}
	Ok(())
}
