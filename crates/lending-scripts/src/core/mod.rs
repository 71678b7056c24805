//! Core building blocks shared by the scripts
//!
//! Configuration, logging, the signing identity, the chain client, the
//! compiled-artifact registry and contract handles.

pub mod artifacts;
pub mod backend;
pub mod blockchain;
pub mod config;
pub mod contracts;
pub mod logging;
pub mod signing;

pub use artifacts::{ArtifactRegistry, ContractArtifact};
pub use backend::{Confirmation, ContractBackend, RpcBackend};
pub use blockchain::{Provider, TxBuilder};
pub use config::{Config, NetworkConfig, Overrides};
pub use contracts::{ContractFactory, DeployedContract};
pub use signing::SigningIdentity;
