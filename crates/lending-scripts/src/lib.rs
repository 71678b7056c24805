//! Deployment and fixture scripts for the NFT lending contracts
//!
//! Three independent procedures share this crate: deploying the lending
//! contract, deploying a test NFT collection with a few minted tokens, and
//! deploying a set of test ERC20 tokens. Each one signs with a single
//! configured identity and confirms every transaction before issuing the next.

pub mod cli;
pub mod constants;
pub mod context;
pub mod core;
pub mod operations;
pub mod types;

pub use context::Context;
pub use types::{Error, NftRecord, Result, TokenRecord};
