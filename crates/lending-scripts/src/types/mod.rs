//! Type definitions shared by the deployment scripts
//!
//! This module contains chain identifiers, the error type, hex helpers and the
//! output records each script prints once its transactions are confirmed.

pub mod chain;
pub mod error;
pub mod hex;
pub mod records;

pub use chain::ChainId;
pub use error::{Error, Result};
pub use hex::Hex;
pub use records::{NftRecord, TokenRecord};
