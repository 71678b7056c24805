//! The deployment scripts
//!
//! Each operation owns its run: it resolves its factories, then submits its
//! transactions strictly one after another. A transaction is only issued once
//! the previous one is confirmed, and the first failure aborts the run without
//! producing any records.

pub mod lending;
pub mod nft;
pub mod token;

pub use lending::LendingOps;
pub use nft::{NftCollection, NftOps};
pub use token::TokenOps;
