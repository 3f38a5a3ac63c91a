//! Chain Adapters - Sui Fullnode Read Access
//!
//! JSON-RPC client implementing the `ChainReader` port:
//! - `rpc`: request envelope and response types
//! - `reader`: object reads and paged event queries

pub mod reader;
pub mod rpc;

pub use reader::SuiRpcReader;
