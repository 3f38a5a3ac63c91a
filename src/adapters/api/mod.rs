//! Operator Backend Adapter
//!
//! Implements the `StakingApi` port over HTTP.

pub mod client;

pub use client::BackendClient;
