//! Infrastructure Services
//!
//! - **client**: HTTP client for the sync backend's start-sync call
//! - **streaming**: live log subscriptions and the log panel state machine
//! - **config**: backend endpoint configuration
//! - **errors**: the `SyncError` taxonomy shared by all of the above
//!
//! The services are WASM-first: async traits and callbacks carry no
//! Send/Sync bounds.

pub mod client;
pub mod config;
pub mod errors;
pub mod streaming;
