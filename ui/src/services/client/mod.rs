//! HTTP client for the sync backend

pub mod sync_client;
pub mod types;

pub use sync_client::*;
pub use types::*;
