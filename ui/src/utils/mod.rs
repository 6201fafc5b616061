//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: logging macros that write to the browser console on
//!   WASM and to `tracing` on native targets

pub mod console_macros;
