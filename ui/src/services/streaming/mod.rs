//! Live log streaming for a running sync job
//!
//! `LogSource::open` hands out a `LogSubscription`; `LogStream` runs the
//! panel's state machine on top of any source, so it works the same with the
//! browser `EventSource`, a streaming HTTP GET, or a test double.

#[cfg(target_arch = "wasm32")]
pub mod event_source;
pub mod http_log_source;
pub mod log_stream;
pub mod sse;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(target_arch = "wasm32")]
pub use event_source::*;
pub use http_log_source::*;
pub use log_stream::*;
pub use sse::*;
pub use traits::*;
