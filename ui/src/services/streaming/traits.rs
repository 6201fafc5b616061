//! Subscribe/unsubscribe capability for live job logs

use std::rc::Rc;

use crate::services::errors::SyncResult;
use crate::wizard::JobHandle;

/// One thing that happened on a log connection
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    /// A data payload, rendered verbatim as one log line
    Line(String),
    /// The transport failed; no more events follow
    TransportError(String),
}

pub type LogCallback = Box<dyn FnMut(LogEvent)>;

/// Handle to one open log connection.
///
/// Implementations must tolerate `close` being called from inside the
/// registered callback, and must not deliver events after `close`.
pub trait LogSubscription {
    /// Register the receiver of this connection's events
    fn on_event(&self, callback: LogCallback);

    /// Release the connection. Calling it again is a no-op.
    fn close(&self);

    fn is_closed(&self) -> bool;
}

/// Opens log connections - WASM-only, no Send bound
pub trait LogSource {
    fn open(&self, job: &JobHandle) -> SyncResult<Rc<dyn LogSubscription>>;
}
