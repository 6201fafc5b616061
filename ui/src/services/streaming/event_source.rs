//! Live log through the browser's native `EventSource`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventSource, MessageEvent};

use super::traits::{LogCallback, LogEvent, LogSource, LogSubscription};
use crate::services::config::BackendConfig;
use crate::services::errors::{SyncError, SyncResult};
use crate::wizard::JobHandle;
use crate::{console_debug, console_error, console_info};

type MessageHandler = Closure<dyn FnMut(MessageEvent)>;
type ErrorHandler = Closure<dyn FnMut(Event)>;

pub struct EventSourceLogSource {
    config: BackendConfig,
}

impl EventSourceLogSource {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

impl LogSource for EventSourceLogSource {
    fn open(&self, job: &JobHandle) -> SyncResult<Rc<dyn LogSubscription>> {
        let url = self.config.log_stream_url(job)?;
        console_info!("[EventSource] Connecting to {}", url);

        let source = EventSource::new(url.as_str()).map_err(|e| {
            console_error!("[EventSource] Failed to open {}: {:?}", url, e);
            SyncError::stream(format!("Failed to open log stream: {:?}", e))
        })?;

        Ok(Rc::new(EventSourceSubscription {
            source,
            handlers: RefCell::new(None),
            closed: Cell::new(false),
        }))
    }
}

/// Owns the `EventSource` and the JS closures bound to it.
///
/// The browser queues events until control returns to the event loop, so a
/// callback registered right after `open` sees every message.
struct EventSourceSubscription {
    source: EventSource,
    handlers: RefCell<Option<(MessageHandler, ErrorHandler)>>,
    closed: Cell<bool>,
}

impl LogSubscription for EventSourceSubscription {
    fn on_event(&self, callback: LogCallback) {
        let callback = Rc::new(RefCell::new(callback));

        let on_message = {
            let callback = Rc::clone(&callback);
            Closure::wrap(Box::new(move |event: MessageEvent| {
                let line = event.data().as_string().unwrap_or_default();
                let mut callback = callback.borrow_mut();
                (*callback)(LogEvent::Line(line));
            }) as Box<dyn FnMut(MessageEvent)>)
        };

        let on_error = {
            let callback = Rc::clone(&callback);
            Closure::wrap(Box::new(move |_event: Event| {
                let mut callback = callback.borrow_mut();
                (*callback)(LogEvent::TransportError(
                    "Log stream connection lost".to_string(),
                ));
            }) as Box<dyn FnMut(Event)>)
        };

        self.source
            .set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        self.source.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        *self.handlers.borrow_mut() = Some((on_message, on_error));
    }

    fn close(&self) {
        if !self.closed.replace(true) {
            console_debug!("[EventSource] Closing {}", self.source.url());
            // EventSource would otherwise reconnect on its own after an error
            self.source.close();
        }
    }

    fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

impl Drop for EventSourceSubscription {
    fn drop(&mut self) {
        self.close();
        self.source.set_onmessage(None);
        self.source.set_onerror(None);
    }
}
