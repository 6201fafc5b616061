//! Live log over a streaming `reqwest` GET, for targets without `EventSource`

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt::Display;
use std::rc::{Rc, Weak};

use bytes::Bytes;
use futures::future::{AbortHandle, Abortable, LocalBoxFuture};
use futures::{pin_mut, FutureExt, Stream, StreamExt};
use reqwest::{Client, RequestBuilder};

use super::sse::SseDecoder;
use super::traits::{LogCallback, LogEvent, LogSource, LogSubscription};
use crate::services::config::BackendConfig;
use crate::services::errors::SyncResult;
use crate::wizard::JobHandle;
use crate::{console_debug, console_info};

/// Runs a `!Send` future on the caller's single-threaded executor
pub type LocalSpawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

pub struct HttpLogSource {
    http_client: Client,
    config: BackendConfig,
    spawner: LocalSpawner,
}

impl HttpLogSource {
    pub fn new(config: BackendConfig, spawner: LocalSpawner) -> Self {
        Self {
            http_client: Client::new(),
            config,
            spawner,
        }
    }
}

impl LogSource for HttpLogSource {
    fn open(&self, job: &JobHandle) -> SyncResult<Rc<dyn LogSubscription>> {
        let url = self.config.log_stream_url(job)?;
        console_info!("[HttpLogSource] Connecting to {}", url);

        let (abort, registration) = AbortHandle::new_pair();
        let subscription = Rc::new(HttpSubscription::new(abort));

        let request = self
            .http_client
            .get(url)
            .header("Accept", "text/event-stream");
        let target = Rc::downgrade(&subscription);
        let pump = Abortable::new(pump_log_stream(request, target), registration).map(|_| ());
        (self.spawner)(pump.boxed_local());

        Ok(subscription)
    }
}

/// Subscription backed by a spawned, abortable read loop.
///
/// Events that arrive before a callback is registered are kept and replayed on
/// registration.
pub(crate) struct HttpSubscription {
    callback: RefCell<Option<LogCallback>>,
    backlog: RefCell<VecDeque<LogEvent>>,
    closed: Cell<bool>,
    abort: AbortHandle,
}

impl HttpSubscription {
    pub(crate) fn new(abort: AbortHandle) -> Self {
        Self {
            callback: RefCell::new(None),
            backlog: RefCell::new(VecDeque::new()),
            closed: Cell::new(false),
            abort,
        }
    }

    pub(crate) fn deliver(&self, event: LogEvent) {
        if self.closed.get() {
            return;
        }

        let mut callback = self.callback.borrow_mut();
        match callback.as_mut() {
            Some(callback) => callback(event),
            None => self.backlog.borrow_mut().push_back(event),
        }
    }
}

impl LogSubscription for HttpSubscription {
    fn on_event(&self, callback: LogCallback) {
        *self.callback.borrow_mut() = Some(callback);

        let backlog: Vec<LogEvent> = self.backlog.borrow_mut().drain(..).collect();
        for event in backlog {
            self.deliver(event);
        }
    }

    fn close(&self) {
        if !self.closed.replace(true) {
            console_debug!("[HttpLogSource] Closing log connection");
            self.abort.abort();
        }
    }

    fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

async fn pump_log_stream(request: RequestBuilder, target: Weak<HttpSubscription>) {
    let deliver = |event: LogEvent| {
        if let Some(subscription) = target.upgrade() {
            subscription.deliver(event);
        }
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            deliver(LogEvent::TransportError(format!(
                "Log stream request failed: {}",
                e
            )));
            return;
        }
    };

    if !response.status().is_success() {
        deliver(LogEvent::TransportError(format!(
            "Log stream returned HTTP {}",
            response.status().as_u16()
        )));
        return;
    }

    forward_frames(response.bytes_stream(), &deliver).await;
}

/// Decode an event-stream body and hand each message to `deliver`.
///
/// The end of the body is reported as a transport error, the same way a
/// browser `EventSource` reports a dropped connection.
pub async fn forward_frames<S, E>(body: S, deliver: &dyn Fn(LogEvent))
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Display,
{
    pin_mut!(body);
    let mut decoder = SseDecoder::new();

    while let Some(chunk) = body.next().await {
        match chunk {
            Ok(bytes) => {
                for event in decoder.push(&bytes) {
                    if event.is_message() {
                        deliver(LogEvent::Line(event.data));
                    }
                }
            }
            Err(e) => {
                deliver(LogEvent::TransportError(format!(
                    "Log stream interrupted: {}",
                    e
                )));
                return;
            }
        }
    }

    deliver(LogEvent::TransportError("Log stream ended".to_string()));
}
