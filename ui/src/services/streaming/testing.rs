//! In-memory log source for tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::traits::{LogCallback, LogEvent, LogSource, LogSubscription};
use crate::services::errors::{SyncError, SyncResult};
use crate::wizard::JobHandle;

/// Subscription whose events are pushed by the test
pub struct MockSubscription {
    job_id: String,
    callback: RefCell<Option<LogCallback>>,
    closed: Cell<bool>,
    close_count: Cell<usize>,
}

impl MockSubscription {
    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn close_count(&self) -> usize {
        self.close_count.get()
    }

    pub fn emit(&self, event: LogEvent) {
        if self.closed.get() {
            return;
        }
        if let Some(callback) = self.callback.borrow_mut().as_mut() {
            callback(event);
        }
    }
}

impl LogSubscription for MockSubscription {
    fn on_event(&self, callback: LogCallback) {
        *self.callback.borrow_mut() = Some(callback);
    }

    fn close(&self) {
        if !self.closed.replace(true) {
            self.close_count.set(self.close_count.get() + 1);
        }
    }

    fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

#[derive(Default)]
pub struct MockLogSource {
    subscriptions: RefCell<Vec<Rc<MockSubscription>>>,
    open_error: Option<String>,
}

impl MockLogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            subscriptions: RefCell::new(Vec::new()),
            open_error: Some(message.to_string()),
        }
    }

    pub fn open_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    pub fn last_subscription(&self) -> Rc<MockSubscription> {
        self.subscriptions
            .borrow()
            .last()
            .cloned()
            .expect("no subscription was opened")
    }
}

impl LogSource for MockLogSource {
    fn open(&self, job: &JobHandle) -> SyncResult<Rc<dyn LogSubscription>> {
        if let Some(message) = &self.open_error {
            return Err(SyncError::stream(message.clone()));
        }

        let subscription = Rc::new(MockSubscription {
            job_id: job.job_id().to_string(),
            callback: RefCell::new(None),
            closed: Cell::new(false),
            close_count: Cell::new(0),
        });
        self.subscriptions.borrow_mut().push(Rc::clone(&subscription));
        Ok(subscription)
    }
}
