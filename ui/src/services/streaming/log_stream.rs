//! Live log state machine, independent of any UI runtime.
//!
//! `Connecting -> Receiving* -> Closed`, where `Closed` is reached either by a
//! transport error or by unmounting. The underlying subscription is closed
//! exactly once on either path.

use std::cell::RefCell;
use std::rc::Rc;

use super::traits::{LogEvent, LogSource, LogSubscription};
use crate::services::errors::SyncResult;
use crate::wizard::JobHandle;
use crate::{console_debug, console_info, console_warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogStreamStatus {
    #[default]
    Connecting,
    Receiving,
    Closed,
}

/// What the log panel shows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogPanel {
    /// Append-only, in arrival order
    pub lines: Vec<String>,
    pub status: LogStreamStatus,
    /// Set when the transport failed
    pub error: Option<String>,
}

impl LogPanel {
    /// Bring a copy up to date with `latest`, appending only the lines it lacks
    pub fn catch_up(&mut self, latest: &LogPanel) {
        if latest.lines.len() > self.lines.len() {
            self.lines
                .extend_from_slice(&latest.lines[self.lines.len()..]);
        }
        self.status = latest.status;
        self.error = latest.error.clone();
    }
}

/// A mounted log view bound to one job's subscription.
///
/// Dropping the stream unmounts it.
pub struct LogStream {
    job: JobHandle,
    panel: Rc<RefCell<LogPanel>>,
    subscription: Rc<dyn LogSubscription>,
}

impl LogStream {
    /// Open the job's log connection and start collecting lines.
    ///
    /// `on_change` runs after every state change caused by the connection.
    pub fn mount<F>(source: &dyn LogSource, job: &JobHandle, on_change: F) -> SyncResult<Self>
    where
        F: FnMut(&LogPanel) + 'static,
    {
        console_info!("[LogStream] Opening live log for job {}", job.job_id());
        let subscription = source.open(job)?;
        let panel = Rc::new(RefCell::new(LogPanel::default()));

        let callback_panel = Rc::clone(&panel);
        let callback_subscription = Rc::downgrade(&subscription);
        let job_id = job.job_id().to_string();
        let mut on_change = on_change;

        subscription.on_event(Box::new(move |event: LogEvent| {
            let failed = {
                let mut panel = callback_panel.borrow_mut();
                if panel.status == LogStreamStatus::Closed {
                    return;
                }

                match event {
                    LogEvent::Line(line) => {
                        panel.status = LogStreamStatus::Receiving;
                        panel.lines.push(line);
                        false
                    }
                    LogEvent::TransportError(message) => {
                        console_warn!("[LogStream] Log for job {} failed: {}", job_id, message);
                        panel.status = LogStreamStatus::Closed;
                        panel.error = Some(message);
                        true
                    }
                }
            };

            // No reconnection: a failed transport is released immediately
            if failed {
                if let Some(subscription) = callback_subscription.upgrade() {
                    subscription.close();
                }
            }

            on_change(&callback_panel.borrow());
        }));

        Ok(Self {
            job: job.clone(),
            panel,
            subscription,
        })
    }

    pub fn job(&self) -> &JobHandle {
        &self.job
    }

    pub fn status(&self) -> LogStreamStatus {
        self.panel.borrow().status
    }

    pub fn lines(&self) -> Vec<String> {
        self.panel.borrow().lines.clone()
    }

    pub fn snapshot(&self) -> LogPanel {
        self.panel.borrow().clone()
    }

    /// Close the connection and release the stream
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for LogStream {
    fn drop(&mut self) {
        let was_open = {
            let mut panel = self.panel.borrow_mut();
            let was_open = panel.status != LogStreamStatus::Closed;
            panel.status = LogStreamStatus::Closed;
            was_open
        };

        if was_open {
            console_debug!("[LogStream] Unmounting live log for job {}", self.job.job_id());
            self.subscription.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::errors::SyncError;
    use crate::services::streaming::testing::MockLogSource;

    fn job() -> JobHandle {
        JobHandle::new("job-1")
    }

    #[test]
    fn test_lines_arrive_in_order() {
        let source = MockLogSource::new();
        let stream = LogStream::mount(&source, &job(), |_| {}).unwrap();
        assert_eq!(stream.status(), LogStreamStatus::Connecting);
        assert!(stream.lines().is_empty());

        let subscription = source.last_subscription();
        assert_eq!(subscription.job_id(), "job-1");

        subscription.emit(LogEvent::Line("A".to_string()));
        subscription.emit(LogEvent::Line("B".to_string()));

        assert_eq!(stream.lines(), vec!["A".to_string(), "B".to_string()]);
        assert_eq!(stream.status(), LogStreamStatus::Receiving);
    }

    #[test]
    fn test_lines_are_verbatim() {
        let source = MockLogSource::new();
        let stream = LogStream::mount(&source, &job(), |_| {}).unwrap();
        let subscription = source.last_subscription();

        for line in ["", "  padded  ", "Step 1/5: Syncing...", "<b>not html</b>"] {
            subscription.emit(LogEvent::Line(line.to_string()));
        }
        assert_eq!(
            stream.lines(),
            vec!["", "  padded  ", "Step 1/5: Syncing...", "<b>not html</b>"]
        );
    }

    #[test]
    fn test_unmount_closes_exactly_once() {
        let source = MockLogSource::new();
        let stream = LogStream::mount(&source, &job(), |_| {}).unwrap();
        let subscription = source.last_subscription();
        subscription.emit(LogEvent::Line("A".to_string()));

        stream.unmount();
        assert_eq!(subscription.close_count(), 1);

        // events after unmount are ignored by the subscription
        subscription.emit(LogEvent::Line("late".to_string()));
        assert_eq!(subscription.close_count(), 1);
    }

    #[test]
    fn test_transport_error_closes_without_reconnect() {
        let source = MockLogSource::new();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let recorded = Rc::clone(&changes);
        let stream = LogStream::mount(&source, &job(), move |panel: &LogPanel| {
            recorded.borrow_mut().push(panel.status);
        })
        .unwrap();
        let subscription = source.last_subscription();

        subscription.emit(LogEvent::Line("A".to_string()));
        subscription.emit(LogEvent::TransportError("connection reset".to_string()));

        assert_eq!(stream.status(), LogStreamStatus::Closed);
        assert_eq!(stream.snapshot().error.as_deref(), Some("connection reset"));
        assert_eq!(stream.lines(), vec!["A".to_string()]);
        assert_eq!(subscription.close_count(), 1);
        assert_eq!(source.open_count(), 1);
        assert_eq!(
            *changes.borrow(),
            vec![LogStreamStatus::Receiving, LogStreamStatus::Closed]
        );

        // unmount after an error does not close a second time
        drop(stream);
        assert_eq!(subscription.close_count(), 1);
    }

    #[test]
    fn test_open_failure_is_reported() {
        let source = MockLogSource::failing("Failed to open log stream");
        let result = LogStream::mount(&source, &job(), |_| {});
        assert!(matches!(result, Err(SyncError::Stream { .. })));
    }

    #[test]
    fn test_catch_up_appends_only_new_lines() {
        let mut view = LogPanel::default();
        let mut latest = LogPanel {
            lines: vec!["A".to_string()],
            status: LogStreamStatus::Receiving,
            error: None,
        };
        view.catch_up(&latest);
        assert_eq!(view, latest);

        latest.lines.push("B".to_string());
        latest.status = LogStreamStatus::Closed;
        latest.error = Some("gone".to_string());
        view.catch_up(&latest);
        assert_eq!(view, latest);
    }
}
