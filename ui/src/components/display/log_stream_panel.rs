use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::console_error;
use crate::services::config::BackendConfig;
use crate::services::streaming::{LogPanel, LogSource, LogStream};
use crate::wizard::JobHandle;

/// Browser builds read the log through the native `EventSource`
#[cfg(target_arch = "wasm32")]
fn default_log_source(config: BackendConfig) -> Rc<dyn LogSource> {
    Rc::new(crate::services::streaming::EventSourceLogSource::new(config))
}

/// Desktop builds stream the body with reqwest on the Dioxus executor
#[cfg(not(target_arch = "wasm32"))]
fn default_log_source(config: BackendConfig) -> Rc<dyn LogSource> {
    use crate::services::streaming::{HttpLogSource, LocalSpawner};
    use futures::future::LocalBoxFuture;

    let spawner: LocalSpawner = Rc::new(|future: LocalBoxFuture<'static, ()>| {
        spawn(future);
    });
    Rc::new(HttpLogSource::new(config, spawner))
}

type MountedStream = Rc<RefCell<Option<LogStream>>>;

#[derive(Props, PartialEq, Clone)]
pub struct LogStreamPanelProps {
    pub job: JobHandle,
    pub config: BackendConfig,
}

/// Live log of one sync job.
///
/// Opens the job's stream once on mount and closes it on unmount. Mount it
/// keyed by job id so a new job gets a new connection.
#[component]
pub fn LogStreamPanel(props: LogStreamPanelProps) -> Element {
    let mut panel = use_signal(LogPanel::default);

    let (mounted, mount_error): (MountedStream, Option<String>) = use_hook(|| {
        let source = default_log_source(props.config.clone());
        let result = LogStream::mount(source.as_ref(), &props.job, move |latest: &LogPanel| {
            panel.with_mut(|view| view.catch_up(latest));
        });

        match result {
            Ok(stream) => (Rc::new(RefCell::new(Some(stream))), None),
            Err(e) => {
                console_error!(
                    "[LogStreamPanel] Could not open log for job {}: {}",
                    props.job.job_id(),
                    e
                );
                (Rc::new(RefCell::new(None)), Some(e.to_string()))
            }
        }
    });

    use_drop(move || {
        if let Some(stream) = mounted.borrow_mut().take() {
            stream.unmount();
        }
    });

    let view = panel.read().clone();
    let error = view.error.clone().or(mount_error);

    rsx! {
        div {
            class: "log-stream",
            h3 {
                class: "log-title",
                "Live Sync Log"
            }
            div {
                class: "log-panel",
                if view.lines.is_empty() {
                    span {
                        class: "log-placeholder",
                        "No log yet."
                    }
                }
                for (index, line) in view.lines.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "log-line",
                        "{line}"
                    }
                }
            }
            if let Some(error) = error {
                div {
                    class: "log-closed",
                    "Log stream closed: {error}"
                }
            }
        }
    }
}
