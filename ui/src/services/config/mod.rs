//! Backend endpoint configuration

use reqwest::Url;

use crate::services::errors::{SyncError, SyncResult};
use crate::wizard::JobHandle;

/// Host of the sync backend. The wizard is a local tool talking to a backend
/// on the same machine, so this is a fixed default rather than user input.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `POST` target that starts a sync job
    pub fn sync_url(&self) -> SyncResult<Url> {
        self.endpoint(&["sync"])
    }

    /// `GET` target of the live log event stream for `job`
    pub fn log_stream_url(&self, job: &JobHandle) -> SyncResult<Url> {
        self.endpoint(&["sync", job.job_id()])
    }

    fn endpoint(&self, segments: &[&str]) -> SyncResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            SyncError::request(format!("Invalid backend URL '{}': {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                SyncError::request(format!("Invalid backend URL '{}'", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}
