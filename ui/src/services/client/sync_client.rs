use async_trait::async_trait;
use reqwest::Client;
use tracing::instrument;

use super::types::{StartSyncRequest, StartSyncResponse};
use crate::services::config::BackendConfig;
use crate::services::errors::{SyncError, SyncResult};
use crate::wizard::JobHandle;
use crate::{console_info, console_warn};

/// The one backend operation the wizard needs - WASM-only, no Send bound
#[async_trait(?Send)]
pub trait SyncBackend {
    /// Start a sync job and return its handle
    async fn start_sync(&self, request: &StartSyncRequest) -> SyncResult<JobHandle>;
}

/// `reqwest`-backed client for the sync backend
#[derive(Clone)]
pub struct HttpSyncClient {
    pub(crate) http_client: Client,
    pub(crate) config: BackendConfig,
}

impl HttpSyncClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// POST the accumulated wizard payload to `/sync`
    #[instrument(skip(self, request), fields(playlist = %request.youtube.url), err)]
    pub async fn post_sync(&self, request: &StartSyncRequest) -> SyncResult<JobHandle> {
        let url = self.config.sync_url()?;
        console_info!("[SyncClient] Starting sync via {}", url);

        let response = self.http_client.post(url).json(request).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        interpret_start_sync_response(status, &body)
    }
}

#[async_trait(?Send)]
impl SyncBackend for HttpSyncClient {
    async fn start_sync(&self, request: &StartSyncRequest) -> SyncResult<JobHandle> {
        self.post_sync(request).await
    }
}

/// Map a raw `POST /sync` response onto a job handle.
///
/// Anything but a 2xx status carrying a JSON object with a non-empty string
/// `job_id` is a failure.
pub fn interpret_start_sync_response(status: u16, body: &str) -> SyncResult<JobHandle> {
    if !(200..300).contains(&status) {
        console_warn!("[SyncClient] Backend rejected sync request with HTTP {}", status);
        return Err(SyncError::Status { status });
    }

    let parsed: StartSyncResponse = serde_json::from_str(body).map_err(|e| {
        console_warn!("[SyncClient] Unreadable start-sync response: {}", e);
        SyncError::MissingJobId
    })?;

    match parsed.job_id {
        Some(job_id) if !job_id.is_empty() => Ok(JobHandle::new(job_id)),
        _ => Err(SyncError::MissingJobId),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{ConfigPayload, CredentialsPayload};
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let credentials = CredentialsPayload {
            client_id: "abc".to_string(),
            client_secret: "s3cret".to_string(),
        };
        let config = ConfigPayload {
            playlist_url: "https://www.youtube.com/playlist?list=PL123".to_string(),
            target_playlist_id: "37i9dQZF1DX".to_string(),
        };

        let body = serde_json::to_value(StartSyncRequest::new(&credentials, &config)).unwrap();
        assert_eq!(
            body,
            json!({
                "spotify": { "clientId": "abc", "clientSecret": "s3cret" },
                "youtube": { "url": "https://www.youtube.com/playlist?list=PL123" },
                "spotifyPlaylistId": "37i9dQZF1DX"
            })
        );
    }

    #[test]
    fn test_success_response() {
        let job = interpret_start_sync_response(200, r#"{"job_id":"1234-abcd"}"#).unwrap();
        assert_eq!(job.job_id(), "1234-abcd");

        let job = interpret_start_sync_response(202, r#"{"job_id":"x","extra":true}"#).unwrap();
        assert_eq!(job.job_id(), "x");
    }

    #[test]
    fn test_non_success_status() {
        for status in [199, 301, 400, 404, 500, 503] {
            assert_eq!(
                interpret_start_sync_response(status, r#"{"job_id":"1234"}"#),
                Err(SyncError::Status { status })
            );
        }
    }

    #[test]
    fn test_malformed_success_bodies() {
        for body in [
            "{}",
            r#"{"job_id":null}"#,
            r#"{"job_id":""}"#,
            r#"{"job_id":42}"#,
            "not json",
            "",
        ] {
            assert_eq!(
                interpret_start_sync_response(200, body),
                Err(SyncError::MissingJobId),
                "body {:?}",
                body
            );
        }
    }
}
