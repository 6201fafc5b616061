// Core types for the sync wizard - no dioxus imports needed here
use serde::Serialize;
use std::fmt;

use crate::services::client::StartSyncRequest;

/// Wizard step management
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WizardStep {
    #[default]
    Credentials,
    Config,
    LiveLog,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Credentials,
        WizardStep::Config,
        WizardStep::LiveLog,
    ];

    /// Position of the step, in `0..=2`
    pub fn index(self) -> usize {
        match self {
            WizardStep::Credentials => 0,
            WizardStep::Config => 1,
            WizardStep::LiveLog => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Credentials => "Spotify Credentials",
            WizardStep::Config => "Sync Config",
            WizardStep::LiveLog => "Live Sync Log",
        }
    }

    pub fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::Credentials => None,
            WizardStep::Config => Some(WizardStep::Credentials),
            WizardStep::LiveLog => Some(WizardStep::Config),
        }
    }

    pub fn is_last(self) -> bool {
        self == WizardStep::LiveLog
    }
}

/// Spotify OAuth client credentials, sent as the `spotify` object of the request
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct CredentialsPayload {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

impl CredentialsPayload {
    pub fn with_client_id(&self, client_id: String) -> Self {
        Self {
            client_id,
            ..self.clone()
        }
    }

    pub fn with_client_secret(&self, client_secret: String) -> Self {
        Self {
            client_secret,
            ..self.clone()
        }
    }
}

// Keep the secret out of logs and panic messages
impl fmt::Debug for CredentialsPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsPayload")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &if self.client_secret.is_empty() { "" } else { "<redacted>" },
            )
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigPayload {
    pub playlist_url: String,
    pub target_playlist_id: String,
}

impl ConfigPayload {
    pub fn with_playlist_url(&self, playlist_url: String) -> Self {
        Self {
            playlist_url,
            ..self.clone()
        }
    }

    pub fn with_target_playlist_id(&self, target_playlist_id: String) -> Self {
        Self {
            target_playlist_id,
            ..self.clone()
        }
    }
}

/// Server-side job returned by a successful start-sync call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobHandle {
    job_id: String,
}

impl JobHandle {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum WizardAction {
    // Form actions
    SetCredentials(CredentialsPayload),
    SetConfig(ConfigPayload),

    // Navigation
    Retreat,

    // Start-sync outcome
    SubmitSucceeded(JobHandle),
    SubmitFailed(String),
}

/// Complete wizard state.
///
/// `job` is `Some` exactly when `step` is [`WizardStep::LiveLog`], and `pending`
/// is only true while a start-sync call is in flight. All mutation goes through
/// [`WizardState::reduce_in_place`] and [`WizardState::begin_advance`], which
/// keep both invariants.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardState {
    pub step: WizardStep,
    pub credentials: CredentialsPayload,
    pub config: ConfigPayload,
    pub job: Option<JobHandle>,
    pub pending: bool,
    pub last_error: Option<String>,
}

impl WizardState {
    /// Reduces the state based on an action
    pub fn reduce(mut self, action: WizardAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// In-place reducer so a Dioxus `Signal` can be mutated without replacing it
    pub fn reduce_in_place(&mut self, action: WizardAction) {
        match action {
            WizardAction::SetCredentials(credentials) => {
                self.credentials = credentials;
            }
            WizardAction::SetConfig(config) => {
                self.config = config;
            }
            WizardAction::Retreat => {
                if self.pending {
                    return;
                }
                if let Some(previous) = self.step.previous() {
                    self.step = previous;
                    // Leaving the log step unmounts the stream
                    self.job = None;
                }
            }
            WizardAction::SubmitSucceeded(job) => {
                if !self.pending || self.step != WizardStep::Config {
                    crate::console_warn!(
                        "[Wizard] Ignoring start-sync result for job {} outside a pending submit",
                        job.job_id()
                    );
                    return;
                }
                crate::console_info!("[Wizard] Sync job {} started", job.job_id());
                self.pending = false;
                self.job = Some(job);
                self.step = WizardStep::LiveLog;
            }
            WizardAction::SubmitFailed(message) => {
                self.pending = false;
                self.last_error = Some(message);
            }
        }
    }

    /// Synchronous half of "Next".
    ///
    /// Moves from credentials to config directly. On the config step it marks the
    /// submit as pending and returns the request the caller must send; the result
    /// comes back as [`WizardAction::SubmitSucceeded`] or
    /// [`WizardAction::SubmitFailed`]. Returns `None` whenever nothing has to be
    /// sent, including while a submit is already in flight.
    pub fn begin_advance(&mut self) -> Option<StartSyncRequest> {
        if self.pending {
            return None;
        }
        self.last_error = None;

        match self.step {
            WizardStep::Credentials => {
                self.step = WizardStep::Config;
                None
            }
            WizardStep::Config => {
                self.pending = true;
                Some(self.start_sync_request())
            }
            WizardStep::LiveLog => None,
        }
    }

    pub fn start_sync_request(&self) -> StartSyncRequest {
        StartSyncRequest::new(&self.credentials, &self.config)
    }

    /// Helper methods for common state queries
    pub fn can_go_back(&self) -> bool {
        self.step.previous().is_some() && !self.pending
    }

    pub fn shows_next_button(&self) -> bool {
        !self.step.is_last()
    }

    pub fn next_label(&self) -> &'static str {
        if self.pending && self.step == WizardStep::Config {
            "Starting..."
        } else {
            "Next"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_log_step() -> WizardState {
        let mut state = WizardState::default();
        state.begin_advance();
        assert!(state.begin_advance().is_some());
        state.reduce(WizardAction::SubmitSucceeded(JobHandle::new("job-1")))
    }

    #[test]
    fn test_default_state() {
        let state = WizardState::default();
        assert_eq!(state.step.index(), 0);
        assert_eq!(state.credentials, CredentialsPayload::default());
        assert_eq!(state.config, ConfigPayload::default());
        assert_eq!(state.job, None);
        assert!(!state.pending);
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn test_back_at_first_step_is_noop() {
        let state = WizardState::default().reduce(WizardAction::Retreat);
        assert_eq!(state.step, WizardStep::Credentials);
        assert_eq!(state.step.index(), 0);
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_back_keeps_entered_data() {
        let mut state = WizardState::default().reduce(WizardAction::SetCredentials(
            CredentialsPayload::default().with_client_id("abc".to_string()),
        ));
        state.begin_advance();
        state.reduce_in_place(WizardAction::SetConfig(
            ConfigPayload::default().with_playlist_url("https://youtu.be/x".to_string()),
        ));

        let state = state.reduce(WizardAction::Retreat);
        assert_eq!(state.step, WizardStep::Credentials);
        assert_eq!(state.credentials.client_id, "abc");
        assert_eq!(state.config.playlist_url, "https://youtu.be/x");
    }

    #[test]
    fn test_job_present_only_on_log_step() {
        let state = on_log_step();
        assert_eq!(state.step, WizardStep::LiveLog);
        assert_eq!(state.job, Some(JobHandle::new("job-1")));
        assert!(!state.shows_next_button());

        let state = state.reduce(WizardAction::Retreat);
        assert_eq!(state.step, WizardStep::Config);
        assert_eq!(state.job, None);
    }

    #[test]
    fn test_pending_blocks_navigation() {
        let mut state = WizardState::default();
        state.begin_advance();
        assert!(state.begin_advance().is_some());
        assert!(state.pending);
        assert_eq!(state.next_label(), "Starting...");
        assert!(!state.can_go_back());

        // a second press while in flight sends nothing
        assert!(state.begin_advance().is_none());

        let state = state.reduce(WizardAction::Retreat);
        assert_eq!(state.step, WizardStep::Config);
        assert!(state.pending);
    }

    #[test]
    fn test_failure_clears_pending_and_keeps_step() {
        let mut state = WizardState::default();
        state.begin_advance();
        state.begin_advance();

        let mut state = state.reduce(WizardAction::SubmitFailed("Failed to start sync".to_string()));
        assert!(!state.pending);
        assert_eq!(state.step, WizardStep::Config);
        assert_eq!(state.last_error.as_deref(), Some("Failed to start sync"));
        assert_eq!(state.next_label(), "Next");

        // pressing "Next" again clears the previous error
        assert!(state.begin_advance().is_some());
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn test_stale_success_is_ignored() {
        let state = WizardState::default()
            .reduce(WizardAction::SubmitSucceeded(JobHandle::new("stale")));
        assert_eq!(state.step, WizardStep::Credentials);
        assert_eq!(state.job, None);
    }

    #[test]
    fn test_advance_on_last_step_is_noop() {
        let mut state = on_log_step();
        assert!(state.begin_advance().is_none());
        assert_eq!(state.step, WizardStep::LiveLog);
    }

    #[test]
    fn test_keystroke_replaces_whole_payload() {
        let credentials = CredentialsPayload {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
        };
        assert_eq!(
            credentials.with_client_secret("other".to_string()),
            CredentialsPayload {
                client_id: "id".to_string(),
                client_secret: "other".to_string(),
            }
        );

        let config = ConfigPayload::default().with_target_playlist_id("pl".to_string());
        assert_eq!(config.playlist_url, "");
        assert_eq!(config.target_playlist_id, "pl");
    }

    #[test]
    fn test_secret_is_redacted_in_debug() {
        let credentials = CredentialsPayload {
            client_id: "id".to_string(),
            client_secret: "hunter2".to_string(),
        };
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("id"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_step_labels() {
        let labels: Vec<&str> = WizardStep::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Spotify Credentials", "Sync Config", "Live Sync Log"]);
        assert!(WizardStep::ALL
            .iter()
            .enumerate()
            .all(|(i, step)| step.index() == i));
    }
}
