//! Network half of advancing past the config step

use crate::services::client::{StartSyncRequest, SyncBackend};
use crate::wizard::WizardAction;
use crate::{console_info, console_warn};

/// Send the start-sync request and turn the outcome into the action that
/// finishes the pending submit. No retry: on failure the user edits and
/// presses "Next" again.
pub async fn submit_sync<B>(backend: &B, request: &StartSyncRequest) -> WizardAction
where
    B: SyncBackend + ?Sized,
{
    console_info!(
        "[Wizard] Submitting sync for playlist {}",
        request.youtube.url
    );

    match backend.start_sync(request).await {
        Ok(job) => WizardAction::SubmitSucceeded(job),
        Err(e) => {
            console_warn!("[Wizard] Start sync failed: {}", e);
            WizardAction::SubmitFailed(e.to_string())
        }
    }
}
