use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::display::{LoadingIndicator, LogStreamPanel, WizardStepper};
use crate::components::forms::{ConfigStep, CredentialsStep};
use crate::console_info;
use crate::services::client::HttpSyncClient;
use crate::services::config::BackendConfig;
use crate::wizard::{
    submit_sync, ConfigPayload, CredentialsPayload, WizardAction, WizardState, WizardStep,
};

const SYNC_WIZARD_CSS: Asset = asset!("/assets/styling/sync_wizard.css");

#[component]
pub fn SyncWizard() -> Element {
    // Consolidated state management
    let mut state = use_signal(WizardState::default);
    let config = use_hook(BackendConfig::default);
    let backend = use_hook({
        let config = config.clone();
        move || Rc::new(HttpSyncClient::new(config))
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: WizardAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let on_next = move |_: MouseEvent| {
        let request = state.with_mut(|s| s.begin_advance());
        if let Some(request) = request {
            let backend = Rc::clone(&backend);
            spawn(async move {
                let outcome = submit_sync(backend.as_ref(), &request).await;
                dispatch.call(outcome);
            });
        }
    };

    let current = state();

    let step_view = match current.step {
        WizardStep::Credentials => rsx! {
            CredentialsStep {
                value: current.credentials.clone(),
                disabled: current.pending,
                on_change: move |credentials: CredentialsPayload| dispatch.call(WizardAction::SetCredentials(credentials))
            }
        },
        WizardStep::Config => rsx! {
            ConfigStep {
                value: current.config.clone(),
                disabled: current.pending,
                on_change: move |config: ConfigPayload| dispatch.call(WizardAction::SetConfig(config))
            }
        },
        WizardStep::LiveLog => match current.job.clone() {
            Some(job) => rsx! {
                LogStreamPanel {
                    key: "{job.job_id()}",
                    job: job,
                    config: config.clone()
                }
            },
            None => rsx! {},
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SYNC_WIZARD_CSS }

        div {
            class: "sync-wizard-container",

            h1 {
                class: "wizard-title",
                "YouTube to Spotify Sync Wizard"
            }

            WizardStepper { active: current.step }

            div {
                class: "wizard-body",

                {step_view}

                if current.pending {
                    LoadingIndicator { message: "Starting sync...".to_string() }
                }

                if let Some(error) = &current.last_error {
                    div {
                        class: "wizard-error",
                        "{error}"
                    }
                }

                div {
                    class: "wizard-nav",
                    button {
                        class: "nav-button back-button",
                        disabled: !current.can_go_back(),
                        onclick: move |_| {
                            console_info!("[Wizard] Back pressed");
                            dispatch.call(WizardAction::Retreat);
                        },
                        "Back"
                    }
                    div { class: "nav-spacer" }
                    if current.shows_next_button() {
                        button {
                            class: "nav-button next-button",
                            disabled: current.pending,
                            onclick: on_next,
                            "{current.next_label()}"
                        }
                    }
                }
            }
        }
    }
}
