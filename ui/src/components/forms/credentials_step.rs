use dioxus::prelude::*;

use crate::components::inputs::{InputType, TextField};
use crate::wizard::CredentialsPayload;

#[derive(Props, PartialEq, Clone)]
pub struct CredentialsStepProps {
    pub value: CredentialsPayload,
    pub disabled: bool,
    pub on_change: EventHandler<CredentialsPayload>,
}

/// Step 1: Spotify client id and secret. No validation; values are sent as typed.
#[component]
pub fn CredentialsStep(props: CredentialsStepProps) -> Element {
    let on_change = props.on_change;
    let for_id = props.value.clone();
    let for_secret = props.value.clone();

    rsx! {
        div {
            class: "wizard-form credentials-step",

            TextField {
                label: "Spotify Client ID".to_string(),
                value: props.value.client_id.clone(),
                input_type: InputType::Text,
                disabled: props.disabled,
                on_change: move |client_id: String| {
                    on_change.call(for_id.with_client_id(client_id));
                }
            }

            TextField {
                label: "Spotify Client Secret".to_string(),
                value: props.value.client_secret.clone(),
                input_type: InputType::Password,
                disabled: props.disabled,
                on_change: move |client_secret: String| {
                    on_change.call(for_secret.with_client_secret(client_secret));
                }
            }
        }
    }
}
