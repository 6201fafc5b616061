use dioxus::prelude::*;

use crate::components::inputs::{InputType, TextField};
use crate::wizard::ConfigPayload;

#[derive(Props, PartialEq, Clone)]
pub struct ConfigStepProps {
    pub value: ConfigPayload,
    pub disabled: bool,
    pub on_change: EventHandler<ConfigPayload>,
}

/// Step 2: source YouTube playlist and target Spotify playlist
#[component]
pub fn ConfigStep(props: ConfigStepProps) -> Element {
    let on_change = props.on_change;
    let for_url = props.value.clone();
    let for_playlist = props.value.clone();

    rsx! {
        div {
            class: "wizard-form config-step",

            TextField {
                label: "YouTube Playlist URL".to_string(),
                value: props.value.playlist_url.clone(),
                input_type: InputType::Text,
                disabled: props.disabled,
                on_change: move |playlist_url: String| {
                    on_change.call(for_url.with_playlist_url(playlist_url));
                }
            }

            TextField {
                label: "Spotify Playlist ID".to_string(),
                value: props.value.target_playlist_id.clone(),
                input_type: InputType::Text,
                disabled: props.disabled,
                on_change: move |target_playlist_id: String| {
                    on_change.call(for_playlist.with_target_playlist_id(target_playlist_id));
                }
            }
        }
    }
}
