//! Labelled text inputs for the wizard forms

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextFieldProps {
    pub label: String,
    pub value: String,
    pub input_type: InputType,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

/// Controlled input: every keystroke reports the full new value
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                "{props.label}"
            }
            input {
                class: "input-field",
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}
