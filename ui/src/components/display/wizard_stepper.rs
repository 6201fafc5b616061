use dioxus::prelude::*;

use crate::wizard::WizardStep;

#[derive(Props, PartialEq, Clone)]
pub struct WizardStepperProps {
    pub active: WizardStep,
}

fn item_class(step: WizardStep, active: WizardStep) -> &'static str {
    if step == active {
        "stepper-item active"
    } else if step.index() < active.index() {
        "stepper-item completed"
    } else {
        "stepper-item"
    }
}

/// Step header: completed steps are checked, the active one highlighted
#[component]
pub fn WizardStepper(props: WizardStepperProps) -> Element {
    let active = props.active;

    rsx! {
        ol {
            class: "wizard-stepper",
            for step in WizardStep::ALL {
                li {
                    key: "{step.index()}",
                    class: item_class(step, active),
                    span {
                        class: "stepper-marker",
                        if step.index() < active.index() { "✓" } else { "{step.index() + 1}" }
                    }
                    span {
                        class: "stepper-label",
                        "{step.label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_classes_follow_active_step() {
        let classes: Vec<&str> = WizardStep::ALL
            .iter()
            .map(|step| item_class(*step, WizardStep::Config))
            .collect();
        assert_eq!(
            classes,
            vec!["stepper-item completed", "stepper-item active", "stepper-item"]
        );
    }
}
