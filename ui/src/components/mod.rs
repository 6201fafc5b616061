//! User Interface Components
//!
//! Reusable Dioxus components for the sync wizard UI:
//!
//! - **forms**: the credentials and sync-config steps
//! - **display**: step header, loading indicator and the live log panel
//! - **inputs**: labelled controlled text inputs

pub mod display;
pub mod forms;
pub mod inputs;
