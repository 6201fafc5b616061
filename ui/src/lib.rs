//! This crate contains the UI components and client logic for the YouTube to
//! Spotify sync wizard.

pub mod app;
pub use app::SyncWizard;

pub mod components;
pub mod services;
pub mod utils;
pub mod wizard;
