//! Sync Wizard
//!
//! Three linear steps: Spotify credentials, sync configuration, live log.
//! All state lives in [`WizardState`] and changes through its reducer, so the
//! whole flow can be exercised without a UI runtime.
//!
//! ```rust,ignore
//! if let Some(request) = state.with_mut(|s| s.begin_advance()) {
//!     spawn(async move {
//!         dispatch.call(submit_sync(backend.as_ref(), &request).await);
//!     });
//! }
//! ```

pub mod controller;
pub mod types;

pub use controller::*;
pub use types::*;
