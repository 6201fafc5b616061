pub mod sync_wizard;

pub use sync_wizard::SyncWizard;
