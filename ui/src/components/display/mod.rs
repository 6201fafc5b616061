pub mod loading_indicator;
pub mod log_stream_panel;
pub mod wizard_stepper;

pub use loading_indicator::*;
pub use log_stream_panel::*;
pub use wizard_stepper::*;
