pub mod config_step;
pub mod credentials_step;

pub use config_step::*;
pub use credentials_step::*;
