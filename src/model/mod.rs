pub mod task;
pub mod config;
pub mod confirm;

pub use task::*;
pub use config::*;
pub use confirm::*;
