// Task domain models
pub mod task;

pub use task::*;
