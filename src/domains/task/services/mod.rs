// Task domain services
pub mod task_service;
pub mod state;

pub use task_service::*;
pub use state::*;
