// Comment domain services
pub mod comment_service;
pub mod state;

pub use comment_service::*;
pub use state::*;
