// All repositories module
pub mod auth;
pub mod task;

// Re-export all repositories for convenience
pub use auth::*;
pub use task::*;
