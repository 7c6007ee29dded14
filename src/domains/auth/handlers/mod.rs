// Auth domain handlers
pub mod auth_handler;
pub mod token_handler;
