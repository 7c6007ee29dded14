// Comment domain handlers
pub mod comment_handler;
