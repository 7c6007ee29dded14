// Comment domain models
pub mod comment;

pub use comment::*;
