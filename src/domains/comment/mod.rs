// Comment domain module
pub mod handlers;
pub mod services;
pub mod models;
pub mod routes;

pub use services::*;
pub use models::*;
pub use routes::*;
