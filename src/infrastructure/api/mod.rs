pub mod auth;
pub mod client;
pub mod endpoint;

pub use auth::Credentials;
pub use client::{ApiError, PveClient};
pub use endpoint::Endpoint;
