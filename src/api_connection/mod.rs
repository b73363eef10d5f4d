pub mod connection;
pub mod endpoints;

pub use connection::ApiConnectionError;
pub use endpoints::{GenerateContentRequest, GenerateContentResponse, Provider, DEFAULT_MODEL};
