pub mod api_client;
pub mod error;

pub use api_client::{ApiClient, parse_payload};
pub use error::ApiError;
