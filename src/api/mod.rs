mod client;
mod credentials;
mod error;

pub use client::{ApiClient, ApiClientBuilder};
pub use credentials::Credentials;
pub use error::{ApiError, Result};
