use super::ApiError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

/// The username and secret the API authenticates us with.
///
/// The secret is never printed; `Debug` output only shows the username.
#[derive(Debug)]
pub struct Credentials {
    username: String,
    secret: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Derives the HTTP basic authentication header for these credentials.
    ///
    /// The returned value is marked sensitive so that it is redacted
    /// whenever a request or header map is debug-printed.
    pub fn authorization_header(&self) -> Result<HeaderValue, ApiError> {
        // Basic authentication is simply `username:secret`, base64-encoded.
        let pair = format!("{}:{}", self.username, self.secret.expose_secret());
        let mut header = HeaderValue::from_str(&format!("Basic {}", STANDARD.encode(pair)))
            .map_err(|_| ApiError::Config("credentials produce an invalid header".to_string()))?;
        header.set_sensitive(true);
        Ok(header)
    }
}
