//! Endpoint and credential resolution.
//!
//! The bearer token is resolved exactly once, at startup. A missing token is
//! a fatal configuration error, not a per-call error: no call can succeed
//! without it, so the process stops with a non-zero exit code instead.

use secrecy::SecretString;
use std::env;
use url::Url;

use crate::errors::ServerError;

/// The default Loco GraphQL endpoint, used when no override is configured
pub const DEFAULT_ENDPOINT: &str = "https://loco-app.expando.dev/api/graphql";

/// Environment variable holding the required bearer token
pub const API_TOKEN_VAR: &str = "LOCO_API_TOKEN";

/// Resolved endpoint and credential, passed into the transport at
/// construction so tests can supply their own without touching the
/// environment
#[derive(Clone)]
pub struct Config {
    pub endpoint: Url,
    pub token: SecretString,
}

impl Config {
    pub fn new(endpoint: Url, token: SecretString) -> Self {
        Self { endpoint, token }
    }

    /// Resolve the bearer token from the environment
    pub fn from_env(endpoint: Url) -> Result<Self, ServerError> {
        let token = env::var(API_TOKEN_VAR)
            .map_err(|_| ServerError::EnvironmentVariable(API_TOKEN_VAR.to_string()))?;
        Ok(Self::new(endpoint, SecretString::from(token)))
    }
}
