//! HTTP transport for GraphQL documents.
//!
//! One outbound POST per invocation. Non-2xx statuses, network errors, and
//! body-decode errors all surface as [`TransportError`]; there is no retry
//! and no timeout beyond the client defaults.

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::config::Config;
use crate::graphql::Document;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error! status: {0}")]
    Status(StatusCode),

    #[error("Error making Loco GraphQL request: {0}")]
    Request(#[from] reqwest::Error),
}

pub struct Transport {
    client: reqwest::Client,
    config: Config,
}

impl Transport {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Send one document and return the parsed JSON body of a 2xx response
    pub async fn send(&self, document: &Document) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(self.config.endpoint.clone())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(self.config.token.expose_secret())
            .json(&document.body())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        Ok(response.json::<Value>().await?)
    }
}
