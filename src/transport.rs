use crate::error::{DatamuseError, Result};
use std::time::Duration;

/// Performs the single GET a request needs and hands back the raw body
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP transport backed by `reqwest`
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Build a transport with an optional timeout and user agent.
    /// Without a timeout the call waits as long as the HTTP stack does.
    pub fn with_options(timeout: Option<Duration>, user_agent: Option<&str>) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        // reqwest's blocking client defaults to a 30s timeout; `None` disables it
        builder = builder.timeout(timeout);
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent.to_string());
        }
        let client = builder
            .build()
            .map_err(|e| DatamuseError::transport("<client setup>", e))?;
        Ok(Self { client })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| DatamuseError::transport(url, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .map_err(|e| DatamuseError::transport(url, e))?;

        tracing::trace!(target: "transport", "{} returned {} bytes ({})", url, body.len(), status);
        Ok(body.to_vec())
    }
}
