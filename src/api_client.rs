use crate::error::Result;
use crate::model::WordResult;
use crate::params::Endpoint;
use crate::query::Query;
use crate::transport::{HttpTransport, Transport};
use crate::url_builder::build_url;
use crate::validate::validate;
use serde_json::Value;
use std::sync::Arc;

/// Client for the Datamuse API
///
/// Every call is independent: validate, build the URL, one GET, decode.
/// Nothing is cached or retried.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }

    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Query `endpoint` and return the decoded JSON body untouched
    pub fn request(&self, endpoint: &str, query: &Query) -> Result<Value> {
        let endpoint = validate(endpoint, query)?;
        let url = build_url(endpoint, query);
        tracing::debug!(target: "api_client", "GET {}", url);

        let body = self.transport.get(&url)?;
        let value: Value = serde_json::from_slice(&body)?;

        if let Some(entries) = value.as_array() {
            tracing::debug!(target: "api_client", "{} entries from {}", entries.len(), endpoint);
        }
        Ok(value)
    }

    /// Word-finding query decoded into typed results
    pub fn words(&self, query: &Query) -> Result<Vec<WordResult>> {
        self.typed(Endpoint::Words, query)
    }

    /// Autocomplete suggestions for the prefix set with [`Query::prefix`]
    pub fn suggest(&self, query: &Query) -> Result<Vec<WordResult>> {
        self.typed(Endpoint::Suggestions, query)
    }

    fn typed(&self, endpoint: Endpoint, query: &Query) -> Result<Vec<WordResult>> {
        let value = self.request(endpoint.as_str(), query)?;
        Ok(serde_json::from_value(value)?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot request with a default client
pub fn request(endpoint: &str, query: &Query) -> Result<Value> {
    ApiClient::new().request(endpoint, query)
}
