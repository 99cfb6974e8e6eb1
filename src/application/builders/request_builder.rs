use crate::domain::entities::Request;
use crate::domain::value_objects::Url;
use anyhow::{Result, anyhow};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is when encoding a query component
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const USER_AGENT: &str = concat!("metapeek/", env!("CARGO_PKG_VERSION"));

/// Builds the GET request sent to the analysis endpoint
pub struct AnalysisRequestBuilder {
    endpoint: String,
    target: Option<String>,
    headers: Vec<(String, String)>,
}

impl AnalysisRequestBuilder {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim().to_string(),
            target: None,
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("User-Agent".to_string(), USER_AGENT.to_string()),
            ],
        }
    }

    pub fn target(mut self, url: &str) -> Self {
        self.target = Some(url.to_string());
        self
    }

    /// Adds `Authorization: Bearer <key>` unless the key is absent or empty.
    pub fn bearer_token(mut self, api_key: Option<&str>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.headers
                .push(("Authorization".to_string(), format!("Bearer {}", key)));
        }
        self
    }

    pub fn build(self) -> Result<Request> {
        let target = self
            .target
            .ok_or_else(|| anyhow!("Target URL is required"))?;
        if self.endpoint.is_empty() {
            return Err(anyhow!("Endpoint cannot be empty"));
        }

        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        let encoded = utf8_percent_encode(&target, QUERY_COMPONENT);
        let url = Url::new(&format!("{}{}url={}", self.endpoint, separator, encoded))?;

        Ok(Request {
            url,
            headers: self.headers,
        })
    }
}
