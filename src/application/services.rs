use crate::application::builders::request_builder::AnalysisRequestBuilder;
use crate::domain::entities::{AnalysisResult, Request, Response};
use crate::domain::errors::AnalysisError;
use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Transport-level failure reported by an [`HttpClient`]
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("{0}")]
    Client(String),

    #[error("{0}")]
    Tls(String),

    #[error("bad redirect: {0}")]
    Redirect(String),

    #[error("stopped after {0} redirects")]
    TooManyRedirects(usize),

    #[error("{0}")]
    Http(#[from] hyper::Error),

    #[error("failed to build request: {0}")]
    InvalidRequest(#[from] http::Error),
}

pub type HttpRequestResult = Result<Response, TransportError>;

/// Trait for HTTP clients to enable mocking and dependency inversion
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: Request) -> HttpRequestResult;
}

/// Resolves when the caller wants the pending request abandoned
pub type Cancellation = BoxFuture<'static, ()>;

/// Per-call settings for [`AnalysisService::fetch_analysis`]
pub struct AnalysisOptions {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub cancellation: Option<Cancellation>,
}

impl AnalysisOptions {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            cancellation: None,
        }
    }

    pub fn api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn cancellation(mut self, cancellation: Option<Cancellation>) -> Self {
        self.cancellation = cancellation;
        self
    }
}

/// Application service that fetches and classifies analysis results
pub struct AnalysisService {
    http_client: Box<dyn HttpClient>,
}

impl AnalysisService {
    pub fn new(http_client: Box<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Requests the analysis of `url`. Issues one logical request (redirects
    /// are followed by the transport) and never retries.
    pub async fn fetch_analysis(
        &self,
        url: &str,
        options: AnalysisOptions,
    ) -> Result<AnalysisResult, AnalysisError> {
        let request = AnalysisRequestBuilder::new(&options.endpoint)
            .target(url)
            .bearer_token(options.api_key.as_deref())
            .build()
            .map_err(|e| AnalysisError::InvalidEndpoint(e.to_string()))?;

        debug!(target_url = url, request = %request.url.as_str(), "requesting analysis");

        let response = self.send(request, options.cancellation).await?;

        debug!(
            status = response.status.as_u16(),
            bytes = response.body.len(),
            "analysis response received"
        );

        if !response.status.is_success() {
            let error = ResponseClassifier::api_error(&response);
            warn!(status = response.status.as_u16(), error = %error, "analysis API returned an error");
            return Err(error);
        }

        serde_json::from_str(&response.body).map_err(|e| AnalysisError::MalformedResponse {
            status: response.status.as_u16(),
            detail: e.to_string(),
        })
    }

    // Dropping the transport future on cancellation releases its connection.
    async fn send(
        &self,
        request: Request,
        cancellation: Option<Cancellation>,
    ) -> Result<Response, AnalysisError> {
        let result = match cancellation {
            Some(cancelled) => tokio::select! {
                result = self.http_client.send(request) => result,
                _ = cancelled => {
                    debug!("analysis request cancelled");
                    return Err(AnalysisError::Timeout);
                }
            },
            None => self.http_client.send(request).await,
        };

        result.map_err(|e| AnalysisError::Network(e.to_string()))
    }
}

/// Maps non-success responses to API errors
struct ResponseClassifier;

impl ResponseClassifier {
    fn api_error(response: &Response) -> AnalysisError {
        let status = response.status.as_u16();
        let message = Self::body_message(&response.body)
            .unwrap_or_else(|| format!("API returned {}", status));
        AnalysisError::Api { status, message }
    }

    fn body_message(body: &str) -> Option<String> {
        match serde_json::from_str::<Value>(body).ok()?.get("message")? {
            Value::String(message) if !message.is_empty() => Some(message.clone()),
            _ => None,
        }
    }
}
