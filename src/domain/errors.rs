use thiserror::Error;

/// Failure of a single analysis request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The cancellation signal fired before the service answered
    #[error("Request timed out")]
    Timeout,

    /// DNS, connect, TLS or protocol failure
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The configured endpoint could not be turned into a request
    #[error("Invalid API URL: {0}")]
    InvalidEndpoint(String),

    /// A 2xx response whose body is not an analysis payload
    #[error("Unexpected response from API: {detail}")]
    MalformedResponse { status: u16, detail: String },
}

impl AnalysisError {
    /// HTTP status carried by API errors
    pub fn http_status(&self) -> Option<u16> {
        match self {
            AnalysisError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}
