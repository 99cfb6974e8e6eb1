use crate::application::services::{HttpClient, HttpRequestResult, TransportError};
use crate::domain::entities::{Request, Response};

use async_trait::async_trait;
use http_body_util::{BodyExt, Empty};
use hyper::body::{Bytes, Incoming};
use hyper::header::{AUTHORIZATION, HeaderName, HeaderValue, LOCATION};
use hyper::{Method, Request as HyperRequest, StatusCode, Uri};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use std::error::Error as StdError;
use tokio_native_tls::{TlsConnector, native_tls};
use tracing::debug;

/// Redirect hops followed before the request is abandoned
pub const MAX_REDIRECTS: usize = 20;

/// Infrastructure implementation of HttpClient using Hyper
/// Pooled http/https client that follows redirects up to [`MAX_REDIRECTS`]
pub struct HyperHttpClient {
    client: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
}

impl HyperHttpClient {
    pub fn new() -> Result<Self, TransportError> {
        let tls = native_tls::TlsConnector::new().map_err(|e| TransportError::Tls(e.to_string()))?;
        let mut http = HttpConnector::new();
        http.enforce_http(false);
        let connector = HttpsConnector::from((http, TlsConnector::from(tls)));
        let client = Client::builder(TokioExecutor::new()).build(connector);
        Ok(Self { client })
    }

    async fn execute_http_request(&self, request: Request) -> HttpRequestResult {
        let mut uri = request.url.0;
        let mut headers = request.headers;

        for hop in 0..=MAX_REDIRECTS {
            let hyper_request = RequestAdapter::to_hyper_request(&uri, &headers)?;
            let response = self
                .client
                .request(hyper_request)
                .await
                .map_err(|e| TransportError::Client(error_chain(&e)))?;

            let Some(redirect) = Redirect::from_response(&uri, &response)? else {
                return ResponseAdapter::to_domain_response(response).await;
            };

            debug!(from = %uri, to = %redirect.uri, hop, "following redirect");
            if redirect.cross_origin {
                headers.retain(|(name, _)| !name.eq_ignore_ascii_case(AUTHORIZATION.as_str()));
            }
            uri = redirect.uri;
        }

        Err(TransportError::TooManyRedirects(MAX_REDIRECTS))
    }
}

#[async_trait]
impl HttpClient for HyperHttpClient {
    async fn send(&self, request: Request) -> HttpRequestResult {
        self.execute_http_request(request).await
    }
}

// hyper_util's client error only names the failing stage; the cause sits in its sources.
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn check_scheme(scheme: &str) -> Result<(), TransportError> {
    match scheme {
        "http" | "https" => Ok(()),
        other => Err(TransportError::UnsupportedScheme(other.to_string())),
    }
}

/// Next hop of a 3xx response carrying a `Location` header
struct Redirect {
    uri: Uri,
    cross_origin: bool,
}

impl Redirect {
    fn from_response(current: &Uri, response: &hyper::Response<Incoming>) -> Result<Option<Self>, TransportError> {
        if !Self::is_redirect(response.status()) {
            return Ok(None);
        }
        match response.headers().get(LOCATION) {
            Some(location) => {
                let location = location
                    .to_str()
                    .map_err(|_| TransportError::Redirect("Location header is not valid text".to_string()))?;
                Self::resolve(current, location).map(Some)
            }
            None => Ok(None),
        }
    }

    fn is_redirect(status: StatusCode) -> bool {
        matches!(
            status,
            StatusCode::MOVED_PERMANENTLY
                | StatusCode::FOUND
                | StatusCode::SEE_OTHER
                | StatusCode::TEMPORARY_REDIRECT
                | StatusCode::PERMANENT_REDIRECT
        )
    }

    /// Resolves `location` against `current`, which may be relative
    fn resolve(current: &Uri, location: &str) -> Result<Self, TransportError> {
        let base = url::Url::parse(&current.to_string()).map_err(|e| TransportError::Redirect(e.to_string()))?;
        let mut next = base
            .join(location)
            .map_err(|e| TransportError::Redirect(format!("invalid Location '{}': {}", location, e)))?;
        check_scheme(next.scheme())?;
        next.set_fragment(None);

        let uri = next
            .as_str()
            .parse::<Uri>()
            .map_err(|e| TransportError::Redirect(e.to_string()))?;

        Ok(Self {
            uri,
            cross_origin: base.origin() != next.origin(),
        })
    }
}

/// Adapter for converting domain requests to Hyper requests
struct RequestAdapter;

impl RequestAdapter {
    fn to_hyper_request(
        uri: &Uri,
        headers: &[(String, String)],
    ) -> Result<HyperRequest<Empty<Bytes>>, TransportError> {
        check_scheme(uri.scheme_str().unwrap_or_default())?;

        let builder = HyperRequest::builder().method(Method::GET).uri(uri.clone());
        let builder = HeaderAdapter::apply(builder, headers)?;

        Ok(builder.body(Empty::new())?)
    }
}

/// Adapter for converting domain responses from Hyper responses
struct ResponseAdapter;

impl ResponseAdapter {
    async fn to_domain_response(hyper_response: hyper::Response<Incoming>) -> HttpRequestResult {
        let status = hyper_response.status();
        let body = Self::extract_response_body(hyper_response).await?;

        Ok(Response { status, body })
    }

    async fn extract_response_body(response: hyper::Response<Incoming>) -> Result<String, TransportError> {
        let body_bytes = response.into_body().collect().await?.to_bytes();

        Ok(String::from_utf8_lossy(&body_bytes).into_owned())
    }
}

/// Adapter for handling HTTP headers
struct HeaderAdapter;

impl HeaderAdapter {
    fn apply(
        mut builder: http::request::Builder,
        headers: &[(String, String)],
    ) -> Result<http::request::Builder, TransportError> {
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(http::Error::from)?;
            let value = HeaderValue::from_str(value).map_err(http::Error::from)?;
            builder = builder.header(name, value);
        }
        Ok(builder)
    }
}
