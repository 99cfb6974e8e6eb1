use anyhow::{Result, anyhow};
use hyper::http::Uri;

/// Represents a validated request URL
#[derive(Debug, Clone)]
pub struct Url(pub Uri);

impl Url {
    /// Creates a new Url with validation
    ///
    /// # Arguments
    /// * `url` - The URL string to parse
    ///
    /// # Returns
    /// * `Ok(Url)` - Validated URL
    /// * `Err(anyhow::Error)` - If the URL is invalid
    pub fn new(url: &str) -> Result<Self> {
        let uri = url.parse::<Uri>().map_err(|e| anyhow!("Invalid URL: {}", e))?;
        if uri.scheme().is_none() || uri.host().is_none() {
            return Err(anyhow!("Invalid URL: '{}' is not absolute", url));
        }
        Ok(Url(uri))
    }

    /// Returns the URL as a string
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

/// Canonicalizes a user-supplied target.
///
/// Surrounding whitespace is removed and `https://` is prepended unless the
/// input already starts with `<scheme>://`. Empty input stays empty.
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if has_scheme_prefix(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Returns true iff `url` parses as an absolute `http` or `https` URL.
pub fn is_valid(url: &str) -> bool {
    match url::Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn has_scheme_prefix(s: &str) -> bool {
    let Some((scheme, _)) = s.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// A target URL that has been normalized and accepted for analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl(String);

impl TargetUrl {
    /// Normalizes `raw` and keeps it only if the result is a valid http(s) URL.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        is_valid(&normalized).then_some(TargetUrl(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
