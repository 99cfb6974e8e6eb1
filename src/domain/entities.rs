use crate::domain::value_objects::Url;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Represents an outbound HTTP GET request
#[derive(Debug, Clone)]
pub struct Request {
    pub url: Url,
    pub headers: Vec<(String, String)>, // Key-value pairs for headers
}

/// Represents an HTTP response
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub body: String,
}

/// Payload of the analysis endpoint.
///
/// Every record keeps the fields the client does not interpret (`ok`,
/// `meta`, `suggestion`, and anything the service adds later) in its
/// `extra` map, so the payload round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    pub final_url: String,
    pub analyzed_at: String,
    pub timing: u64,
    pub diagnostics: Diagnostics,
    pub score: Score,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub overall: DiagnosticResult,
    pub title: DiagnosticResult,
    pub description: DiagnosticResult,
    pub og_tags: DiagnosticResult,
    pub og_image: DiagnosticResult,
    pub twitter_card: DiagnosticResult,
    pub canonical: DiagnosticResult,
    pub robots: DiagnosticResult,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Diagnostics {
    /// Diagnostic paired with a score category. Open Graph reads `ogTags`.
    pub fn for_category(&self, key: CategoryKey) -> &DiagnosticResult {
        match key {
            CategoryKey::Title => &self.title,
            CategoryKey::Description => &self.description,
            CategoryKey::OpenGraph => &self.og_tags,
            CategoryKey::OgImage => &self.og_image,
            CategoryKey::TwitterCard => &self.twitter_card,
            CategoryKey::Canonical => &self.canonical,
            CategoryKey::Robots => &self.robots,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    pub status: DiagnosticStatus,
    pub icon: DiagnosticIcon,
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DiagnosticResult {
    pub fn suggestion(&self) -> Option<&str> {
        self.extra.get("suggestion").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticStatus {
    Green,
    Yellow,
    Red,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticIcon {
    Check,
    Warning,
    Error,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub overall: u32,
    pub grade: Grade,
    pub total_issues: u32,
    pub categories: ScoreCategories,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCategories {
    pub title: ScoreCategory,
    pub description: ScoreCategory,
    pub open_graph: ScoreCategory,
    pub og_image: ScoreCategory,
    pub twitter_card: ScoreCategory,
    pub canonical: ScoreCategory,
    pub robots: ScoreCategory,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScoreCategories {
    pub fn get(&self, key: CategoryKey) -> &ScoreCategory {
        match key {
            CategoryKey::Title => &self.title,
            CategoryKey::Description => &self.description,
            CategoryKey::OpenGraph => &self.open_graph,
            CategoryKey::OgImage => &self.og_image,
            CategoryKey::TwitterCard => &self.twitter_card,
            CategoryKey::Canonical => &self.canonical,
            CategoryKey::Robots => &self.robots,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCategory {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub status: CategoryStatus,
    pub weight: u32,
    pub issues: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    Pass,
    Warning,
    Fail,
    #[serde(untagged)]
    Other(String),
}

/// Letter grade assigned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
    #[serde(untagged)]
    Other(String),
}

impl Grade {
    /// A and B are passing grades; everything else fails the run.
    pub fn is_passing(&self) -> bool {
        matches!(self, Grade::A | Grade::B)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::A => f.write_str("A"),
            Grade::B => f.write_str("B"),
            Grade::C => f.write_str("C"),
            Grade::D => f.write_str("D"),
            Grade::F => f.write_str("F"),
            Grade::Other(other) => f.write_str(other),
        }
    }
}

/// The seven scored aspects, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKey {
    Title,
    Description,
    OpenGraph,
    OgImage,
    TwitterCard,
    Canonical,
    Robots,
}

impl CategoryKey {
    pub const ORDER: [CategoryKey; 7] = [
        CategoryKey::Title,
        CategoryKey::Description,
        CategoryKey::OpenGraph,
        CategoryKey::OgImage,
        CategoryKey::TwitterCard,
        CategoryKey::Canonical,
        CategoryKey::Robots,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryKey::Title => "Title",
            CategoryKey::Description => "Description",
            CategoryKey::OpenGraph => "Open Graph",
            CategoryKey::OgImage => "OG Image",
            CategoryKey::TwitterCard => "Twitter Card",
            CategoryKey::Canonical => "Canonical",
            CategoryKey::Robots => "Robots",
        }
    }
}
