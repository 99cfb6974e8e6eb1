use super::Formatter;
use crate::domain::entities::AnalysisResult;

/// Pretty-printed JSON, two-space indented, every field included
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, result: &AnalysisResult) -> String {
        // Serializing plain data with string keys cannot fail.
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures;
    use serde_json::json;

    #[test]
    fn output_parses_back_to_the_same_result() {
        for original in [fixtures::perfect(), fixtures::failing()] {
            let output = JsonFormatter.format(&original);
            let parsed: AnalysisResult = serde_json::from_str(&output).unwrap();
            assert_eq!(parsed, original);
        }
    }

    #[test]
    fn uses_two_space_indentation() {
        let output = JsonFormatter.format(&fixtures::perfect());
        assert!(output.starts_with("{\n  \"url\": \"https://example.com\""));
        assert!(output.contains("\n    \"overall\": "));
    }

    #[test]
    fn keeps_fields_the_client_does_not_use() {
        let mut result = fixtures::perfect();
        result.extra.insert("ok".to_string(), json!(true));
        result.extra.insert("meta".to_string(), json!({ "og:title": "Example" }));

        let value: serde_json::Value = serde_json::from_str(&JsonFormatter.format(&result)).unwrap();

        assert_eq!(value["ok"], json!(true));
        assert_eq!(value["meta"]["og:title"], json!("Example"));
        assert_eq!(value["score"]["categories"]["openGraph"]["maxScore"], json!(100));
        assert_eq!(value["diagnostics"]["ogTags"]["message"], json!("OG tags present"));
    }

    #[test]
    fn reproduces_the_service_payload_at_every_depth() {
        let mut payload = serde_json::to_value(fixtures::failing()).unwrap();
        payload["ok"] = json!(true);
        payload["diagnostics"]["ogTags"]["suggestion"] = json!("Add og:title and og:description");
        payload["diagnostics"]["canonical"]["suggestion"] = serde_json::Value::Null;
        payload["diagnostics"]["title"]["details"] = json!({ "length": 13, "optimal": [50, 60] });
        payload["diagnostics"]["structuredData"] =
            json!({ "status": "red", "icon": "error", "message": "No JSON-LD" });
        payload["score"]["categories"]["ogImage"]["dimensions"] = json!({ "width": 0, "height": 0 });
        payload["score"]["categories"]["structuredData"] = json!({ "name": "Structured Data", "score": 0 });
        payload["score"]["scoredAt"] = json!("2025-01-01T00:00:00.000Z");

        let result: AnalysisResult = serde_json::from_value(payload.clone()).unwrap();
        let output: serde_json::Value = serde_json::from_str(&JsonFormatter.format(&result)).unwrap();

        assert_eq!(output, payload);
    }
}
