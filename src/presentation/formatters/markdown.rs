//! Markdown report, suitable for pasting into issues and pull requests.

use super::Formatter;
use crate::domain::entities::{AnalysisResult, CategoryKey, CategoryStatus};

const PASS_EMOJI: &str = "\u{2705}";
const FAIL_EMOJI: &str = "\u{274C}";
const WARNING_EMOJI: &str = "\u{26A0}\u{FE0F}";

pub struct MarkdownFormatter;

impl MarkdownFormatter {
    fn status_emoji(status: &CategoryStatus) -> &'static str {
        match status {
            CategoryStatus::Pass => PASS_EMOJI,
            CategoryStatus::Fail => FAIL_EMOJI,
            _ => WARNING_EMOJI,
        }
    }

    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|")
    }
}

impl Formatter for MarkdownFormatter {
    fn format(&self, result: &AnalysisResult) -> String {
        let score = &result.score;

        let mut lines = vec![
            format!("# MetaPeek \u{2014} {}", result.url),
            String::new(),
            format!("**Score:** {}/100 (**{}**)", score.overall, score.grade),
            String::new(),
            "| Status | Category | Score | Details |".to_string(),
            "|--------|----------|------:|---------|".to_string(),
        ];

        lines.extend(CategoryKey::ORDER.iter().map(|&key| {
            let category = score.categories.get(key);
            format!(
                "| {} | {} | {} | {} |",
                Self::status_emoji(&category.status),
                key.label(),
                category.score,
                Self::escape_cell(&result.diagnostics.for_category(key).message)
            )
        }));

        lines.extend([
            String::new(),
            format!("**Issues:** {}", score.total_issues),
            String::new(),
            format!("*Analyzed in {}ms*", result.timing),
            String::new(),
        ]);

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures;

    #[test]
    fn heading_and_score_line() {
        let output = MarkdownFormatter.format(&fixtures::failing());
        assert!(output.starts_with("# MetaPeek \u{2014} https://example.com\n\n"));
        assert!(output.contains("**Score:** 20/100 (**F**)"));
    }

    #[test]
    fn table_has_header_and_all_categories() {
        let output = MarkdownFormatter.format(&fixtures::failing());
        assert!(output.contains("\n| Status | Category | Score | Details |\n"));
        for key in CategoryKey::ORDER {
            assert!(output.contains(&format!("| {} |", key.label())), "missing {}", key.label());
        }
    }

    #[test]
    fn rows_use_status_emojis() {
        let output = MarkdownFormatter.format(&fixtures::failing());
        assert!(output.contains("| \u{2705} | Title | 100 | Title present |"));
        assert!(output.contains("| \u{274C} | Open Graph | 0 | Missing OG |"));
        assert!(output.contains("| \u{26A0}\u{FE0F} | Canonical | 60 | Partial |"));
    }

    #[test]
    fn emoji_per_category_status() {
        assert_eq!(MarkdownFormatter::status_emoji(&CategoryStatus::Pass), "\u{2705}");
        assert_eq!(MarkdownFormatter::status_emoji(&CategoryStatus::Fail), "\u{274C}");
        assert_eq!(MarkdownFormatter::status_emoji(&CategoryStatus::Warning), "\u{26A0}\u{FE0F}");
    }

    #[test]
    fn unknown_status_renders_as_warning() {
        let mut result = fixtures::perfect();
        result.score.categories.robots.status = CategoryStatus::Other("skipped".to_string());
        let output = MarkdownFormatter.format(&result);
        assert!(output.contains("| \u{26A0}\u{FE0F} | Robots | 100 | No restrictions |"));
    }

    #[test]
    fn pipes_in_messages_are_escaped() {
        let mut result = fixtures::perfect();
        result.diagnostics.title.message = "Home | Example".to_string();
        let output = MarkdownFormatter.format(&result);
        assert!(output.contains("| Title | 100 | Home \\| Example |"));
    }

    #[test]
    fn issues_and_timing_footer() {
        let output = MarkdownFormatter.format(&fixtures::failing());
        assert!(output.contains("\n**Issues:** 4\n"));
        assert!(output.ends_with("*Analyzed in 500ms*\n"));
    }
}
