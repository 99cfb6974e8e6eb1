use super::{Formatter, truncate};
use crate::domain::entities::{AnalysisResult, CategoryKey, CategoryStatus, Grade};
use colored::{ColoredString, Colorize};

const LABEL_WIDTH: usize = 14;
const MESSAGE_WIDTH: usize = 50;

/// Human-readable report for an interactive terminal
pub struct TerminalFormatter {
    color: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: ColoredString) -> String {
        if self.color {
            text.to_string()
        } else {
            text.clear().to_string()
        }
    }

    fn grade(&self, grade: &Grade) -> String {
        let text = grade.to_string();
        self.paint(match grade {
            Grade::A | Grade::B => text.green(),
            Grade::C => text.yellow(),
            _ => text.red(),
        })
    }

    fn score(&self, score: u32) -> String {
        let text = score.to_string();
        self.paint(match score {
            100 => text.green(),
            60.. => text.yellow(),
            _ => text.red(),
        })
    }

    fn status_icon(&self, status: &CategoryStatus) -> String {
        self.paint(match status {
            CategoryStatus::Pass => "\u{2713}".green(),
            CategoryStatus::Warning => "\u{26A0}".yellow(),
            _ => "\u{2717}".red(),
        })
    }

    fn issues(&self, count: u32) -> String {
        let text = format!("{} issue{} found", count, if count == 1 { "" } else { "s" });
        self.paint(if count == 0 { text.green() } else { text.yellow() })
    }
}

impl Formatter for TerminalFormatter {
    fn format(&self, result: &AnalysisResult) -> String {
        let score = &result.score;

        let header = [
            format!("{} \u{2014} {}", self.paint("MetaPeek".bold()), self.paint(result.url.cyan())),
            String::new(),
            format!(
                "  Score: {}/100 ({})",
                self.paint(score.overall.to_string().bold()),
                self.grade(&score.grade)
            ),
            String::new(),
        ];

        let rows = CategoryKey::ORDER.iter().map(|&key| {
            let category = score.categories.get(key);
            let message = truncate(&result.diagnostics.for_category(key).message, MESSAGE_WIDTH);
            format!(
                "  {} {:<width$} {}  {}",
                self.status_icon(&category.status),
                key.label(),
                self.score(category.score),
                self.paint(message.dimmed()),
                width = LABEL_WIDTH
            )
        });

        let footer = [
            String::new(),
            format!("  {}", self.issues(score.total_issues)),
            String::new(),
            format!("  {}", self.paint(format!("Analyzed in {}ms", result.timing).dimmed())),
            String::new(),
        ];

        header
            .into_iter()
            .chain(rows)
            .chain(footer)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
