use crate::application::services::{AnalysisOptions, AnalysisService, Cancellation};
use crate::domain::entities::Grade;
use crate::domain::errors::AnalysisError;
use crate::domain::value_objects::TargetUrl;
use crate::infrastructure::config::{DEFAULT_API_URL, TerminalCapabilities};
use crate::infrastructure::output;
use crate::presentation::formatters::{Formatter, JsonFormatter, MarkdownFormatter, TerminalFormatter};
use crate::presentation::progress::{self, Spinner};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// CLI configuration for MetaPeek
#[derive(Parser, Debug)]
#[command(name = "metapeek", version)]
#[command(about = "Analyze meta tags and social sharing readiness for any URL", long_about = None)]
pub struct Cli {
    /// URL to analyze
    pub url: String,

    /// Output raw JSON (overrides --format)
    #[arg(long)]
    pub json: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Override API endpoint
    #[arg(long = "api-url", value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// API key for authenticated endpoints
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Disable loading spinner
    #[arg(long = "no-spinner")]
    pub no_spinner: bool,

    /// Give up on the request after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Log request details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Markdown,
}

/// Renderer actually used, after `--json` has been taken into account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Terminal,
    Markdown,
    Json,
}

/// Process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Grade A or B
    Passed = 0,
    /// Grade C, D, F or unknown
    Failed = 1,
    /// Invalid input, network or API error
    Error = 2,
}

impl ExitStatus {
    pub fn from_grade(grade: &Grade) -> Self {
        if grade.is_passing() {
            ExitStatus::Passed
        } else {
            ExitStatus::Failed
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}

/// Failures that end a run with [`ExitStatus::Error`]
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid URL \"{0}\"")]
    InvalidUrl(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl Cli {
    /// Runs one analysis and reports the outcome.
    ///
    /// Either a complete report goes to `stdout`, or a single `Error: ...`
    /// line goes to `stderr` and nothing is written to `stdout`.
    pub async fn run<O: Write, E: Write>(
        &self,
        service: &AnalysisService,
        terminal: TerminalCapabilities,
        stdout: &mut O,
        stderr: &mut E,
    ) -> ExitStatus {
        let status = match self.execute(service, terminal, stdout).await {
            Ok(status) => status,
            Err(err) => {
                let _ = writeln!(stderr, "Error: {}", err);
                ExitStatus::Error
            }
        };
        debug!(code = status.code(), "finished");
        status
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            return OutputMode::Json;
        }
        match self.format {
            OutputFormat::Terminal => OutputMode::Terminal,
            OutputFormat::Markdown => OutputMode::Markdown,
        }
    }

    async fn execute<O: Write>(
        &self,
        service: &AnalysisService,
        terminal: TerminalCapabilities,
        stdout: &mut O,
    ) -> Result<ExitStatus, CliError> {
        let target =
            TargetUrl::parse(&self.url).ok_or_else(|| CliError::InvalidUrl(self.url.clone()))?;
        let mode = self.output_mode();

        let show_spinner =
            progress::should_show(terminal.interactive, !self.no_spinner, mode == OutputMode::Json);
        let mut spinner = Spinner::start(target.as_str(), show_spinner);
        let result = service
            .fetch_analysis(target.as_str(), self.analysis_options())
            .await;
        spinner.stop();
        let result = result?;

        debug!(?mode, grade = %result.score.grade, "rendering report");
        let report = Self::formatter(mode, terminal).format(&result);
        output::emit(stdout, &report)?;

        Ok(ExitStatus::from_grade(&result.score.grade))
    }

    fn analysis_options(&self) -> AnalysisOptions {
        let cancellation = self.timeout.map(|secs| -> Cancellation {
            Box::pin(tokio::time::sleep(Duration::from_secs(secs)))
        });

        AnalysisOptions::new(&self.api_url)
            .api_key(self.api_key.clone())
            .cancellation(cancellation)
    }

    fn formatter(mode: OutputMode, terminal: TerminalCapabilities) -> Box<dyn Formatter> {
        match mode {
            OutputMode::Json => Box::new(JsonFormatter),
            OutputMode::Markdown => Box::new(MarkdownFormatter),
            OutputMode::Terminal => Box::new(TerminalFormatter::new(terminal.color_enabled)),
        }
    }
}
