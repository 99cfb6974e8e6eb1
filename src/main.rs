use clap::Parser;
use metapeek::application::services::AnalysisService;
use metapeek::infrastructure::config::TerminalCapabilities;
use metapeek::infrastructure::http_client::HyperHttpClient;
use metapeek::infrastructure::logging;
use metapeek::presentation::cli::{Cli, ExitStatus};
use std::process::ExitCode;

/// MetaPeek: meta tags and social sharing readiness for any URL
///
/// Fetches the analysis from the MetaPeek service and prints it as a
/// colored terminal report, a Markdown table, or raw JSON. The exit code
/// reflects the grade so the command can gate CI pipelines.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Any panic still ends the run with the error status.
    std::panic::set_hook(Box::new(|info| {
        eprintln!("Error: An unexpected error occurred: {}", info);
        std::process::exit(ExitStatus::Error.code().into());
    }));

    let http_client = match HyperHttpClient::new() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitStatus::Error.into();
        }
    };
    let service = AnalysisService::new(Box::new(http_client));
    let terminal = TerminalCapabilities::detect(cli.no_color);

    cli.run(&service, terminal, &mut std::io::stdout(), &mut std::io::stderr())
        .await
        .into()
}
