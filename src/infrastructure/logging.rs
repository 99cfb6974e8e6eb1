use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for the given verbosity.
pub fn directive(verbose: bool) -> &'static str {
    if verbose { "metapeek=debug" } else { "metapeek=error" }
}

/// Initialize tracing on stderr; stdout is reserved for the report.
///
/// The filter comes from the `--verbose` flag only, never from the environment.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(directive(verbose)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_level() {
        assert_eq!(directive(false), "metapeek=error");
        assert_eq!(directive(true), "metapeek=debug");
    }
}
