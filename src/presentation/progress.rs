//! Indeterminate spinner shown while waiting for the analysis service.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Spinner drawn on stderr; inert when not shown.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    /// Starts a spinner for `url` if `show` is set.
    pub fn start(url: &str, show: bool) -> Self {
        let bar = show.then(|| create_spinner(url));
        Self { bar }
    }

    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Stop and clear the spinner line.
    pub fn stop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spinner only on an interactive terminal, when enabled, and never in JSON mode.
pub fn should_show(interactive: bool, enabled: bool, json: bool) -> bool {
    interactive && enabled && !json
}

fn create_spinner(url: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    bar.set_style(style);
    bar.set_message(format!("Analyzing {}...", url));
    bar.enable_steady_tick(TICK_INTERVAL);
    bar
}
