use crossterm::tty::IsTty;

/// Hosted analysis endpoint used when `--api-url` is not given
pub const DEFAULT_API_URL: &str = "https://metapeek.icjia.app/api/analyze";

/// What the attached terminal supports, detected once and passed down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub interactive: bool,
    pub color_enabled: bool,
}

impl TerminalCapabilities {
    /// Inspects stdout. Color needs an interactive terminal and no `--no-color`.
    pub fn detect(no_color: bool) -> Self {
        Self::new(std::io::stdout().is_tty(), no_color)
    }

    pub fn new(interactive: bool, no_color: bool) -> Self {
        Self {
            interactive,
            color_enabled: interactive && !no_color,
        }
    }

    /// Non-interactive, uncolored output
    pub fn plain() -> Self {
        Self::new(false, true)
    }
}
