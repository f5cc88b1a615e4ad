//! Output rendering helpers
//!
//! Text output uses unicode icons with an ascii fallback when stdout is
//! not a terminal; `--json` mode prints one JSON object per event.

use is_terminal::IsTerminal;

/// Icons for text rendering.
pub struct Icons {
    pub launch: &'static str,
    pub arrow: &'static str,
    pub clock: &'static str,
    pub link: &'static str,
}

impl Icons {
    pub fn unicode() -> Self {
        Self {
            launch: "🚀",
            arrow: "→",
            clock: "⏱",
            link: "🔗",
        }
    }

    pub fn ascii() -> Self {
        Self {
            launch: ">>",
            arrow: "->",
            clock: "[T]",
            link: "[URI]",
        }
    }

    /// Pick the icon set for the current stdout.
    pub fn for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Print a JSON event object on its own line.
pub fn print_event(event: &serde_json::Value) {
    println!("{event}");
}
