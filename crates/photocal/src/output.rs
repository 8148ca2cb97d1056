//! Colored terminal output for the startup banner and errors.

use std::path::Path;

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

/// What the banner reports about a freshly bound server.
pub(crate) struct Banner<'a> {
    pub(crate) url: &'a str,
    pub(crate) static_root: &'a Path,
    pub(crate) open_browser: bool,
    pub(crate) missing_assets: &'a [&'a str],
}

impl Output {
    /// Create a new output formatter writing to stderr.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print the startup banner.
    pub(crate) fn banner(&self, banner: &Banner<'_>) {
        self.rule();
        self.styled(&self.cyan_bold, "Calendar Photo Converter - development server");
        self.rule();
        self.styled(&self.green, &format!("Server running at: {}", banner.url));
        self.line(&format!(
            "Serving files from: {}",
            banner.static_root.display()
        ));
        if banner.open_browser {
            self.line("Opening the default browser...");
        } else {
            self.line(&format!("Open in browser: {}", banner.url));
        }
        if !banner.missing_assets.is_empty() {
            self.styled(
                &self.yellow,
                &format!(
                    "Warning: missing frontend files: {}",
                    banner.missing_assets.join(", ")
                ),
            );
        }
        self.line("Press Ctrl+C to stop the server");
        self.rule();
    }

    /// Print the shutdown notice.
    pub(crate) fn stopped(&self) {
        self.line("Server stopped");
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.red, msg);
    }

    fn line(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    fn styled(&self, style: &Style, msg: &str) {
        self.line(&style.apply_to(msg).to_string());
    }

    fn rule(&self) {
        self.line(&"=".repeat(60));
    }
}
