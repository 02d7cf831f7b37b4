//! Colored terminal output for CLI status messages.

use console::{Style, Term};

/// Width of the right-aligned label column in [`Output::field`].
const LABEL_WIDTH: usize = 10;

/// Terminal output formatter.
///
/// Writes to stderr so rendered HTML on stdout stays clean.
pub(crate) struct Output {
    term: Term,
    label: Style,
    heading: Style,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            label: Style::new().for_stderr().dim(),
            heading: Style::new().for_stderr().cyan().bold(),
            green: Style::new().for_stderr().green(),
            yellow: Style::new().for_stderr().yellow(),
            red: Style::new().for_stderr().red(),
        }
    }

    /// Print a section heading (cyan bold).
    pub(crate) fn heading(&self, msg: &str) {
        self.line(&self.heading.apply_to(msg).to_string());
    }

    /// Print a `label: value` line with labels aligned in one column.
    pub(crate) fn field(&self, label: &str, value: &str) {
        let label = label_column(label);
        self.line(&format!("{} {value}", self.label.apply_to(label)));
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.red.apply_to(msg).to_string());
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}

/// Right-align `label` to [`LABEL_WIDTH`] and append a colon.
fn label_column(label: &str) -> String {
    format!("{label:>LABEL_WIDTH$}:")
}
