// Diagnostic log: the observable side channel for rejected input.
//
// Every rejected token, dropped digit, and non-finite result is recorded
// in order and mirrored as a tracing event. Tests assert on counts and
// entries; host applications drain the log or just read the tracing
// output.

use laskin_core::diagnostic::Diagnostic;

/// Ordered recorder of diagnostics with count-assertable access.
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one diagnostic and emit the matching tracing event.
    ///
    /// Rejected user input is logged at `warn`; arithmetic anomalies at
    /// `debug`, since the display already surfaces those to the user.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::InvalidToken(token) => {
                tracing::warn!(token = %token, "Invalid input");
            }
            Diagnostic::DisplayFull(digit) => {
                tracing::warn!(digit = %digit, "display full, digit dropped");
            }
            Diagnostic::NonFiniteResult {
                operator,
                left,
                right,
            } => {
                tracing::debug!(%operator, left = *left, right = *right, "non-finite result");
            }
            Diagnostic::UnusableOperand(text) => {
                tracing::debug!(operand = %text, "operand is not a number");
            }
        }
        self.entries.push(diagnostic);
    }

    /// Number of diagnostics recorded since construction or the last
    /// `take`.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded diagnostics, oldest first.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Drain the log, returning the recorded diagnostics.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let log = DiagnosticLog::new();
        assert!(log.is_empty());
        assert_eq!(log.count(), 0);
    }

    #[test]
    fn records_in_order() {
        let mut log = DiagnosticLog::new();
        log.record(Diagnostic::InvalidToken("&".to_string()));
        log.record(Diagnostic::DisplayFull('8'));

        assert_eq!(log.count(), 2);
        assert_eq!(
            log.entries(),
            &[
                Diagnostic::InvalidToken("&".to_string()),
                Diagnostic::DisplayFull('8'),
            ]
        );
    }

    #[test]
    fn take_drains_the_log() {
        let mut log = DiagnosticLog::new();
        log.record(Diagnostic::InvalidToken("Enter".to_string()));

        let drained = log.take();
        assert_eq!(drained.len(), 1);
        assert!(log.is_empty());
    }
}
