// Calculator state machine.
//
// Owns three observable fields and applies one input token at a time:
//
//   display   - the number being typed or the last committed result
//   pending   - the left operand captured when an operator was pressed
//   operator  - the operator applied at the next equals press
//
// Every transition completes within `press`; nothing here ever panics
// or returns an error. Input that cannot be applied (unknown tokens,
// digits past the length cap, arithmetic on the error sentinel) is
// recorded in the diagnostic log and the state stays unchanged.

use laskin_core::diagnostic::Diagnostic;
use laskin_core::display::{
    self, ERROR_DISPLAY, MAX_DISPLAY_CHARS, format_value, parse_operand,
};
use laskin_core::operator::Operator;
use laskin_core::token::{TokenKind, classify};

use crate::diagnostics::DiagnosticLog;
use crate::observe::Observed;

/// The calculator service: three observable fields plus the diagnostic
/// log, mutated only through `press`.
#[derive(Debug)]
pub struct Calculator {
    display: Observed<String>,
    pending: Observed<String>,
    operator: Observed<Operator>,
    diagnostics: DiagnosticLog,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// A cleared calculator: display "0", pending operand "0",
    /// operator `+`.
    pub fn new() -> Self {
        Self {
            display: Observed::new("0".to_string()),
            pending: Observed::new("0".to_string()),
            operator: Observed::new(Operator::default()),
            diagnostics: DiagnosticLog::new(),
        }
    }

    // -- Observable fields ---------------------------------------------

    /// The text currently shown on the display.
    pub fn display_text(&self) -> &str {
        self.display.get()
    }

    /// The captured left operand of the pending operation.
    pub fn pending_operand(&self) -> &str {
        self.pending.get()
    }

    /// The operator applied at the next equals press.
    pub fn last_operator(&self) -> Operator {
        *self.operator.get()
    }

    /// The diagnostic log of rejected input.
    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// Mutable log access, for front ends that drain diagnostics.
    pub fn diagnostics_mut(&mut self) -> &mut DiagnosticLog {
        &mut self.diagnostics
    }

    /// Subscribe to display changes.
    pub fn observe_display(&mut self, subscriber: impl FnMut(&String) + 'static) {
        self.display.subscribe(subscriber);
    }

    /// Subscribe to pending-operand changes.
    pub fn observe_pending(&mut self, subscriber: impl FnMut(&String) + 'static) {
        self.pending.subscribe(subscriber);
    }

    /// Subscribe to operator changes.
    pub fn observe_operator(&mut self, subscriber: impl FnMut(&Operator) + 'static) {
        self.operator.subscribe(subscriber);
    }

    // -- Token application ---------------------------------------------

    /// Apply one input token.
    pub fn press(&mut self, token: &str) {
        match classify(token) {
            TokenKind::Invalid => {
                self.diagnostics
                    .record(Diagnostic::InvalidToken(token.to_string()));
            }
            TokenKind::Clear => self.reset(),
            TokenKind::Digit(digit) => self.enter_digit(digit),
            TokenKind::DecimalPoint => self.enter_decimal_point(),
            TokenKind::Operator(op) => self.select_operator(op),
            TokenKind::SignFlip => self.flip_sign(),
            TokenKind::Backspace => self.erase_last(),
            TokenKind::Equals => self.commit(),
        }
    }

    /// Reset all fields to their construction defaults.
    fn reset(&mut self) {
        self.display.set_if_changed("0".to_string());
        self.pending.set_if_changed("0".to_string());
        self.operator.set_if_changed(Operator::default());
    }

    /// Append a digit, collapsing a bare (possibly signed) zero and
    /// rejecting digits past the length cap. A digit typed over the
    /// error sentinel starts a fresh entry.
    fn enter_digit(&mut self, digit: char) {
        let text = self.display.get();

        if display::is_error(text) {
            self.display.set(digit.to_string());
            return;
        }
        if display::is_zero_entry(text) {
            let signed = text.starts_with('-');
            let mut entry = String::with_capacity(2);
            if signed {
                entry.push('-');
            }
            entry.push(digit);
            self.display.set(entry);
            return;
        }
        if text.chars().count() >= MAX_DISPLAY_CHARS {
            self.diagnostics.record(Diagnostic::DisplayFull(digit));
            return;
        }

        let mut extended = text.clone();
        extended.push(digit);
        self.display.set(extended);
    }

    /// Append the decimal point, once. A repeat press is a silent no-op.
    fn enter_decimal_point(&mut self) {
        let text = self.display.get();

        if display::is_error(text) {
            self.display.set("0.".to_string());
            return;
        }
        if text.contains('.') {
            return;
        }

        let mut extended = text.clone();
        extended.push('.');
        self.display.set(extended);
    }

    /// Capture the display as the left operand, record the operator,
    /// and reset the display for entry of the right operand.
    fn select_operator(&mut self, op: Operator) {
        let text = self.display.get().clone();

        if display::is_error(&text) {
            self.diagnostics.record(Diagnostic::UnusableOperand(text));
            return;
        }

        self.pending.set(text);
        self.display.set("0".to_string());
        self.operator.set_if_changed(op);
    }

    /// Toggle a leading `-` on the display.
    fn flip_sign(&mut self) {
        let text = self.display.get();

        if display::is_error(text) {
            return;
        }

        let flipped = match text.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{text}"),
        };
        self.display.set(flipped);
    }

    /// Remove the last character of the display, normalizing an empty
    /// or sign-only remainder to "0".
    fn erase_last(&mut self) {
        let text = self.display.get();

        if display::is_error(text) {
            self.display.set("0".to_string());
            return;
        }

        let mut shortened = text.clone();
        shortened.pop();
        if shortened.is_empty() || shortened == "-" {
            shortened = "0".to_string();
        }
        self.display.set(shortened);
    }

    /// Apply the recorded operator to the pending operand and the
    /// display. The pending operand and operator keep their values, so
    /// a repeated equals re-applies them to the new display.
    fn commit(&mut self) {
        let left = match parse_operand(self.pending.get()) {
            Ok(value) => value,
            Err(_) => {
                self.diagnostics
                    .record(Diagnostic::UnusableOperand(self.pending.get().clone()));
                return;
            }
        };
        let right = match parse_operand(self.display.get()) {
            Ok(value) => value,
            Err(_) => {
                self.diagnostics
                    .record(Diagnostic::UnusableOperand(self.display.get().clone()));
                return;
            }
        };

        let op = *self.operator.get();
        let result = op.apply(left, right);

        if result.is_finite() {
            self.display.set(format_value(result));
        } else {
            self.diagnostics.record(Diagnostic::NonFiniteResult {
                operator: op,
                left,
                right,
            });
            self.display.set(ERROR_DISPLAY.to_string());
            self.pending.set("0".to_string());
            self.operator.set_if_changed(Operator::default());
        }
    }
}
