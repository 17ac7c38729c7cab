// Display-text helpers shared by the engine and its front ends.
//
// The display is always a plain decimal string: digits, an optional
// leading `-`, an optional single `.`. The one exception is the error
// sentinel shown after a non-finite result.

use crate::error::CalcError;

/// Maximum number of characters a user can type into the display.
///
/// The cap binds digit entry only: computed results and the error
/// sentinel may be longer.
pub const MAX_DISPLAY_CHARS: usize = 10;

/// Sentinel shown when a computation produced a non-finite result.
pub const ERROR_DISPLAY: &str = "Error";

/// Whether the display currently shows the error sentinel.
pub fn is_error(text: &str) -> bool {
    text == ERROR_DISPLAY
}

/// Whether the display holds a bare zero entry that the next digit
/// should replace rather than extend. Covers the sign-flipped zero so
/// `-0` followed by `5` becomes `-5`, not `-05`.
pub fn is_zero_entry(text: &str) -> bool {
    text == "0" || text == "-0"
}

/// Format a computed value for the display.
///
/// Integral values render without a trailing `.0` (`9.0` → `"9"`),
/// everything else uses the shortest round-trip decimal form. Non-finite
/// values render as the error sentinel.
pub fn format_value(value: f64) -> String {
    if value.is_finite() {
        format!("{value}")
    } else {
        ERROR_DISPLAY.to_string()
    }
}

/// Parse a display string back into a finite number.
///
/// The error sentinel, and any text that does not parse to a finite
/// value, is rejected.
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidOperand(text.to_string())),
    }
}
