// Error type for fallible core operations.

/// Errors produced by the fallible seams of the core vocabulary.
///
/// These never escape to a calculator user: the engine converts them
/// into diagnostics at the point of use and leaves its state unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// A display string did not parse as a finite number.
    #[error("not a finite number: {0:?}")]
    InvalidOperand(String),

    /// A character is not one of the four operator symbols.
    #[error("unknown operator symbol: {0:?}")]
    UnknownOperator(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_operand_message() {
        let err = CalcError::InvalidOperand("Error".to_string());
        assert_eq!(err.to_string(), "not a finite number: \"Error\"");
    }

    #[test]
    fn unknown_operator_message() {
        let err = CalcError::UnknownOperator('%');
        assert_eq!(err.to_string(), "unknown operator symbol: '%'");
    }
}
