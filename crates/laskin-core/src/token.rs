// Input token classification.
//
// A token is one discrete button press or forwarded key: a digit, the
// decimal point, an operator, or a named command. Classification is a
// pure function, total over all strings; anything outside the accepted
// vocabulary classifies as `Invalid` and is for the caller to reject.

use crate::operator::Operator;

/// Token for toggling the sign of the current entry.
pub const TOKEN_SIGN_FLIP: &str = "+/-";

/// Token for deleting the last entered character.
pub const TOKEN_BACKSPACE: &str = "Backspace";

/// Token for resetting the calculator.
pub const TOKEN_CLEAR: &str = "C";

/// Token for committing the pending operation.
pub const TOKEN_EQUALS: &str = "=";

/// The category a raw input token belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A digit `0`-`9`, carrying the digit character.
    Digit(char),
    /// The decimal point `.`.
    DecimalPoint,
    /// One of the four binary operators `+ - * ÷`.
    Operator(Operator),
    /// The sign toggle `+/-`.
    SignFlip,
    /// The clear command `C`.
    Clear,
    /// The backspace command.
    Backspace,
    /// The equals command `=`.
    Equals,
    /// Anything outside the accepted vocabulary.
    Invalid,
}

/// Classify a raw token string.
///
/// Accepted vocabulary: `"0"`-`"9"`, `"."`, `"+"`, `"-"`, `"*"`, `"÷"`,
/// `"+/-"`, `"Backspace"`, `"C"`, `"="`. Every other string, including
/// the empty string and multi-digit runs, classifies as `Invalid`.
pub fn classify(token: &str) -> TokenKind {
    match token {
        TOKEN_SIGN_FLIP => return TokenKind::SignFlip,
        TOKEN_BACKSPACE => return TokenKind::Backspace,
        TOKEN_CLEAR => return TokenKind::Clear,
        TOKEN_EQUALS => return TokenKind::Equals,
        _ => {}
    }

    let mut chars = token.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return TokenKind::Invalid;
    };

    if c.is_ascii_digit() {
        return TokenKind::Digit(c);
    }
    if c == '.' {
        return TokenKind::DecimalPoint;
    }
    match Operator::try_from(c) {
        Ok(op) => TokenKind::Operator(op),
        Err(_) => TokenKind::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_classify_with_value() {
        for d in '0'..='9' {
            assert_eq!(classify(&d.to_string()), TokenKind::Digit(d));
        }
    }

    #[test]
    fn decimal_point() {
        assert_eq!(classify("."), TokenKind::DecimalPoint);
    }

    #[test]
    fn operators_classify() {
        assert_eq!(classify("+"), TokenKind::Operator(Operator::Add));
        assert_eq!(classify("-"), TokenKind::Operator(Operator::Subtract));
        assert_eq!(classify("*"), TokenKind::Operator(Operator::Multiply));
        assert_eq!(classify("÷"), TokenKind::Operator(Operator::Divide));
    }

    #[test]
    fn named_commands_classify() {
        assert_eq!(classify("+/-"), TokenKind::SignFlip);
        assert_eq!(classify("Backspace"), TokenKind::Backspace);
        assert_eq!(classify("C"), TokenKind::Clear);
        assert_eq!(classify("="), TokenKind::Equals);
    }

    #[test]
    fn minus_is_the_operator_not_sign_flip() {
        assert_eq!(classify("-"), TokenKind::Operator(Operator::Subtract));
    }

    #[test]
    fn unrecognized_strings_are_invalid() {
        assert_eq!(classify("&"), TokenKind::Invalid);
        assert_eq!(classify(""), TokenKind::Invalid);
        assert_eq!(classify("12"), TokenKind::Invalid);
        assert_eq!(classify("/"), TokenKind::Invalid);
        assert_eq!(classify("c"), TokenKind::Invalid);
        assert_eq!(classify("Enter"), TokenKind::Invalid);
    }

    #[test]
    fn total_over_arbitrary_unicode() {
        assert_eq!(classify("π"), TokenKind::Invalid);
        assert_eq!(classify("٣"), TokenKind::Invalid); // non-ASCII digit
    }
}
