//! Token-script sequence tests: feed whole button-press scripts through
//! a fresh calculator and compare the observable fields against a table.
//!
//! The table is inline JSON: each case lists the tokens to press and the
//! expected display, plus optionally the expected pending operand,
//! operator symbol, and diagnostic count.
//!
//! Run: cargo test -p laskin-engine --test sequences

use laskin_engine::machine::Calculator;
use serde_json::Value;

const SEQUENCES: &str = r#"[
  { "name": "cleared calculator",
    "tokens": [], "display": "0", "pending": "0", "operator": "+" },

  { "name": "digits accumulate",
    "tokens": ["1", "5"], "display": "15" },

  { "name": "leading zero collapses",
    "tokens": ["0", "8"], "display": "8" },

  { "name": "addition",
    "tokens": ["1", "+", "8", "="],
    "display": "9", "pending": "1", "operator": "+" },

  { "name": "subtraction",
    "tokens": ["1", "-", "8", "="], "display": "-7" },

  { "name": "multiplication",
    "tokens": ["4", "*", "5", "="], "display": "20" },

  { "name": "division",
    "tokens": ["9", "÷", "3", "="], "display": "3" },

  { "name": "decimal point is unique",
    "tokens": ["0", ".", "7", "."], "display": "0.7" },

  { "name": "sign flip is involutive",
    "tokens": ["1", "0", "0", "4", "+/-", "+/-"], "display": "1004" },

  { "name": "backspace shortens",
    "tokens": ["2", "0", "2", "6", "Backspace", "Backspace"],
    "display": "20" },

  { "name": "backspace exhausts to zero",
    "tokens": ["5", "Backspace", "Backspace"], "display": "0" },

  { "name": "repeated equals reapplies the pending operation",
    "tokens": ["1", "+", "8", "=", "="], "display": "10" },

  { "name": "result chains into the next operation",
    "tokens": ["4", "*", "5", "=", "+", "1", "="], "display": "21" },

  { "name": "negative operand",
    "tokens": ["9", "+/-", "÷", "3", "="], "display": "-3" },

  { "name": "decimal arithmetic",
    "tokens": ["1", ".", "5", "*", "2", "="], "display": "3" },

  { "name": "invalid token is ignored and logged",
    "tokens": ["9", "0", "&"],
    "display": "90", "diagnostics": 1 },

  { "name": "typed digits cap at ten",
    "tokens": ["9", "9", "9", "9", "9", "9", "9", "9", "9", "9", "9", "9"],
    "display": "9999999999", "diagnostics": 2 },

  { "name": "division by zero shows the sentinel and resets the pending state",
    "tokens": ["9", "÷", "0", "="],
    "display": "Error", "pending": "0", "operator": "+", "diagnostics": 1 },

  { "name": "clear resets everything",
    "tokens": ["1", "+", "2", "C"],
    "display": "0", "pending": "0", "operator": "+", "diagnostics": 0 }
]"#;

fn as_str(case: &Value, field: &str) -> Option<String> {
    case.get(field).map(|v| {
        v.as_str()
            .unwrap_or_else(|| panic!("field {field} is not a string"))
            .to_string()
    })
}

#[test]
fn scripted_sequences() {
    let cases: Vec<Value> =
        serde_json::from_str(SEQUENCES).expect("sequence table is valid JSON");
    assert!(!cases.is_empty());

    for case in &cases {
        let name = as_str(case, "name").expect("case has a name");
        let tokens = case["tokens"].as_array().expect("case has tokens");

        let mut calc = Calculator::new();
        for token in tokens {
            calc.press(token.as_str().expect("token is a string"));
        }

        let display = as_str(case, "display").expect("case has a display");
        assert_eq!(calc.display_text(), display, "display for {name:?}");

        if let Some(pending) = as_str(case, "pending") {
            assert_eq!(calc.pending_operand(), pending, "pending for {name:?}");
        }
        if let Some(operator) = as_str(case, "operator") {
            assert_eq!(
                calc.last_operator().to_string(),
                operator,
                "operator for {name:?}"
            );
        }
        if let Some(diagnostics) = case.get("diagnostics") {
            let expected = diagnostics.as_u64().expect("diagnostics is a count");
            assert_eq!(
                calc.diagnostics().count() as u64,
                expected,
                "diagnostic count for {name:?}"
            );
        }
    }
}
