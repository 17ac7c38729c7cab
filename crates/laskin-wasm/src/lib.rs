// WASM bindings for the laskin calculator.
//
// Provides a `WasmCalculator` class exported via wasm-bindgen that wraps
// the engine's `Calculator`. The button grid calls `press` with the
// button token; keyboard listeners translate `KeyboardEvent.key` values
// through `mapKey` first. The state snapshot is serialized to a
// JavaScript object with serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const calc = new WasmCalculator();
//   calc.press("1"); calc.press("+"); calc.press("8"); calc.press("=");
//   calc.displayText;              // => "9"
//   calc.state();                  // => { displayText: "9", ... }
//   calc.diagnostics();            // => ["Invalid input &", ...]
//
//   // 100 ms pressed-style feedback for a key:
//   const gen = calc.flashPress();
//   setTimeout(() => { calc.flashExpire(gen); render(); },
//              WasmCalculator.flashDurationMs());

use serde::Serialize;
use wasm_bindgen::prelude::*;

use laskin_core::token::{TokenKind, classify};
use laskin_engine::flash::{FLASH_DURATION_MS, FlashToken, KeypressFlash};
use laskin_engine::machine::Calculator;

// ============================================================================
// Serde-serializable DTO for JS interop
// ============================================================================

/// Serializable snapshot of the observable calculator state.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCalculatorState {
    display_text: String,
    pending_operand: String,
    last_operator: String,
    diagnostic_count: usize,
}

// ============================================================================
// WasmCalculator
// ============================================================================

/// Arithmetic calculator for WebAssembly.
///
/// Wraps the engine state machine together with the keypress-flash model
/// used for keyboard feedback styling.
#[wasm_bindgen]
pub struct WasmCalculator {
    calc: Calculator,
    flash: KeypressFlash,
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmCalculator {
    /// Create a cleared calculator.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCalculator {
        WasmCalculator {
            calc: Calculator::new(),
            flash: KeypressFlash::new(),
        }
    }

    /// Apply one button token. Unknown tokens are logged and ignored;
    /// this never throws.
    pub fn press(&mut self, token: &str) {
        self.calc.press(token);
    }

    /// The text currently shown on the display.
    #[wasm_bindgen(getter, js_name = "displayText")]
    pub fn display_text(&self) -> String {
        self.calc.display_text().to_string()
    }

    /// The captured left operand of the pending operation.
    #[wasm_bindgen(getter, js_name = "pendingOperand")]
    pub fn pending_operand(&self) -> String {
        self.calc.pending_operand().to_string()
    }

    /// The symbol of the operator applied at the next equals press.
    #[wasm_bindgen(getter, js_name = "lastOperator")]
    pub fn last_operator(&self) -> String {
        self.calc.last_operator().to_string()
    }

    /// Snapshot of the observable state as a JavaScript object:
    /// `{ displayText, pendingOperand, lastOperator, diagnosticCount }`.
    pub fn state(&self) -> Result<JsValue, JsError> {
        let snapshot = JsCalculatorState {
            display_text: self.calc.display_text().to_string(),
            pending_operand: self.calc.pending_operand().to_string(),
            last_operator: self.calc.last_operator().to_string(),
            diagnostic_count: self.calc.diagnostics().count(),
        };
        serde_wasm_bindgen::to_value(&snapshot).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Drain the diagnostic log into an array of formatted strings.
    pub fn diagnostics(&mut self) -> js_sys::Array {
        let arr = js_sys::Array::new();
        for diagnostic in self.calc.diagnostics_mut().take() {
            arr.push(&JsValue::from_str(&diagnostic.to_string()));
        }
        arr
    }

    /// Translate a `KeyboardEvent.key` value to a button token, or
    /// `undefined` for keys the calculator does not handle.
    ///
    /// Keyboard-only names are aliased first (`Enter` → `=`, `Escape`
    /// and `Delete` → `C`, `/` → `÷`, lowercase `c` → `C`); whatever
    /// survives the alias step must classify as a real token.
    #[wasm_bindgen(js_name = "mapKey")]
    pub fn map_key(key: &str) -> Option<String> {
        let aliased = match key {
            "Enter" => "=",
            "Escape" | "Delete" | "c" => "C",
            "/" => "÷",
            other => other,
        };
        match classify(aliased) {
            TokenKind::Invalid => None,
            _ => Some(aliased.to_string()),
        }
    }

    // -- Keypress flash ------------------------------------------------

    /// Activate the pressed style and return the generation to pass to
    /// `flashExpire` after `flashDurationMs` milliseconds.
    #[wasm_bindgen(js_name = "flashPress")]
    pub fn flash_press(&mut self) -> u64 {
        self.flash.press().generation()
    }

    /// Clear the pressed style if `generation` is still the latest
    /// press. Returns whether the style was cleared.
    #[wasm_bindgen(js_name = "flashExpire")]
    pub fn flash_expire(&mut self, generation: u64) -> bool {
        self.flash.expire(FlashToken::from_generation(generation))
    }

    /// Whether the pressed style should currently be shown.
    #[wasm_bindgen(getter, js_name = "flashActive")]
    pub fn flash_active(&self) -> bool {
        self.flash.is_active()
    }

    /// Recommended delay before expiring a flash, in milliseconds.
    #[wasm_bindgen(js_name = "flashDurationMs")]
    pub fn flash_duration_ms() -> u64 {
        FLASH_DURATION_MS
    }
}
