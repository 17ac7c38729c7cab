// laskin-engine: the calculator state machine and its observation plumbing.
//
// The engine owns three observable fields (display text, pending operand,
// last operator) and applies one input token at a time. Rejected input
// never raises an error: it lands in the diagnostic log and the state
// stays put. Front ends (CLI, WASM) feed tokens in and read the fields
// back out, either directly or through change subscriptions.

pub mod diagnostics;
pub mod flash;
pub mod machine;
pub mod observe;
