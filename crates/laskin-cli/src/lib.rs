// laskin-cli: shared utilities for the command-line front ends.
//
// The engine accepts one token per press; a terminal user types lines.
// These helpers turn typed input into token sequences: whitespace-
// separated pieces feed whole when they are named tokens, and expand
// character by character otherwise, so "1+8=" presses 1, +, 8, =.
// Keyboard aliases (Enter, Escape, /) are translated here; the engine
// itself only accepts the button vocabulary.

use std::process;

use laskin_core::token::{TokenKind, classify};

/// Translate a keyboard key name to its calculator token, if it has one.
///
/// `/` is what a keyboard offers for division; the button vocabulary
/// uses `÷`.
pub fn keyboard_alias(piece: &str) -> Option<&'static str> {
    match piece {
        "Enter" => Some("="),
        "Escape" => Some("C"),
        "/" => Some("÷"),
        _ => None,
    }
}

/// Expand one whitespace-separated piece into calculator tokens.
///
/// A keyboard alias or a recognized token feeds whole; anything else is
/// treated as a run of single-character presses, with the `/` alias
/// applied per character. Characters outside the vocabulary still feed
/// through, so the engine logs them as invalid input.
pub fn expand_piece(piece: &str) -> Vec<String> {
    if let Some(mapped) = keyboard_alias(piece) {
        return vec![mapped.to_string()];
    }
    if !matches!(classify(piece), TokenKind::Invalid) {
        return vec![piece.to_string()];
    }
    piece
        .chars()
        .map(|c| match c {
            '/' => "÷".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Expand a full input line into calculator tokens.
pub fn expand_line(line: &str) -> Vec<String> {
    line.split_whitespace().flat_map(expand_piece).collect()
}

/// Initialize tracing output to stderr, filtered by `RUST_LOG`
/// (default: warn), so rejected input is visible without polluting the
/// display output on stdout.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
