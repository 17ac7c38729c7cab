// laskin-repl: interactive calculator on stdin.
//
// Reads one line at a time and feeds it to the calculator as button
// presses. Whitespace-separated pieces that are named tokens (+/-,
// Backspace, C, =) feed whole; everything else feeds character by
// character, so "1+8=" presses 1, +, 8, =. After each line the display
// is printed.
//
// Usage:
//   laskin-repl [OPTIONS]
//
// Options:
//   --state          Also print the pending operand and operator
//   --diagnostics    Print and drain rejected-input diagnostics
//   -h, --help       Print help

use std::io::{self, BufRead, Write};

use laskin_engine::machine::Calculator;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if laskin_cli::wants_help(&args) {
        println!("laskin-repl: interactive calculator on stdin.");
        println!();
        println!("Usage: laskin-repl [OPTIONS]");
        println!();
        println!("Each input line is fed as button presses. Pieces separated by");
        println!("whitespace feed whole when they are named tokens (+/-, Backspace,");
        println!("C, =) and character by character otherwise: \"1+8=\" presses");
        println!("1, +, 8, =. Keyboard aliases Enter, Escape and / are accepted.");
        println!();
        println!("Options:");
        println!("  --state          Also print the pending operand and operator");
        println!("  --diagnostics    Print and drain rejected-input diagnostics");
        println!("  -h, --help       Print this help");
        return;
    }

    laskin_cli::init_tracing();

    let show_state = args.iter().any(|a| a == "--state");
    let show_diagnostics = args.iter().any(|a| a == "--diagnostics");

    let mut calc = Calculator::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        for token in laskin_cli::expand_line(&line) {
            calc.press(&token);
        }

        let _ = writeln!(out, "{}", calc.display_text());
        if show_state {
            let _ = writeln!(
                out,
                "  pending {} operator {}",
                calc.pending_operand(),
                calc.last_operator()
            );
        }
        if show_diagnostics {
            for diagnostic in calc.diagnostics_mut().take() {
                let _ = writeln!(out, "  ! {diagnostic}");
            }
        }
        let _ = out.flush();
    }
}
