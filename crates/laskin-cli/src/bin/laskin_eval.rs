// laskin-eval: feed one token sequence from the command line and print
// the final display.
//
// Usage:
//   laskin-eval TOKENS...
//
// Examples:
//   laskin-eval 1 + 8 =          => 9
//   laskin-eval "9/3="           => 3
//   laskin-eval 5 +/- Backspace  => 0

use laskin_engine::machine::Calculator;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if laskin_cli::wants_help(&args) {
        println!("laskin-eval: feed a token sequence, print the final display.");
        println!();
        println!("Usage: laskin-eval TOKENS...");
        println!();
        println!("Arguments feed whole when they are named tokens (+/-, Backspace,");
        println!("C, =) and character by character otherwise. Keyboard aliases");
        println!("Enter, Escape and / are accepted.");
        println!();
        println!("Examples:");
        println!("  laskin-eval 1 + 8 =");
        println!("  laskin-eval \"9/3=\"");
        return;
    }
    if args.is_empty() {
        laskin_cli::fatal("no tokens given (try --help)");
    }

    laskin_cli::init_tracing();

    let mut calc = Calculator::new();
    for piece in &args {
        for token in laskin_cli::expand_piece(piece) {
            calc.press(&token);
        }
    }

    println!("{}", calc.display_text());
}
