//! Interactive confirmation.

use std::io::{self, BufRead, Write};

/// Reads one line and returns true only for `y` or `yes`, in any case.
/// Read errors and end of input count as a refusal.
pub fn confirm<R: BufRead>(mut reader: R) -> bool {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
    }
}

/// Prints `question` and waits for an answer on standard input.
pub fn ask(question: &str) -> bool {
    print!("{question}");
    if io::stdout().flush().is_err() {
        return false;
    }
    confirm(io::stdin().lock())
}
