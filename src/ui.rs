//! Output formatting for the command line.
//!
//! All writes to stdout/stderr go through here so the display logic stays
//! separated from the control flow in `main`.

/// Format and print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Print a single field value on its own line.
///
/// An empty field still produces a (blank) line, so callers can rely on
/// one line per requested field.
pub fn display_value(value: &str) {
    println!("{}", value);
}

/// Print the permutations space-joined on one line, preserving their order.
pub fn display_permutations(permutations: &[String]) {
    println!("{}", permutations.join(" "));
}
