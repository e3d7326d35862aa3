//! Shared CLI output helpers.
//!
//! Data goes to stdout untouched; diagnostics go to stderr.
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print raw data to stdout with no decoration.
pub fn data(content: &str) {
    if content.ends_with('\n') {
        print!("{}", content);
    } else {
        println!("{}", content);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ secure random source unavailable`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ set DATABASE_URL`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}
