//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// One-line notice printed to stderr ahead of terminal output.
pub const BANNER: &str = "· keys are generated locally and never stored.";

/// Print the banner to stderr so it never mixes with piped key output.
pub fn print_banner() {
    use colored::Colorize;
    use std::io::Write;
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "  {} {}",
        wgkeygen::constants::APP_NAME.bold(),
        BANNER.dimmed(),
    );
    let _ = writeln!(handle);
    let _ = handle.flush();
}
