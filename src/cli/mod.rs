//! Command-line interface.
//!
//! Handles flag parsing and the non-TUI commands (`--version`, `--api-test`)
//! before the terminal UI is initialized.

pub mod args;

pub use args::{parse_args, CliArgs, CliCommand};

/// Crate version, compiled in.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print version information.
pub fn print_version() {
    println!("nusarasa {}", VERSION);
}
