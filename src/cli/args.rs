//! CLI argument definitions using clap derive

use crate::domain::{Operation, Request};
use clap::Parser;

/// Version string rendered by `--version`.
///
/// clap prefixes the program name, so the full output reads
/// `addmul version <version>`, with "unknown" when the package version
/// is unavailable.
fn version_string() -> String {
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
    format!("version {}", version)
}

/// Add or multiply two integers
///
/// Adds the two inputs by default; pass --multiply to multiply them.
#[derive(Parser, Debug)]
#[command(name = "addmul")]
#[command(author, about, long_about = None)]
#[command(version = version_string())]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// 1st number
    pub x: i64,

    /// 2nd number
    pub y: i64,

    /// Enable multiplication of inputs
    #[arg(short, long)]
    pub multiply: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Cli> for Request {
    fn from(cli: &Cli) -> Self {
        Request::new(
            cli.x,
            cli.y,
            Operation::from_multiply_flag(cli.multiply),
            cli.verbose,
        )
    }
}
