//! addmul - add/multiply demo CLI
//!
//! A command-line tool that adds or multiplies two integers, with an
//! optional verbose mode describing the operation.

use addmul::cli::Cli;
use addmul::commands::run_demo;
use addmul::domain::Request;
use clap::Parser;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments; clap handles --help/--version (exit 0) and
    // bad arguments (usage on stderr, exit 2)
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let request = Request::from(&cli);

    if let Err(e) = run_demo(&request) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
