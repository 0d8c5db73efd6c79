use clap::Parser;
use std::process;

use codesweep::cli::{Cli, Commands};
use codesweep::handlers;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> codesweep::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    match cli.command {
        Commands::Scan {
            input,
            output,
            format,
            workers,
            timeout,
            external_tools,
        } => handlers::handle_scan(input, output, format, workers, timeout, external_tools),
        Commands::Languages => handlers::handle_languages(),
    }
}
