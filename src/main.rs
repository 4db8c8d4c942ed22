// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up diagnostics
// 3. Run the checker pipeline over the repository root
// 4. Print the report (text or JSON)
// 5. Exit with proper code (0 = all good, 1 = broken links, 2 = error)
// =============================================================================

mod checker;
mod cli;
mod config;
mod discover;
mod error;
mod logging;
mod pipeline;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Fatal problems (missing root, client setup) end up here
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = no broken links
//   Ok(1) = broken links found
//   Err   = fatal error, mapped to exit code 2
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let config = cli.checker_config();
    let report = pipeline::run_checker(&config, cli.progress()).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report::print_report(&report);
    }

    if report.summary.has_broken() {
        Ok(1)
    } else {
        Ok(0)
    }
}
