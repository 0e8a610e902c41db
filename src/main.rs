//! get-papers-list - Fetch research papers with pharmaceutical company affiliations
//!
//! Searches PubMed, keeps papers where at least one author lists a
//! pharmaceutical or biotech company affiliation, and prints or saves them.

use clap::Parser;
use pharma_papers::cli::CliArgs;
use pharma_papers::config::Settings;
use pharma_papers::logging;
use pharma_papers::orchestrator::Orchestrator;
use pharma_papers::output::{create_formatter, write_report};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init_cli_logger(args.debug);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::debug!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let settings = Settings::resolve(&args)?;
    tracing::debug!("Using E-utilities at {}", settings.base_url);

    let orchestrator = Orchestrator::new(settings)?.with_progress(!args.quiet);
    let report = orchestrator.run(&args.query, args.max_results).await?;

    if report.nothing_found() {
        println!("No papers found matching the query.");
        return Ok(ExitCode::SUCCESS);
    }

    let format = args.output_format();
    match &args.file {
        Some(path) => {
            write_report(path, format, &report)?;
            println!("Results saved to {}", path.display());
        }
        None => {
            let formatter = create_formatter(format, args.use_color());
            let mut stdout = io::stdout().lock();
            formatter.format(&report, &mut stdout)?;
            stdout.flush()?;
        }
    }

    // Partial success - some batches could not be parsed
    if report.has_warnings() {
        for warning in &report.warnings {
            eprintln!("Warning: {}", warning);
        }
        return Ok(ExitCode::from(2));
    }

    Ok(ExitCode::SUCCESS)
}
