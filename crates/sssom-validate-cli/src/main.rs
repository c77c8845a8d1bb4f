//! sssom-validate-ui: web form for validating SSSOM mapping sets.

mod cli;
mod server;
mod web;

use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use sssom_validate::{HttpFetcher, ValidationPipeline, ValidatorConfig};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use server::{app, state::AppState};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ValidatorConfig::new(cli.limit_lines_evaluated, cli.limit_lines_displayed)?;
    let server = cli.server_config();

    // Must outlive the runtime: a blocking client cannot be dropped inside it.
    let fetcher = Arc::new(HttpFetcher::new()?);
    let state = AppState::new(ValidationPipeline::new(config, fetcher.clone()))?;

    let addr = server.addr();
    let url = format!("http://{}", addr);
    println!();
    println!(
        "{} {}",
        "Starting SSSOM validator at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Lines evaluated: {}", config.limit_lines_evaluated);
    println!("  Mappings previewed: {}", config.limit_lines_displayed);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if server.open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, addr))?;

    Ok(())
}
