// file: src/main.rs
// version: 1.0.0
// guid: 0b8e3f72-d5a6-4c19-a7e4-9f2d1c6b8035

//! WordPress Site Manager - Main entry point

use clap::Parser;
use tracing::error;
use wordpress_site_manager::{
    cli::{args::Cli, commands},
    logging::logger,
    orchestrator::LocalRunner,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
    }

    let runner = LocalRunner::new();
    if let Err(e) = commands::run(&cli, &runner).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
