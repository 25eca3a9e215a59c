use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod domain;
mod services;

use catalog::CatalogError;
use cli::{Cli, Commands};
use domain::models::{ErrorBody, ErrorOut};
use services::config::{load_config, resolve_source};
use services::output::print_error;

fn main() {
    let cli = Cli::parse();
    setup_tracing();

    if let Err(err) = run(&cli) {
        let code = err
            .downcast_ref::<CatalogError>()
            .map(CatalogError::code)
            .unwrap_or("UNEXPECTED");
        let is_check = matches!(cli.command, Commands::Check);

        if !is_check {
            let _ = print_error(cli.json, code, &format!("{:#}", err));
        } else if cli.json {
            let out = ErrorOut {
                ok: false,
                error: ErrorBody {
                    code,
                    message: format!("{:#}", err),
                },
                products_tested: Some(0),
            };
            if let Ok(rendered) = serde_json::to_string_pretty(&out) {
                println!("{}", rendered);
            }
        } else {
            println!("Unexpected error occurred: {:#}", err);
            println!("Total products tested: 0");
            println!("Total defects found: 0");
        }

        // The check run always completes with exit 0, whatever went wrong.
        if !is_check {
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;
    let source = resolve_source(&cli.source, &config);
    commands::handle_runtime_commands(cli, &config, &source)
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
