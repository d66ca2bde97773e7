//! Lodging - hotel reservation manager
//!
//! Thin command-line front end over `lodging-core`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod state;

use cli::CommandLine;

fn main() {
    let args = CommandLine::parse_args();

    let config = match state::resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::debug!(data_dir = %config.data_dir.display(), "Starting Lodging");

    let mut desk = match state::open_desk(&config) {
        Ok(desk) => desk,
        Err(e) => {
            tracing::error!("Failed to open booking desk: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match commands::run(&mut desk, args.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
