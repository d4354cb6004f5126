use clap::Parser;
use tracing_subscriber::EnvFilter;

use cbtsp::config::Configuration;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Configuration::parse();
    if let Err(error) = cbtsp::run::run(&config) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
