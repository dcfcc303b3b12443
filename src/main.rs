mod cli;

use std::process;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Logs go to stderr; stdout carries key ids only.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "keyid=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse();

    if let Err(e) = cli::commands::dispatch(args) {
        eprintln!("keyid: {e:#}");
        process::exit(1);
    }
}
