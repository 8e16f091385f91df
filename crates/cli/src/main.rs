use anyhow::Result;
use clap::Parser;
use projectionist::Projectionist;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the host action protocol
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Projectionist::parse().execute()
}
