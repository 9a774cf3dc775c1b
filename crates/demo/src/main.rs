// File: crates/demo/src/main.rs
// Summary: Fetches the cyclist dataset once and writes the scatter-plot page, SVG and PNG preview.

use std::process::ExitCode;

use clap::Parser;
use doping_chart::{run, Args};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();
    match run(&args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            // the one place failures are reported
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
