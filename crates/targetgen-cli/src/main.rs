//! targetgen CLI entry point.
//!
//! Regenerates the Chrome target type module from chromedriver sources:
//!
//! ```sh
//! cargo run --bin targetgen -- --out crates/target-type/src/target_type.rs
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rhizome_targetgen::{GeneratorConfig, config::DEFAULT_OUT, generate};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "targetgen")]
#[command(about = "Generate the Chrome target type module from chromedriver sources")]
struct Cli {
    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUT)]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            "rhizome_targetgen=info"
                .parse()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        ))
        .init();

    let cli = Cli::parse();
    let config = GeneratorConfig::default();

    match generate(&config, &cli.out).await {
        Ok(summary) => {
            info!(
                "Generated {} target types in {}",
                summary.count,
                summary.path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
