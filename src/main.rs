//! Command-line interface for fixture-gen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # One document with a wall-clock seed (the seed is logged)
//! RUST_LOG=info fixture-gen generate
//!
//! # Reproducible batch from a config file, overriding one limit
//! fixture-gen generate --config fixtures.yaml --max-field-count 4 \
//!   --seed 42 --count 100 --output fixtures.jsonl
//!
//! # Unbounded field names: Field0, Field1, ... The document stops growing
//! # at --max-total-fields (default 1024)
//! fixture-gen generate --sequential-names Field --max-total-fields 200 \
//!   --format json-pretty
//! ```
//!
//! ## Config
//! ```bash
//! # Print the default configuration as YAML
//! fixture-gen config > fixtures.yaml
//! ```

use clap::{Parser, Subcommand};
use fixture_gen::{run_generate, GenerateArgs};
use fixture_generator::GeneratorConfig;

#[derive(Parser)]
#[command(name = "fixture-gen")]
#[command(about = "Generate randomized nested documents for test fixtures")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random documents
    Generate(GenerateArgs),

    /// Print the default configuration as YAML
    Config,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for documents
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            run_generate(&args)?;
        }
        Commands::Config => {
            print!("{}", serde_yaml::to_string(&GeneratorConfig::default())?);
        }
    }

    Ok(())
}
