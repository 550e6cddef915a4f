//! fixture-gen Library
//!
//! Command handlers behind the `fixture-gen` binary. The generation engine
//! itself lives in the `fixture-generator` crate; this crate turns command
//! line flags and YAML config files into a configured generator and writes
//! the documents it produces.
//!
//! # CLI Usage
//!
//! ```bash
//! # Ten JSON documents from the built-in name pool
//! fixture-gen generate --count 10 --seed 42
//!
//! # Shallow documents without nils, names from a file, as YAML
//! fixture-gen generate --max-nesting-depth 2 --no-nil \
//!   --names-file names.txt --format yaml --output fixtures.yaml
//!
//! # Print the default configuration
//! fixture-gen config
//! ```

pub mod args;
pub mod error;
pub mod generate;
pub mod output;

pub use args::{GenerateArgs, LimitArgs, NameArgs, OutputFormat};
pub use error::CliError;
pub use generate::run_generate;
pub use output::{DocumentWriter, GenerateMetrics};
