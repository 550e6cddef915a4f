//! CLI argument definitions for the generate command.

use clap::{Args, ValueEnum};
use fixture_generator::GeneratorConfig;
use std::path::PathBuf;

/// Output encoding for generated documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One compact JSON document per line
    Json,
    /// Indented JSON, one document after another
    JsonPretty,
    /// YAML documents separated by `---`
    Yaml,
}

/// Limit and toggle overrides applied on top of the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct LimitArgs {
    /// Maximum number of fields per composite (default: 16)
    #[arg(long)]
    pub max_field_count: Option<usize>,

    /// Maximum nesting depth, the root included (default: 8, at most 64)
    #[arg(long)]
    pub max_nesting_depth: Option<usize>,

    /// Maximum number of fields in one document, all levels counted (default: 1024)
    #[arg(long)]
    pub max_total_fields: Option<usize>,

    /// Maximum number of items in a sequence field (default: 4)
    #[arg(long)]
    pub max_sequence_len: Option<usize>,

    /// Probability of nesting a composite when depth allows it (default: 0.5)
    #[arg(long)]
    pub nest_probability: Option<f64>,

    /// Probability of emitting a sequence instead of a leaf (default: 0.25)
    #[arg(long)]
    pub sequence_probability: Option<f64>,

    /// Never generate integer values
    #[arg(long)]
    pub no_integers: bool,

    /// Never generate floating point values
    #[arg(long)]
    pub no_floats: bool,

    /// Never generate nil values
    #[arg(long)]
    pub no_nil: bool,

    /// Never generate sequence values
    #[arg(long)]
    pub no_slices: bool,
}

impl LimitArgs {
    /// Apply the overrides that were given on the command line.
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(count) = self.max_field_count {
            config.max_field_count = count;
        }
        if let Some(depth) = self.max_nesting_depth {
            config.max_nesting_depth = depth;
        }
        if let Some(total) = self.max_total_fields {
            config.max_total_fields = total;
        }
        if let Some(len) = self.max_sequence_len {
            config.max_sequence_len = len;
        }
        if let Some(p) = self.nest_probability {
            config.nest_probability = p;
        }
        if let Some(p) = self.sequence_probability {
            config.sequence_probability = p;
        }
        if self.no_integers {
            config.generate_integers = false;
        }
        if self.no_floats {
            config.generate_floats = false;
        }
        if self.no_nil {
            config.generate_nil = false;
        }
        if self.no_slices {
            config.generate_slices = false;
        }
    }
}

/// Where field names come from. At most one option may be given; without
/// any, the built-in name pool is used.
#[derive(Args, Clone, Debug, Default)]
#[group(multiple = false)]
pub struct NameArgs {
    /// Fixed pool of field names (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub names: Vec<String>,

    /// File with one field name per line (blank lines and `#` comments ignored)
    #[arg(long, value_name = "PATH")]
    pub names_file: Option<PathBuf>,

    /// Generate unbounded names `<PREFIX>0`, `<PREFIX>1`, ...
    #[arg(long, value_name = "PREFIX")]
    pub sequential_names: Option<String>,
}

/// Arguments for `fixture-gen generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// YAML configuration file; command-line flags take precedence
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub limits: LimitArgs,

    #[command(flatten)]
    pub names: NameArgs,

    /// Random seed (same seed = same documents). Defaults to the config
    /// file's seed, then to the current time.
    #[arg(long, env = "FIXTURE_GEN_SEED")]
    pub seed: Option<u64>,

    /// Number of documents to generate
    #[arg(long, default_value = "1")]
    pub count: u64,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let args = LimitArgs {
            max_field_count: Some(3),
            max_total_fields: Some(20),
            nest_probability: Some(0.1),
            no_nil: true,
            no_slices: true,
            ..Default::default()
        };
        let mut config = GeneratorConfig::default();
        args.apply(&mut config);

        assert_eq!(config.max_field_count, 3);
        assert_eq!(config.max_nesting_depth, 8);
        assert_eq!(config.max_total_fields, 20);
        assert_eq!(config.nest_probability, 0.1);
        assert!(config.generate_integers);
        assert!(!config.generate_nil);
        assert!(!config.generate_slices);
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut config = GeneratorConfig {
            max_field_count: 5,
            generate_floats: false,
            ..Default::default()
        };
        let before = config.clone();
        LimitArgs::default().apply(&mut config);
        assert_eq!(config, before);
    }
}
