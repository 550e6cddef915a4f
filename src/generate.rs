//! Generate command handler.

use crate::args::{GenerateArgs, NameArgs};
use crate::error::CliError;
use crate::output::{DocumentWriter, GenerateMetrics};
use anyhow::Context;
use fixture_generator::{
    name_seed, FixedNameSource, Generator, GeneratorConfig, NameSource, RandomValueSource,
    SequentialNameSource,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Default buffer size for file output.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Run the generate command.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<GenerateMetrics> {
    let config = resolve_config(args).context("Invalid generator configuration")?;
    info!(
        "Generating {} document(s) with seed {} (max_field_count={}, max_nesting_depth={})",
        args.count, config.seed, config.max_field_count, config.max_nesting_depth
    );

    let names = build_name_source(&args.names, config.seed)?;
    let values = RandomValueSource::new(config.seed);
    let mut generator = Generator::with_sources(config, names, values)?;

    let output: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Create {
                path: path.clone(),
                source,
            })?;
            Box::new(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    let writer = DocumentWriter::new(output, args.format);
    let metrics = write_documents(&mut generator, args.count, writer)
        .context("Failed to write generated documents")?;

    info!(
        "Generated {} document(s), {} field(s), max depth {} in {:?} ({:.0} docs/s)",
        metrics.documents_written,
        metrics.fields_generated,
        metrics.max_depth,
        metrics.total_duration,
        metrics.documents_per_second()
    );
    if let Some(path) = &args.output {
        info!("Wrote: {}", path.display());
    }

    Ok(metrics)
}

/// Generate `count` documents and write them out.
pub fn write_documents<W: Write>(
    generator: &mut Generator,
    count: u64,
    mut writer: DocumentWriter<W>,
) -> Result<GenerateMetrics, CliError> {
    let start_time = Instant::now();
    let mut metrics = GenerateMetrics::default();
    let mut generation_time = Duration::ZERO;
    let mut write_time = Duration::ZERO;

    for _ in 0..count {
        let gen_start = Instant::now();
        let doc = generator.generate();
        generation_time += gen_start.elapsed();

        let write_start = Instant::now();
        writer.write(&doc)?;
        write_time += write_start.elapsed();

        metrics.record(&doc);
        debug!(
            document = metrics.documents_written,
            fields = doc.len(),
            depth = doc.depth(),
            "wrote document"
        );
    }

    writer.finish()?;

    metrics.generation_duration = generation_time;
    metrics.write_duration = write_time;
    metrics.total_duration = start_time.elapsed();
    Ok(metrics)
}

/// Merge the config file, the command-line overrides and the seed policy.
///
/// The seed comes from `--seed`, else the config file's `seed` key, else the
/// wall clock.
pub fn resolve_config(args: &GenerateArgs) -> Result<GeneratorConfig, CliError> {
    let (mut config, file_seed) = match &args.config {
        Some(path) => load_config(path)?,
        None => (GeneratorConfig::default(), false),
    };

    args.limits.apply(&mut config);

    if let Some(seed) = args.seed {
        config.seed = seed;
    } else if !file_seed {
        config.seed = clock_seed();
        info!("No seed given, using wall-clock seed {}", config.seed);
    }

    // Fail before any output is produced
    config.limits()?;
    Ok(config)
}

/// Load a YAML config file. The flag reports whether it set a seed.
pub fn load_config(path: &Path) -> Result<(GeneratorConfig, bool), CliError> {
    let content = read_file(path)?;
    let raw: serde_yaml::Value = serde_yaml::from_str(&content)?;
    let has_seed = raw.get("seed").is_some();
    // An empty file parses as null
    let config = if raw.is_null() {
        GeneratorConfig::default()
    } else {
        serde_yaml::from_value(raw)?
    };
    debug!(?config, path = %path.display(), "loaded config file");
    Ok((config, has_seed))
}

/// Build the name source selected on the command line.
///
/// `seed` is the configured seed; fixed pools are seeded with its
/// [`name_seed`] so they do not share a stream with the value source.
pub fn build_name_source(args: &NameArgs, seed: u64) -> Result<Box<dyn NameSource>, CliError> {
    let seed = name_seed(seed);
    if let Some(prefix) = &args.sequential_names {
        return Ok(Box::new(SequentialNameSource::new(prefix.clone())?));
    }

    let names = match &args.names_file {
        Some(path) => parse_names(&read_file(path)?),
        None => args.names.clone(),
    };

    if names.is_empty() && args.names_file.is_none() {
        return Ok(Box::new(FixedNameSource::with_default_names(seed)));
    }

    let source = FixedNameSource::new(names, seed)?;
    debug!(count = ?source.count(), "using fixed name pool");
    Ok(Box::new(source))
}

/// Parse a names file: one name per line, blank lines and `#` comments
/// ignored.
pub fn parse_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
