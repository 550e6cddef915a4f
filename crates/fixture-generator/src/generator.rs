//! Configuration and the top-level generator.

use crate::builder::build_composite;
use crate::generators::{RandomValueSource, ValueSource};
use crate::names::{FixedNameSource, NameSource};
use fixture_core::limits::{
    DEFAULT_MAX_SEQUENCE_LEN, DEFAULT_MAX_TOTAL_FIELDS, DEFAULT_NEST_PROBABILITY,
    DEFAULT_SEQUENCE_PROBABILITY,
};
use fixture_core::{Composite, GeneratorError, Limits};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default maximum number of fields per composite level.
pub const DEFAULT_MAX_FIELD_COUNT: usize = 16;

/// Default maximum nesting depth.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 8;

/// Seed for the name source derived from a configured seed.
///
/// The value source takes the configured seed as is. Seeding both with the
/// same number would have name picks replay the stream the structural
/// decisions are drawn from.
pub fn name_seed(seed: u64) -> u64 {
    seed.wrapping_add(1)
}

/// Configuration which determines how structures are generated.
///
/// Every field has a default, so a partial YAML document is a valid
/// configuration:
///
/// ```yaml
/// max_field_count: 4
/// generate_nil: false
/// seed: 42
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Maximum number of fields per composite. The effective cap is also
    /// bounded by how many names the name source can produce.
    pub max_field_count: usize,
    /// Maximum nesting depth for composites
    pub max_nesting_depth: usize,
    /// Maximum number of fields in a whole document
    pub max_total_fields: usize,
    pub generate_integers: bool,
    pub generate_floats: bool,
    pub generate_nil: bool,
    pub generate_slices: bool,
    /// Maximum number of items in a sequence field
    pub max_sequence_len: usize,
    pub nest_probability: f64,
    pub sequence_probability: f64,
    /// Seed for the value source; the name source gets [`name_seed`]
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_field_count: DEFAULT_MAX_FIELD_COUNT,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            max_total_fields: DEFAULT_MAX_TOTAL_FIELDS,
            generate_integers: true,
            generate_floats: true,
            generate_nil: true,
            generate_slices: true,
            max_sequence_len: DEFAULT_MAX_SEQUENCE_LEN,
            nest_probability: DEFAULT_NEST_PROBABILITY,
            sequence_probability: DEFAULT_SEQUENCE_PROBABILITY,
            seed: 0,
        }
    }
}

impl GeneratorConfig {
    /// Validate this configuration into [`Limits`].
    pub fn limits(&self) -> Result<Limits, GeneratorError> {
        Limits::builder(self.max_field_count, self.max_nesting_depth)
            .max_sequence_len(self.max_sequence_len)
            .max_total_fields(self.max_total_fields)
            .generate_integers(self.generate_integers)
            .generate_floats(self.generate_floats)
            .generate_nil(self.generate_nil)
            .generate_slices(self.generate_slices)
            .nest_probability(self.nest_probability)
            .sequence_probability(self.sequence_probability)
            .build()
    }
}

/// Generator producing random composites.
///
/// Each call to [`Generator::generate`] resets the name source, so every
/// document draws from the full name pool.
pub struct Generator {
    limits: Limits,
    names: Box<dyn NameSource>,
    values: Box<dyn ValueSource>,
}

impl Generator {
    /// Create a generator using the built-in name pool and a
    /// [`RandomValueSource`], seeded from `config.seed`.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        let names = FixedNameSource::with_default_names(name_seed(config.seed));
        let values = RandomValueSource::new(config.seed);
        Self::with_sources(config, names, values)
    }

    /// Create a generator with explicit name and value sources.
    ///
    /// The sources keep their own seeds; `config.seed` is not applied.
    pub fn with_sources<N, V>(
        config: GeneratorConfig,
        names: N,
        values: V,
    ) -> Result<Self, GeneratorError>
    where
        N: NameSource + 'static,
        V: ValueSource + 'static,
    {
        let limits = config.limits()?;
        debug!(?limits, names = ?names.count(), "created generator");
        Ok(Self {
            limits,
            names: Box::new(names),
            values: Box::new(values),
        })
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Reseed both sources, the name source with [`name_seed`].
    pub fn set_seed(&mut self, seed: u64) {
        self.names.set_seed(name_seed(seed));
        self.values.set_seed(seed);
    }

    /// Generate a single random composite.
    pub fn generate(&mut self) -> Composite {
        self.names.reset();
        build_composite(&self.limits, &mut self.names, &mut self.values)
    }
}

/// Generate a single random composite from a configuration.
pub fn generate(config: GeneratorConfig) -> Result<Composite, GeneratorError> {
    Ok(Generator::new(config)?.generate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::SequentialNameSource;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.max_field_count, 16);
        assert_eq!(config.max_nesting_depth, 8);
        assert!(config.generate_integers);
        assert!(config.generate_floats);
        assert!(config.generate_nil);
        assert!(config.generate_slices);
        assert_eq!(config.max_total_fields, DEFAULT_MAX_TOTAL_FIELDS);

        let limits = config.limits().unwrap();
        assert_eq!(limits.max_field_count(), 16);
    }

    #[test]
    fn test_name_source_seed_differs_from_value_seed() {
        let config = GeneratorConfig {
            max_field_count: 1,
            max_nesting_depth: 1,
            seed: 13,
            ..Default::default()
        };
        let doc = generate(config).unwrap();

        let mut expected = FixedNameSource::with_default_names(name_seed(13));
        let name = doc.names().next().map(str::to_string);
        assert_eq!(name, expected.generate());
        assert_ne!(name_seed(13), 13);
        assert_eq!(name_seed(u64::MAX), 0);
    }

    #[test]
    fn test_depth_over_ceiling_rejected() {
        let config = GeneratorConfig {
            max_nesting_depth: 200_000,
            ..Default::default()
        };
        assert!(matches!(
            Generator::new(config),
            Err(GeneratorError::InvalidLimit {
                limit: "max_nesting_depth",
                ..
            })
        ));
    }

    #[test]
    fn test_unbounded_names_stay_within_field_budget() {
        for seed in 0..16 {
            let mut generator = Generator::with_sources(
                GeneratorConfig::default(),
                SequentialNameSource::new("Field").unwrap(),
                RandomValueSource::new(seed),
            )
            .unwrap();
            let doc = generator.generate();
            assert!(doc.total_fields() <= DEFAULT_MAX_TOTAL_FIELDS);
            assert!(doc.depth() < DEFAULT_MAX_NESTING_DEPTH);
        }
    }

    #[test]
    fn test_config_from_partial_yaml() {
        let yaml = r#"
max_field_count: 4
generate_nil: false
seed: 42
"#;
        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.max_field_count, 4);
        assert!(!config.generate_nil);
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let result: Result<GeneratorConfig, _> = serde_yaml::from_str("max_fields: 3");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig {
            max_field_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            Generator::new(config),
            Err(GeneratorError::InvalidLimit { .. })
        ));
    }

    #[test]
    fn test_generate_is_repeatable_across_calls() {
        let config = GeneratorConfig {
            max_field_count: 3,
            max_nesting_depth: 2,
            seed: 7,
            ..Default::default()
        };
        let mut generator = Generator::with_sources(
            config,
            FixedNameSource::new(["A", "B", "C"], 7).unwrap(),
            RandomValueSource::new(7),
        )
        .unwrap();

        // The name pool is reset per document, so both documents are full
        for _ in 0..3 {
            let doc = generator.generate();
            assert!(!doc.is_empty());
            assert!(doc.len() <= 3);
        }
    }

    #[test]
    fn test_same_seed_same_document() {
        let config = GeneratorConfig {
            seed: 42,
            ..Default::default()
        };
        let doc1 = generate(config.clone()).unwrap();
        let doc2 = generate(config).unwrap();
        assert_eq!(doc1, doc2);
    }

    #[test]
    fn test_set_seed_restarts_generation() {
        let config = GeneratorConfig {
            max_field_count: 5,
            max_nesting_depth: 3,
            ..Default::default()
        };
        let mut generator = Generator::with_sources(
            config,
            SequentialNameSource::new("Field").unwrap(),
            RandomValueSource::new(1),
        )
        .unwrap();

        generator.set_seed(99);
        let first = generator.generate();
        generator.set_seed(99);
        let second = generator.generate();
        assert_eq!(first, second);
    }
}
