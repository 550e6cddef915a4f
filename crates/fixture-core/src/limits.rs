//! Generation limits and kind-selection policy.

use crate::error::GeneratorError;
use crate::values::LeafKind;

/// Largest accepted `max_nesting_depth`.
///
/// Building, walking, serializing and dropping a composite all recurse once
/// per level, so the depth has to stay well within the thread's stack.
pub const MAX_NESTING_DEPTH_CEILING: usize = 64;

/// Default cap on the number of fields in a whole document, all levels
/// counted.
pub const DEFAULT_MAX_TOTAL_FIELDS: usize = 1024;

/// Default upper bound on the number of items in a sequence field.
pub const DEFAULT_MAX_SEQUENCE_LEN: usize = 4;

/// Default probability of nesting a composite when depth allows it.
pub const DEFAULT_NEST_PROBABILITY: f64 = 0.5;

/// Default probability of emitting a sequence instead of a single leaf.
pub const DEFAULT_SEQUENCE_PROBABILITY: f64 = 0.25;

/// Immutable generation policy.
///
/// A `Limits` value can only be obtained through [`Limits::new`] or
/// [`LimitsBuilder::build`], both of which validate it, so every instance in
/// circulation has strictly positive count/depth/sequence limits, a depth
/// no greater than [`MAX_NESTING_DEPTH_CEILING`] and probabilities within
/// `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Limits {
    max_field_count: usize,
    max_nesting_depth: usize,
    max_sequence_len: usize,
    max_total_fields: usize,
    generate_integers: bool,
    generate_floats: bool,
    generate_nil: bool,
    generate_slices: bool,
    nest_probability: f64,
    sequence_probability: f64,
}

impl Limits {
    /// Create limits with every value kind enabled and the default policy.
    pub fn new(max_field_count: usize, max_nesting_depth: usize) -> Result<Self, GeneratorError> {
        Self::builder(max_field_count, max_nesting_depth).build()
    }

    /// Start building limits with the given count and depth caps.
    pub fn builder(max_field_count: usize, max_nesting_depth: usize) -> LimitsBuilder {
        LimitsBuilder {
            limits: Limits {
                max_field_count,
                max_nesting_depth,
                max_sequence_len: DEFAULT_MAX_SEQUENCE_LEN,
                max_total_fields: DEFAULT_MAX_TOTAL_FIELDS,
                generate_integers: true,
                generate_floats: true,
                generate_nil: true,
                generate_slices: true,
                nest_probability: DEFAULT_NEST_PROBABILITY,
                sequence_probability: DEFAULT_SEQUENCE_PROBABILITY,
            },
        }
    }

    pub fn max_field_count(&self) -> usize {
        self.max_field_count
    }

    /// Number of composite levels, the root included.
    pub fn max_nesting_depth(&self) -> usize {
        self.max_nesting_depth
    }

    pub fn max_sequence_len(&self) -> usize {
        self.max_sequence_len
    }

    /// Cap on the fields of a whole document. Once it is reached every
    /// open level ends as if the name source were exhausted.
    pub fn max_total_fields(&self) -> usize {
        self.max_total_fields
    }

    pub fn generate_integers(&self) -> bool {
        self.generate_integers
    }

    pub fn generate_floats(&self) -> bool {
        self.generate_floats
    }

    pub fn generate_nil(&self) -> bool {
        self.generate_nil
    }

    pub fn generate_slices(&self) -> bool {
        self.generate_slices
    }

    pub fn nest_probability(&self) -> f64 {
        self.nest_probability
    }

    pub fn sequence_probability(&self) -> f64 {
        self.sequence_probability
    }

    /// Check whether the toggles allow values of the given kind.
    ///
    /// `Bool` and `Text` have no toggle and are always allowed.
    pub fn allows(&self, kind: LeafKind) -> bool {
        match kind {
            LeafKind::Integer => self.generate_integers,
            LeafKind::Float => self.generate_floats,
            LeafKind::Nil => self.generate_nil,
            LeafKind::Bool | LeafKind::Text => true,
        }
    }

    /// Leaf kinds allowed by the toggles, in [`LeafKind::ALL`] order.
    pub fn allowed_kinds(&self) -> Vec<LeafKind> {
        LeafKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.allows(*kind))
            .collect()
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if self.max_field_count == 0 {
            return Err(GeneratorError::invalid_limit(
                "max_field_count",
                "must be > 0",
            ));
        }
        if self.max_nesting_depth == 0 {
            return Err(GeneratorError::invalid_limit(
                "max_nesting_depth",
                "must be > 0",
            ));
        }
        if self.max_nesting_depth > MAX_NESTING_DEPTH_CEILING {
            return Err(GeneratorError::invalid_limit(
                "max_nesting_depth",
                format!("must be <= {MAX_NESTING_DEPTH_CEILING}"),
            ));
        }
        if self.max_sequence_len == 0 {
            return Err(GeneratorError::invalid_limit(
                "max_sequence_len",
                "must be > 0",
            ));
        }
        if self.max_total_fields == 0 {
            return Err(GeneratorError::invalid_limit(
                "max_total_fields",
                "must be > 0",
            ));
        }
        check_probability("nest_probability", self.nest_probability)?;
        check_probability("sequence_probability", self.sequence_probability)?;
        Ok(())
    }
}

fn check_probability(limit: &'static str, p: f64) -> Result<(), GeneratorError> {
    // NaN fails the range check as well
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GeneratorError::invalid_limit(
            limit,
            format!("{p} is not within [0, 1]"),
        ))
    }
}

/// Builder for [`Limits`]. Validation happens in [`LimitsBuilder::build`].
#[derive(Debug, Clone)]
pub struct LimitsBuilder {
    limits: Limits,
}

impl LimitsBuilder {
    pub fn max_sequence_len(mut self, len: usize) -> Self {
        self.limits.max_sequence_len = len;
        self
    }

    pub fn max_total_fields(mut self, max: usize) -> Self {
        self.limits.max_total_fields = max;
        self
    }

    pub fn generate_integers(mut self, enabled: bool) -> Self {
        self.limits.generate_integers = enabled;
        self
    }

    pub fn generate_floats(mut self, enabled: bool) -> Self {
        self.limits.generate_floats = enabled;
        self
    }

    pub fn generate_nil(mut self, enabled: bool) -> Self {
        self.limits.generate_nil = enabled;
        self
    }

    pub fn generate_slices(mut self, enabled: bool) -> Self {
        self.limits.generate_slices = enabled;
        self
    }

    pub fn nest_probability(mut self, p: f64) -> Self {
        self.limits.nest_probability = p;
        self
    }

    pub fn sequence_probability(mut self, p: f64) -> Self {
        self.limits.sequence_probability = p;
        self
    }

    pub fn build(self) -> Result<Limits, GeneratorError> {
        self.limits.validate()?;
        Ok(self.limits)
    }
}
