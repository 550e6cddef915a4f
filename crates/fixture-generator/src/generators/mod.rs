//! Leaf value generation.
//!
//! This module defines the [`ValueSource`] capability consumed by the
//! structure builder and the seeded [`RandomValueSource`] used by default.

pub mod array;
pub mod text;

use fixture_core::{Leaf, LeafKind};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Default inclusive range for generated integers.
pub const DEFAULT_INT_RANGE: (i64, i64) = (-1000, 1000);

/// Default inclusive range for generated floats.
pub const DEFAULT_FLOAT_RANGE: (f64, f64) = (-1000.0, 1000.0);

/// Default maximum length of generated text.
pub const DEFAULT_TEXT_MAX_LEN: usize = 12;

/// Trait for producing field values.
///
/// Implementations own their random state. Two instances seeded alike must
/// produce the same values for the same sequence of calls.
pub trait ValueSource {
    /// Set the seed for this source.
    fn set_seed(&mut self, seed: u64);

    /// Whether this source can produce values of the given kind.
    ///
    /// The builder never requests a kind for which this returns false.
    fn supports(&self, _kind: LeafKind) -> bool {
        true
    }

    /// Generate a random value of the given kind.
    fn value(&mut self, kind: LeafKind) -> Leaf;

    /// Random source the builder draws structural decisions from
    /// (nest or not, sequence length, which kind).
    fn choices(&mut self) -> &mut dyn RngCore;
}

impl<V: ValueSource + ?Sized> ValueSource for Box<V> {
    fn set_seed(&mut self, seed: u64) {
        (**self).set_seed(seed)
    }

    fn supports(&self, kind: LeafKind) -> bool {
        (**self).supports(kind)
    }

    fn value(&mut self, kind: LeafKind) -> Leaf {
        (**self).value(kind)
    }

    fn choices(&mut self) -> &mut dyn RngCore {
        (**self).choices()
    }
}

/// Value source backed by a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomValueSource {
    rng: StdRng,
    int_range: (i64, i64),
    float_range: (f64, f64),
    text_max_len: usize,
}

impl RandomValueSource {
    /// Create a new value source with the given seed and default ranges.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            int_range: DEFAULT_INT_RANGE,
            float_range: DEFAULT_FLOAT_RANGE,
            text_max_len: DEFAULT_TEXT_MAX_LEN,
        }
    }

    /// Set the inclusive integer range. The bounds are swapped if reversed.
    pub fn with_int_range(mut self, min: i64, max: i64) -> Self {
        self.int_range = (min.min(max), min.max(max));
        self
    }

    /// Set the inclusive float range. The bounds are swapped if reversed.
    pub fn with_float_range(mut self, min: f64, max: f64) -> Self {
        self.float_range = (min.min(max), min.max(max));
        self
    }

    pub fn with_text_max_len(mut self, max_len: usize) -> Self {
        self.text_max_len = max_len;
        self
    }
}

impl ValueSource for RandomValueSource {
    fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn value(&mut self, kind: LeafKind) -> Leaf {
        match kind {
            LeafKind::Integer => {
                let (min, max) = self.int_range;
                Leaf::Int(self.rng.random_range(min..=max))
            }
            LeafKind::Float => {
                let (min, max) = self.float_range;
                Leaf::Float(self.rng.random_range(min..=max))
            }
            LeafKind::Bool => Leaf::Bool(self.rng.random_bool(0.5)),
            LeafKind::Text => text::generate_text(&mut self.rng, self.text_max_len),
            LeafKind::Nil => Leaf::Nil,
        }
    }

    fn choices(&mut self) -> &mut dyn RngCore {
        &mut self.rng
    }
}
