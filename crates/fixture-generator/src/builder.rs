//! Recursive structure builder.
//!
//! The builder fills one composite level at a time. For every name it
//! obtains it decides whether the field becomes a nested composite, a
//! sequence or a single leaf:
//!
//! ```text
//! name ──► room to nest? ──yes──► nest_probability draw ──hit──► recurse (depth + 1)
//!               │                          │
//!               no                        miss
//!               ▼                          ▼
//!        slices enabled? ──yes──► sequence_probability draw ──hit──► sequence
//!               │                          │
//!               no                        miss
//!               ▼                          ▼
//!             leaf of a permitted kind ◄───┘
//! ```
//!
//! The same name and value sources are used for every level, so names are
//! unique across the whole document. Depth is bounded structurally: at
//! `max_nesting_depth - 1` nesting is never selected. Size is bounded by
//! `max_total_fields`: once that many names have been placed, every open
//! level stops as though the name source had run out.

use crate::generators::array::generate_sequence;
use crate::generators::ValueSource;
use crate::names::NameSource;
use fixture_core::{Composite, LeafKind, Limits, Value};
use rand::Rng;
use tracing::{debug, trace};

/// Build one composite from the given limits and sources.
///
/// The name source is not reset first; see [`crate::Generator::generate`]
/// for the resetting wrapper.
pub fn build_composite<N, V>(limits: &Limits, names: &mut N, values: &mut V) -> Composite
where
    N: NameSource + ?Sized,
    V: ValueSource + ?Sized,
{
    StructureBuilder::new(limits, names, values).build()
}

/// Recursive engine producing composites that honor a [`Limits`].
pub struct StructureBuilder<'a, N: ?Sized, V: ?Sized> {
    limits: &'a Limits,
    names: &'a mut N,
    values: &'a mut V,
    /// Kinds both allowed by the toggles and supported by the value source
    leaf_kinds: Vec<LeafKind>,
    sequence_kinds: Vec<LeafKind>,
    /// Fields placed so far, all levels counted
    placed: usize,
}

impl<'a, N, V> StructureBuilder<'a, N, V>
where
    N: NameSource + ?Sized,
    V: ValueSource + ?Sized,
{
    pub fn new(limits: &'a Limits, names: &'a mut N, values: &'a mut V) -> Self {
        let leaf_kinds: Vec<LeafKind> = limits
            .allowed_kinds()
            .into_iter()
            .filter(|kind| values.supports(*kind))
            .collect();
        let sequence_kinds = if limits.generate_slices() {
            leaf_kinds
                .iter()
                .copied()
                .filter(|kind| kind.is_sequence_kind())
                .collect()
        } else {
            Vec::new()
        };

        Self {
            limits,
            names,
            values,
            leaf_kinds,
            sequence_kinds,
            placed: 0,
        }
    }

    /// Build one composite, starting at depth 0.
    pub fn build(&mut self) -> Composite {
        self.placed = 0;
        self.build_level(0)
    }

    fn build_level(&mut self, depth: usize) -> Composite {
        let mut composite = Composite::new();

        // Nothing can be placed at a terminal level without leaf kinds
        if !self.can_nest(depth) && self.leaf_kinds.is_empty() {
            debug!(depth, "no permitted leaf kinds at terminal level");
            return composite;
        }

        while composite.len() < self.limits.max_field_count() {
            if self.placed >= self.limits.max_total_fields() {
                trace!(depth, "document field budget spent");
                break;
            }
            let Some(name) = self.names.generate() else {
                trace!(depth, "name source exhausted");
                break;
            };
            self.placed += 1;

            let value = self.field_value(depth);
            trace!(depth, name = %name, "placed field");
            composite.insert(name, value);
        }

        debug!(depth, fields = composite.len(), "completed composite level");
        composite
    }

    fn can_nest(&self, depth: usize) -> bool {
        depth + 1 < self.limits.max_nesting_depth()
    }

    fn field_value(&mut self, depth: usize) -> Value {
        if self.can_nest(depth) {
            // Without leaf kinds nesting is the only option left
            let nest = self.leaf_kinds.is_empty()
                || self
                    .values
                    .choices()
                    .random_bool(self.limits.nest_probability());
            if nest {
                return Value::Nested(self.build_level(depth + 1));
            }
        }

        if !self.sequence_kinds.is_empty()
            && self
                .values
                .choices()
                .random_bool(self.limits.sequence_probability())
        {
            let kind = pick(&self.sequence_kinds, &mut *self.values);
            return generate_sequence(&mut *self.values, kind, self.limits.max_sequence_len());
        }

        let kind = pick(&self.leaf_kinds, &mut *self.values);
        Value::Leaf(self.values.value(kind))
    }
}

fn pick<V: ValueSource + ?Sized>(kinds: &[LeafKind], values: &mut V) -> LeafKind {
    kinds[values.choices().random_range(0..kinds.len())]
}
