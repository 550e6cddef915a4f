//! Random structure generator for fixture-gen.
//!
//! This crate provides the [`Generator`] which produces randomized nested
//! documents for use as test fixtures. Field names come from a
//! [`NameSource`], leaf values from a [`ValueSource`], and both are seeded
//! explicitly so that runs are reproducible.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig
//!        │ limits()
//!        ▼
//! ┌──────────────────────┐
//! │   StructureBuilder   │
//! │                      │
//! │  - Limits            │
//! │  - NameSource        │◄── FixedNameSource / SequentialNameSource
//! │  - ValueSource       │◄── RandomValueSource
//! └──────────┬───────────┘
//!            │
//!            ▼
//!   Composite { name: Leaf | Nested | Sequence, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_generator::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig {
//!     max_field_count: 4,
//!     max_nesting_depth: 3,
//!     seed: 42,
//!     ..Default::default()
//! };
//!
//! let mut generator = Generator::new(config).unwrap();
//! let doc = generator.generate();
//! assert!(doc.len() <= 4);
//! assert!(doc.depth() < 3);
//! ```
//!
//! # Value kinds
//!
//! - `integer` - uniform in an inclusive range (toggle: `generate_integers`)
//! - `float` - uniform in an inclusive range (toggle: `generate_floats`)
//! - `nil` - nil marker (toggle: `generate_nil`)
//! - `bool` - fair coin
//! - `text` - short alphanumeric string
//! - sequences of any non-nil kind (toggle: `generate_slices`)

pub mod builder;
pub mod generator;
pub mod generators;
pub mod names;

// Re-exports for convenience
pub use builder::{build_composite, StructureBuilder};
pub use generator::{generate, name_seed, Generator, GeneratorConfig};
pub use generators::{RandomValueSource, ValueSource};
pub use names::{FixedNameSource, NameSource, SequentialNameSource, DEFAULT_NAMES};
