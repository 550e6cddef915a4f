//! Core types for the fixture-gen framework.
//!
//! This crate provides the foundational types shared by the generator and
//! the CLI:
//!
//! - [`Leaf`] / [`LeafKind`] - Scalar values and their kinds
//! - [`Value`] - A field value: leaf, nested composite or sequence
//! - [`Composite`] - An ordered mapping of unique names to values
//! - [`Limits`] - Validated generation policy
//! - [`GeneratorError`] - Construction-time failures
//!
//! # Architecture
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    └─── fixture-generator  (name/value sources, structure builder)
//!              │
//!              └─── fixture-gen (CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{Composite, Leaf, Limits, Value};
//!
//! let limits = Limits::new(4, 2).unwrap();
//! assert_eq!(limits.max_field_count(), 4);
//!
//! let mut doc = Composite::new();
//! doc.insert("Age", Value::Leaf(Leaf::Int(42)));
//! assert_eq!(doc.len(), 1);
//! ```

pub mod error;
pub mod limits;
pub mod values;

// Re-exports for convenience
pub use error::GeneratorError;
pub use limits::{Limits, LimitsBuilder};
pub use values::{is_exported_name, Composite, Field, Leaf, LeafKind, Value};
