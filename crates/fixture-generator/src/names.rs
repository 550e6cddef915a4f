//! Field name sources.
//!
//! A [`NameSource`] hands out unique field names until it is exhausted or
//! reset. Two implementations are provided:
//!
//! - [`FixedNameSource`] - picks randomly from a finite caller-supplied pool
//! - [`SequentialNameSource`] - unbounded `{prefix}{n}` names

use fixture_core::{is_exported_name, GeneratorError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Built-in pool used when no names are configured.
pub const DEFAULT_NAMES: &[&str] = &[
    "Id", "Name", "Title", "Email", "Phone", "Address", "City", "Country", "Zip", "Age",
    "Score", "Rank", "Level", "Count", "Total", "Price", "Amount", "Balance", "Rate", "Ratio",
    "Weight", "Height", "Width", "Depth", "Color", "Status", "Kind", "Tags", "Labels", "Notes",
    "Owner", "Author", "Editor", "Version", "Revision", "Created", "Updated", "Deleted",
    "Enabled", "Visible", "Active", "Primary", "Parent", "Child", "Source", "Target", "Config",
    "Options", "Settings", "Metadata", "Payload", "Items", "Entries", "Records", "Summary",
    "Details", "Profile", "Account", "Session", "Token",
];

/// Trait for generating field names.
pub trait NameSource {
    /// Set the seed for this source. Only future picks are affected.
    fn set_seed(&mut self, seed: u64);

    /// How many names this source can generate until it has to be reset.
    ///
    /// `None` means the source never runs out.
    fn count(&self) -> Option<usize>;

    /// Allow names that were generated before to be generated again.
    fn reset(&mut self);

    /// Generate a field name.
    ///
    /// Names are exported identifiers and are unique until [`reset`] is
    /// called. `None` signals exhaustion, which is not an error.
    ///
    /// [`reset`]: NameSource::reset
    fn generate(&mut self) -> Option<String>;
}

impl<N: NameSource + ?Sized> NameSource for Box<N> {
    fn set_seed(&mut self, seed: u64) {
        (**self).set_seed(seed)
    }

    fn count(&self) -> Option<usize> {
        (**self).count()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn generate(&mut self) -> Option<String> {
        (**self).generate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameState {
    NotUsed,
    Used,
}

/// Name source that randomly picks unused names from a fixed pool.
///
/// Duplicate candidates collapse into one. Candidate order is kept so that a
/// given seed always yields the same sequence of picks.
#[derive(Debug, Clone)]
pub struct FixedNameSource {
    rng: StdRng,
    names: Vec<(String, NameState)>,
}

impl FixedNameSource {
    /// Create a name source from a pool of candidate names.
    pub fn new<I, S>(names: I, seed: u64) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let names: Vec<(String, NameState)> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| seen.insert(name.clone()))
            .map(|name| (name, NameState::NotUsed))
            .collect();

        if names.is_empty() {
            return Err(GeneratorError::EmptyNamePool);
        }

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            names,
        })
    }

    /// Create a name source over [`DEFAULT_NAMES`].
    pub fn with_default_names(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            names: DEFAULT_NAMES
                .iter()
                .map(|name| (name.to_string(), NameState::NotUsed))
                .collect(),
        }
    }

    /// Number of names that can still be generated before a reset.
    pub fn remaining(&self) -> usize {
        self.names
            .iter()
            .filter(|(_, state)| *state == NameState::NotUsed)
            .count()
    }
}

impl NameSource for FixedNameSource {
    fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn count(&self) -> Option<usize> {
        Some(self.names.len())
    }

    fn reset(&mut self) {
        for (_, state) in &mut self.names {
            *state = NameState::NotUsed;
        }
    }

    /// Picks an unused name and marks it used.
    ///
    /// Linear in the size of the pool.
    fn generate(&mut self) -> Option<String> {
        let unused: Vec<usize> = self
            .names
            .iter()
            .enumerate()
            .filter(|(_, (_, state))| *state == NameState::NotUsed)
            .map(|(i, _)| i)
            .collect();

        // All names are in use
        if unused.is_empty() {
            return None;
        }

        let pick = unused[self.rng.random_range(0..unused.len())];
        let (name, state) = &mut self.names[pick];
        *state = NameState::Used;
        Some(name.clone())
    }
}

/// Unbounded name source producing `{prefix}0`, `{prefix}1`, ...
#[derive(Debug, Clone)]
pub struct SequentialNameSource {
    prefix: String,
    next: u64,
}

impl SequentialNameSource {
    /// Create a sequential source. The prefix must itself be an exported
    /// identifier.
    pub fn new(prefix: impl Into<String>) -> Result<Self, GeneratorError> {
        let prefix = prefix.into();
        if !is_exported_name(&prefix) {
            return Err(GeneratorError::InvalidName(prefix));
        }
        Ok(Self { prefix, next: 0 })
    }
}

impl NameSource for SequentialNameSource {
    fn set_seed(&mut self, _seed: u64) {}

    fn count(&self) -> Option<usize> {
        None
    }

    fn reset(&mut self) {
        self.next = 0;
    }

    fn generate(&mut self) -> Option<String> {
        let name = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_count() {
        for names in [
            vec!["a"],
            vec!["a", "b"],
            vec!["a", "b", "c"],
            vec!["a", "b", "c", "d"],
        ] {
            let source = FixedNameSource::new(names.clone(), 1).unwrap();
            assert_eq!(source.count(), Some(names.len()));
        }
    }

    #[test]
    fn test_fixed_single_name() {
        let mut source = FixedNameSource::new(["A"], 1).unwrap();

        assert_eq!(source.count(), Some(1));
        assert_eq!(source.generate(), Some("A".to_string()));
        assert_eq!(source.generate(), None);
    }

    #[test]
    fn test_fixed_generates_all_then_exhausts() {
        let set = ["Foo", "Bar", "Baz"];
        let mut source = FixedNameSource::new(set, 42).unwrap();

        let mut generated: Vec<String> = (0..set.len())
            .map(|_| source.generate().expect("name available"))
            .collect();
        generated.sort();
        assert_eq!(generated, vec!["Bar", "Baz", "Foo"]);

        assert_eq!(source.generate(), None);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_fixed_exhaustion_is_sticky_until_reset() {
        let mut source = FixedNameSource::new(["A", "B"], 7).unwrap();
        source.generate();
        source.generate();

        for _ in 0..5 {
            assert_eq!(source.generate(), None);
        }

        source.reset();
        let mut again = vec![source.generate().unwrap(), source.generate().unwrap()];
        again.sort();
        assert_eq!(again, vec!["A", "B"]);
        assert_eq!(source.generate(), None);
    }

    #[test]
    fn test_fixed_empty_pool_rejected() {
        let result = FixedNameSource::new(Vec::<String>::new(), 1);
        assert!(matches!(result, Err(GeneratorError::EmptyNamePool)));
    }

    #[test]
    fn test_fixed_duplicates_collapse() {
        let mut source = FixedNameSource::new(["A", "A", "B"], 1).unwrap();
        assert_eq!(source.count(), Some(2));
        source.generate();
        source.generate();
        assert_eq!(source.generate(), None);
    }

    #[test]
    fn test_fixed_same_seed_same_order() {
        let names = ["A", "B", "C", "D", "E"];
        let mut source1 = FixedNameSource::new(names, 99).unwrap();
        let mut source2 = FixedNameSource::new(names, 99).unwrap();

        for _ in 0..names.len() {
            assert_eq!(source1.generate(), source2.generate());
        }
    }

    #[test]
    fn test_fixed_set_seed_keeps_used_state() {
        let mut source = FixedNameSource::new(["A", "B", "C"], 1).unwrap();
        let first = source.generate().unwrap();

        source.set_seed(1234);
        assert_eq!(source.remaining(), 2);
        let rest = [source.generate().unwrap(), source.generate().unwrap()];
        assert!(!rest.contains(&first));
        assert_eq!(source.generate(), None);
    }

    #[test]
    fn test_default_names_are_exported_and_unique() {
        let unique: HashSet<&str> = DEFAULT_NAMES.iter().copied().collect();
        assert_eq!(unique.len(), DEFAULT_NAMES.len());
        assert!(DEFAULT_NAMES.iter().all(|name| is_exported_name(name)));

        let source = FixedNameSource::with_default_names(0);
        assert_eq!(source.count(), Some(DEFAULT_NAMES.len()));
    }

    #[test]
    fn test_sequential_names() {
        let mut source = SequentialNameSource::new("Field").unwrap();
        assert_eq!(source.count(), None);
        assert_eq!(source.generate(), Some("Field0".to_string()));
        assert_eq!(source.generate(), Some("Field1".to_string()));

        source.reset();
        assert_eq!(source.generate(), Some("Field0".to_string()));
    }

    #[test]
    fn test_sequential_invalid_prefix() {
        let result = SequentialNameSource::new("field");
        assert!(matches!(result, Err(GeneratorError::InvalidName(_))));
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn NameSource> = Box::new(FixedNameSource::new(["A"], 0).unwrap());
        assert_eq!(source.count(), Some(1));
        assert_eq!(source.generate(), Some("A".to_string()));
        assert_eq!(source.generate(), None);
    }
}
