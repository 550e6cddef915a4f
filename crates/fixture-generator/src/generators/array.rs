//! Sequence value generators.

use super::ValueSource;
use fixture_core::{LeafKind, Value};
use rand::Rng;

/// Generate a sequence of `0..=max_len` leaves, all of `kind`.
pub fn generate_sequence<V: ValueSource + ?Sized>(
    source: &mut V,
    kind: LeafKind,
    max_len: usize,
) -> Value {
    let len = source.choices().random_range(0..=max_len);
    let items = (0..len).map(|_| source.value(kind)).collect();
    Value::Sequence { kind, items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::RandomValueSource;

    #[test]
    fn test_generate_sequence_single_kind() {
        let mut source = RandomValueSource::new(42);

        for _ in 0..20 {
            let value = generate_sequence(&mut source, LeafKind::Integer, 3);
            if let Value::Sequence { kind, items } = value {
                assert_eq!(kind, LeafKind::Integer);
                assert!(items.len() <= 3);
                assert!(items.iter().all(|leaf| leaf.kind() == LeafKind::Integer));
            } else {
                panic!("Expected Sequence value");
            }
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut source1 = RandomValueSource::new(42);
        let mut source2 = RandomValueSource::new(42);

        let value1 = generate_sequence(&mut source1, LeafKind::Text, 4);
        let value2 = generate_sequence(&mut source2, LeafKind::Text, 4);

        assert_eq!(value1, value2);
    }
}
