//! Value representations for generated structures.
//!
//! A generated document is a [`Composite`]: an ordered list of uniquely
//! named fields, each holding a [`Value`]. Values are a tagged variant
//! (leaf, nested composite or sequence) so the shape of the output is fully
//! described by the type system.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// The kind of a scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafKind {
    Integer,
    Float,
    Bool,
    Text,
    Nil,
}

impl LeafKind {
    /// Every leaf kind, in a stable order.
    pub const ALL: [LeafKind; 5] = [
        LeafKind::Integer,
        LeafKind::Float,
        LeafKind::Bool,
        LeafKind::Text,
        LeafKind::Nil,
    ];

    /// Whether a sequence may hold items of this kind.
    ///
    /// A sequence of nils carries no information, so `Nil` is excluded.
    pub fn is_sequence_kind(self) -> bool {
        !matches!(self, LeafKind::Nil)
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeafKind::Integer => "integer",
            LeafKind::Float => "float",
            LeafKind::Bool => "bool",
            LeafKind::Text => "text",
            LeafKind::Nil => "nil",
        };
        f.write_str(name)
    }
}

/// A scalar value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Leaf {
    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Boolean value
    Bool(bool),

    /// String value
    Text(String),

    /// Nil marker
    Nil,
}

impl Leaf {
    /// The kind of this leaf.
    pub fn kind(&self) -> LeafKind {
        match self {
            Leaf::Int(_) => LeafKind::Integer,
            Leaf::Float(_) => LeafKind::Float,
            Leaf::Bool(_) => LeafKind::Bool,
            Leaf::Text(_) => LeafKind::Text,
            Leaf::Nil => LeafKind::Nil,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Leaf::Nil)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Leaf::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Leaf::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Leaf::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single scalar
    Leaf(Leaf),

    /// A composite one level deeper
    Nested(Composite),

    /// A sequence of scalars, all of `kind`
    Sequence { kind: LeafKind, items: Vec<Leaf> },
}

impl Value {
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Value::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Value::Nested(composite) => Some(composite),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Leaf]> {
        match self {
            Value::Sequence { items, .. } => Some(items),
            _ => None,
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence { .. })
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Leaf(leaf) => leaf.serialize(serializer),
            Value::Nested(composite) => composite.serialize(serializer),
            Value::Sequence { items, .. } => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// A single named field of a composite.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

/// An ordered mapping of unique names to values.
///
/// Fields keep their insertion order, which is the order in which the
/// generator produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composite {
    fields: Vec<Field>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing and returning the previous value if the
    /// name is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            return Some(std::mem::replace(&mut field.value, value));
        }
        self.fields.push(Field { name, value });
        None
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Field names at this level, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    /// Longest chain of nested-composite edges below this composite.
    ///
    /// A composite without nested children has depth 0.
    pub fn depth(&self) -> usize {
        self.fields
            .iter()
            .filter_map(|f| f.value.as_composite())
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total number of fields in this composite and every nested one.
    pub fn total_fields(&self) -> usize {
        self.fields
            .iter()
            .map(|f| 1 + f.value.as_composite().map_or(0, Composite::total_fields))
            .sum()
    }

    /// Visit every field of the tree, depth-first, with its nesting level.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(usize, &'a Field)) {
        self.walk_at(0, visit);
    }

    fn walk_at<'a>(&'a self, level: usize, visit: &mut impl FnMut(usize, &'a Field)) {
        for field in &self.fields {
            visit(level, field);
            if let Value::Nested(child) = &field.value {
                child.walk_at(level + 1, visit);
            }
        }
    }
}

impl Serialize for Composite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.name, &field.value)?;
        }
        map.end()
    }
}

/// Check that a name is a valid exported identifier: an uppercase ASCII
/// letter followed by ASCII alphanumerics or underscores.
pub fn is_exported_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Composite {
        let mut inner = Composite::new();
        inner.insert("Flag", Value::Leaf(Leaf::Bool(true)));

        let mut doc = Composite::new();
        doc.insert("Age", Value::Leaf(Leaf::Int(42)));
        doc.insert("Inner", Value::Nested(inner));
        doc.insert(
            "Scores",
            Value::Sequence {
                kind: LeafKind::Float,
                items: vec![Leaf::Float(1.5), Leaf::Float(2.0)],
            },
        );
        doc.insert("Missing", Value::Leaf(Leaf::Nil));
        doc
    }

    #[test]
    fn test_insert_keeps_order_and_replaces() {
        let mut doc = sample();
        let names: Vec<&str> = doc.names().collect();
        assert_eq!(names, vec!["Age", "Inner", "Scores", "Missing"]);

        let old = doc.insert("Age", Value::Leaf(Leaf::Int(7)));
        assert_eq!(old, Some(Value::Leaf(Leaf::Int(42))));
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.get("Age"), Some(&Value::Leaf(Leaf::Int(7))));
    }

    #[test]
    fn test_depth_and_total_fields() {
        let doc = sample();
        assert_eq!(doc.depth(), 1);
        assert_eq!(doc.total_fields(), 5);
        assert_eq!(Composite::new().depth(), 0);
    }

    #[test]
    fn test_walk_reports_levels() {
        let doc = sample();
        let mut seen = Vec::new();
        doc.walk(&mut |level, field| seen.push((level, field.name.clone())));
        assert_eq!(
            seen,
            vec![
                (0, "Age".to_string()),
                (0, "Inner".to_string()),
                (1, "Flag".to_string()),
                (0, "Scores".to_string()),
                (0, "Missing".to_string()),
            ]
        );
    }

    #[test]
    fn test_serialize_json() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"Age":42,"Inner":{"Flag":true},"Scores":[1.5,2.0],"Missing":null}"#
        );
    }

    #[test]
    fn test_serialize_yaml() {
        let yaml = serde_yaml::to_string(&sample()).unwrap();
        assert!(yaml.starts_with("Age: 42\n"));
        assert!(yaml.contains("Missing: null"));
    }

    #[test]
    fn test_leaf_kind() {
        assert_eq!(Leaf::Int(1).kind(), LeafKind::Integer);
        assert_eq!(Leaf::Text("x".into()).kind(), LeafKind::Text);
        assert!(Leaf::Nil.is_nil());
        assert!(!LeafKind::Nil.is_sequence_kind());
        assert!(LeafKind::Text.is_sequence_kind());
    }

    #[test]
    fn test_is_exported_name() {
        assert!(is_exported_name("Foo"));
        assert!(is_exported_name("Field_10"));
        assert!(!is_exported_name("foo"));
        assert!(!is_exported_name(""));
        assert!(!is_exported_name("Has Space"));
        assert!(!is_exported_name("9Lives"));
    }
}
