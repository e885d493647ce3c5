use bumpalo::Bump;
use static_assertions::assert_eq_size;

use crate::{
    Vec,
    errors::BuildError,
    values::{
        capabilities::{
            HasElements, HasEmptyCheck, HasField, HasIndexedAccess, HasMember, HostObject,
        },
        entries,
        record::Record,
    },
};

/// Host data a template is rendered against.
///
/// Primitives are stored inline. Composite values are borrowed, either from
/// the host or from the render arena, so copying a `Value` never copies the
/// data behind it.
#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'a str),
    Seq(Seq<'a>),
    Map(Map<'a>),
    Record(&'a Record<'a>),
    Object(&'a dyn HostObject<'a>),
}

assert_eq_size!(Value<'static>, [u64; 3]);

/// A sequence, iterable by position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seq<'a>(&'a [Value<'a>]);

/// A mapping from names to values, iterable by key.
///
/// Entries are kept sorted by key for binary search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Map<'a>(&'a [(&'a str, Value<'a>)]);

impl<'a> Value<'a> {
    /// Text, numbers, booleans and null. These are never wrapped in a scope.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_)
        )
    }

    /// Whether the value is iterable by key.
    pub fn is_mapping_like(&self) -> bool {
        match self {
            Value::Map(_) => true,
            Value::Object(object) => object.is_mapping(),
            _ => false,
        }
    }

    /// Short name of the value's kind, for diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Seq(_) => "seq",
            Value::Map(_) => "map",
            Value::Record(record) => record.name(),
            Value::Object(object) => object.type_name(),
        }
    }

    // ============================================================================
    // Capabilities
    // ============================================================================

    pub fn as_member(&self) -> Option<&dyn HasMember<'a>> {
        match self {
            Value::Str(s) => Some(s),
            Value::Seq(seq) => Some(seq),
            Value::Map(map) => Some(map),
            Value::Record(record) => Some(*record),
            Value::Object(object) => object.as_member(),
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) => None,
        }
    }

    pub fn as_indexed(&self) -> Option<&dyn HasIndexedAccess<'a>> {
        match self {
            Value::Str(s) => Some(s),
            Value::Seq(seq) => Some(seq),
            Value::Map(map) => Some(map),
            Value::Object(object) => object.as_indexed(),
            _ => None,
        }
    }

    pub fn as_fields(&self) -> Option<&dyn HasField<'a>> {
        match self {
            Value::Record(record) => Some(*record),
            Value::Object(object) => object.as_fields(),
            _ => None,
        }
    }

    pub fn as_empty_check(&self) -> Option<&dyn HasEmptyCheck> {
        match self {
            Value::Str(s) => Some(s),
            Value::Seq(seq) => Some(seq),
            Value::Map(map) => Some(map),
            Value::Object(object) => object.as_empty_check(),
            _ => None,
        }
    }

    pub fn as_elements(&self) -> Option<&dyn HasElements<'a>> {
        match self {
            Value::Seq(seq) => Some(seq),
            Value::Object(object) => object.as_elements(),
            _ => None,
        }
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<Seq<'a>> {
        match self {
            Value::Seq(seq) => Some(*seq),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<Map<'a>> {
        match self {
            Value::Map(map) => Some(*map),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&'a Record<'a>> {
        match self {
            Value::Record(record) => Some(*record),
            _ => None,
        }
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => core::ptr::eq(*a, *b) || a == b,
            // Host objects have no structural equality; compare identity.
            (Value::Object(a), Value::Object(b)) => core::ptr::addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl<'a> Seq<'a> {
    pub fn new(items: &'a [Value<'a>]) -> Self {
        Seq(items)
    }

    pub fn as_slice(&self) -> &'a [Value<'a>] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Value<'a>> {
        self.0.get(index).copied()
    }

    pub fn iter(self) -> impl ExactSizeIterator<Item = Value<'a>> + 'a {
        self.0.iter().copied()
    }
}

impl<'a> Map<'a> {
    /// Build a mapping from entries in any order.
    ///
    /// Keys must already live in the arena (see `ContextBuilder::intern`).
    /// Returns an error if a key appears more than once.
    pub fn new(
        arena: &'a Bump,
        items: impl IntoIterator<Item = (&'a str, Value<'a>)>,
    ) -> Result<Self, BuildError> {
        let items = items.into_iter().collect::<Vec<_>>();
        Ok(Map(entries::alloc_sorted(arena, items)?))
    }

    /// Wrap entries that are already sorted by key.
    ///
    /// The entries slice must be sorted by key for binary search to work.
    pub fn from_sorted(items: &'a [(&'a str, Value<'a>)]) -> Self {
        debug_assert!(entries::is_sorted(items), "Entries must be sorted by key");
        Map(items)
    }

    pub fn get(&self, key: &str) -> Option<Value<'a>> {
        entries::find(self.0, key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        entries::find(self.0, key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &'a [(&'a str, Value<'a>)] {
        self.0
    }

    pub fn keys(self) -> impl ExactSizeIterator<Item = &'a str> + 'a {
        self.0.iter().map(|(key, _)| *key)
    }

    pub fn values(self) -> impl ExactSizeIterator<Item = Value<'a>> + 'a {
        self.0.iter().map(|(_, value)| *value)
    }
}
