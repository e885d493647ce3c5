//! Records: named host objects with stored fields and computed accessors.

use bumpalo::Bump;
use core::fmt;

use crate::{
    Vec,
    errors::{AccessError, BuildError},
    values::{Value, entries},
};

/// Signature of a computed record accessor.
///
/// Accessors take no arguments besides the record itself. Derived values
/// (for example a formatted string) are allocated in `arena`.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use whisker_core::{AccessError, AccessorFn, Record, Value};
///
/// fn initial<'a>(_arena: &'a Bump, person: &Record<'a>) -> Result<Value<'a>, AccessError> {
///     let name = person.field("name").and_then(|v| v.as_str()).unwrap_or("");
///     Ok(Value::Str(name.get(..1).unwrap_or("")))
/// }
///
/// let arena = Bump::new();
/// let accessors: [(&str, AccessorFn); 1] = [("initial", initial)];
/// let person = Record::new(&arena, "Person", [("name", Value::Str("Ada"))], accessors).unwrap();
/// assert_eq!(person.call("initial", &arena).unwrap(), Ok(Value::Str("A")));
/// ```
pub type AccessorFn = for<'a> fn(&'a Bump, &Record<'a>) -> Result<Value<'a>, AccessError>;

/// A host record.
///
/// Accessors answer as members and take precedence over stored fields of the
/// same name.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    name: &'a str,
    fields: &'a [(&'a str, Value<'a>)],
    accessors: &'a [(&'a str, AccessorFn)],
}

impl<'a> Record<'a> {
    /// Allocate a record in the arena.
    ///
    /// Names must already live in the arena. Returns an error if a field or
    /// accessor name is repeated.
    pub fn new(
        arena: &'a Bump,
        name: &'a str,
        fields: impl IntoIterator<Item = (&'a str, Value<'a>)>,
        accessors: impl IntoIterator<Item = (&'a str, AccessorFn)>,
    ) -> Result<&'a Self, BuildError> {
        let fields = entries::alloc_sorted(arena, fields.into_iter().collect::<Vec<_>>())?;
        let accessors = entries::alloc_sorted(arena, accessors.into_iter().collect::<Vec<_>>())?;
        Ok(arena.alloc(Record {
            name,
            fields,
            accessors,
        }))
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Stored fields, sorted by name.
    pub fn fields(&self) -> &'a [(&'a str, Value<'a>)] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<Value<'a>> {
        entries::find(self.fields, name).copied()
    }

    pub fn has_accessor(&self, name: &str) -> bool {
        entries::find(self.accessors, name).is_some()
    }

    /// Invoke the accessor called `name`, if there is one.
    pub fn call(&self, name: &str, arena: &'a Bump) -> Option<Result<Value<'a>, AccessError>> {
        let accessor = entries::find(self.accessors, name)?;
        Some(accessor(arena, self))
    }
}

impl PartialEq for Record<'_> {
    /// Accessors are compared by name only.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.fields == other.fields
            && self.accessors.len() == other.accessors.len()
            && self
                .accessors
                .iter()
                .zip(other.accessors)
                .all(|((a, _), (b, _))| a == b)
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accessors = self.accessors.iter().map(|(name, _)| *name).collect::<Vec<_>>();
        f.debug_struct("Record")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("accessors", &accessors)
            .finish()
    }
}
