//! Building context values in the render arena.
//!
//! Context data reaches the resolver as [`Value`]s borrowed from an arena.
//! [`ContextBuilder`] allocates strings, sequences, mappings and records there
//! and interns the keys, so a list of a thousand records with the same field
//! names stores each name once.

use bumpalo::Bump;
use core::cell::RefCell;
use hashbrown::{DefaultHashBuilder, HashMap};

use crate::{
    Vec,
    errors::BuildError,
    values::{AccessorFn, Map, Record, Seq, Value},
};

pub struct ContextBuilder<'a> {
    arena: &'a Bump,
    interned_strs: RefCell<HashMap<&'a str, &'a str, DefaultHashBuilder, &'a Bump>>,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(arena: &'a Bump) -> Self {
        Self {
            arena,
            interned_strs: RefCell::new(HashMap::new_in(arena)),
        }
    }

    pub fn arena(&self) -> &'a Bump {
        self.arena
    }

    /// Return the arena copy of `s`, allocating it on first use.
    pub fn intern(&self, s: &str) -> &'a str {
        if let Some(&interned_str) = self.interned_strs.borrow().get(s) {
            return interned_str;
        }
        let arena_str = self.arena.alloc_str(s);
        self.interned_strs.borrow_mut().insert(arena_str, arena_str);
        arena_str
    }

    /// A string value. Text is copied, not interned.
    pub fn str(&self, s: &str) -> Value<'a> {
        Value::Str(self.arena.alloc_str(s))
    }

    pub fn seq(&self, items: &[Value<'a>]) -> Value<'a> {
        Value::Seq(Seq::new(self.arena.alloc_slice_copy(items)))
    }

    /// A mapping. Keys are interned; duplicates are rejected.
    pub fn map<'k>(
        &self,
        entries: impl IntoIterator<Item = (&'k str, Value<'a>)>,
    ) -> Result<Value<'a>, BuildError> {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (self.intern(key), value))
            .collect::<Vec<_>>();
        Ok(Value::Map(Map::new(self.arena, entries)?))
    }

    /// A record with stored fields and computed accessors.
    pub fn record<'k>(
        &self,
        name: &str,
        fields: impl IntoIterator<Item = (&'k str, Value<'a>)>,
        accessors: impl IntoIterator<Item = (&'k str, AccessorFn)>,
    ) -> Result<Value<'a>, BuildError> {
        let fields = fields
            .into_iter()
            .map(|(key, value)| (self.intern(key), value))
            .collect::<Vec<_>>();
        let accessors = accessors
            .into_iter()
            .map(|(key, accessor)| (self.intern(key), accessor))
            .collect::<Vec<_>>();
        let record = Record::new(self.arena, self.intern(name), fields, accessors)?;
        Ok(Value::Record(record))
    }

    /// Convert parsed JSON into a context value.
    ///
    /// Objects become mappings and arrays sequences. Numbers that fit `i64`
    /// become integers; everything else numeric becomes a float.
    #[cfg(feature = "json")]
    pub fn json(&self, json: &serde_json::Value) -> Result<Value<'a>, BuildError> {
        use crate::ToString;
        use serde_json::Value as Json;

        let value = match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(x) = n.as_f64() {
                    Value::Float(x)
                } else {
                    return Err(BuildError::UnsupportedNumber(n.to_string()));
                }
            }
            Json::String(s) => self.str(s),
            Json::Array(items) => {
                let items = items
                    .iter()
                    .map(|item| self.json(item))
                    .collect::<Result<Vec<_>, _>>()?;
                self.seq(&items)
            }
            Json::Object(object) => {
                let entries = object
                    .iter()
                    .map(|(key, value)| Ok((key.as_str(), self.json(value)?)))
                    .collect::<Result<Vec<_>, BuildError>>()?;
                self.map(entries)?
            }
        };
        Ok(value)
    }
}
