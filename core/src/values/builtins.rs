//! Capabilities of the built-in values.
//!
//! | value    | members                          | indexed access          | fields | empty |
//! |----------|----------------------------------|-------------------------|--------|-------|
//! | `Str`    | length, size, upcase, downcase   | substring match         |        | yes   |
//! | `Seq`    | length, size, first, last        | integer position        |        | yes   |
//! | `Map`    | length, size, keys, values       | key                     |        | yes   |
//! | `Record` | accessors                        |                         | fields |       |

use bumpalo::Bump;

use crate::{
    ToString, Vec,
    errors::AccessError,
    values::{
        Map, Record, Seq, Value,
        capabilities::{
            Access, HasElements, HasEmptyCheck, HasField, HasIndexedAccess, HasMember,
        },
    },
};

fn count<'a>(n: usize) -> Value<'a> {
    Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
}

// ============================================================================
// Str
// ============================================================================

impl<'a> HasMember<'a> for &'a str {
    fn call_member(&self, arena: &'a Bump, name: &str) -> Option<Access<'a>> {
        let value = match name {
            "length" | "size" => count(self.chars().count()),
            "upcase" => Value::Str(arena.alloc_str(&self.to_uppercase())),
            "downcase" => Value::Str(arena.alloc_str(&self.to_lowercase())),
            _ => return None,
        };
        Some(Ok(value))
    }
}

impl<'a> HasIndexedAccess<'a> for &'a str {
    /// Returns the matching substring when `key` occurs in the text, null otherwise.
    fn index(&self, _arena: &'a Bump, key: &str) -> Access<'a> {
        let s: &'a str = *self;
        Ok(match s.find(key) {
            Some(start) => Value::Str(&s[start..start + key.len()]),
            None => Value::Null,
        })
    }

    fn contains_key(&self, key: &str) -> Option<bool> {
        Some(self.contains(key))
    }
}

impl HasEmptyCheck for &str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

// ============================================================================
// Seq
// ============================================================================

impl<'a> Seq<'a> {
    /// Resolve a possibly negative position; negative positions count from the end.
    fn position(&self, key: &str) -> Result<Option<usize>, AccessError> {
        let index = key.parse::<i64>().map_err(|_| AccessError::InvalidIndex {
            key: key.to_string(),
        })?;
        let len = i64::try_from(self.len()).unwrap_or(i64::MAX);
        let index = if index < 0 { len + index } else { index };
        if (0..len).contains(&index) {
            Ok(usize::try_from(index).ok())
        } else {
            Ok(None)
        }
    }
}

impl<'a> HasMember<'a> for Seq<'a> {
    fn call_member(&self, _arena: &'a Bump, name: &str) -> Option<Access<'a>> {
        let value = match name {
            "length" | "size" => count(self.len()),
            "first" => self.get(0).unwrap_or(Value::Null),
            "last" => self.as_slice().last().copied().unwrap_or(Value::Null),
            _ => return None,
        };
        Some(Ok(value))
    }
}

impl<'a> HasIndexedAccess<'a> for Seq<'a> {
    fn index(&self, _arena: &'a Bump, key: &str) -> Access<'a> {
        let position = self.position(key)?;
        Ok(position.and_then(|i| self.get(i)).unwrap_or(Value::Null))
    }

    fn contains_key(&self, key: &str) -> Option<bool> {
        Some(matches!(self.position(key), Ok(Some(_))))
    }
}

impl HasEmptyCheck for Seq<'_> {
    fn is_empty(&self) -> bool {
        Seq::is_empty(self)
    }
}

impl<'a> HasElements<'a> for Seq<'a> {
    fn elements(&self, _arena: &'a Bump) -> &'a [Value<'a>] {
        self.as_slice()
    }
}

// ============================================================================
// Map
// ============================================================================

impl<'a> HasMember<'a> for Map<'a> {
    fn call_member(&self, arena: &'a Bump, name: &str) -> Option<Access<'a>> {
        let value = match name {
            "length" | "size" => count(self.len()),
            "keys" => {
                let keys = self.keys().map(Value::Str).collect::<Vec<_>>();
                Value::Seq(Seq::new(arena.alloc_slice_copy(&keys)))
            }
            "values" => {
                let values = self.values().collect::<Vec<_>>();
                Value::Seq(Seq::new(arena.alloc_slice_copy(&values)))
            }
            _ => return None,
        };
        Some(Ok(value))
    }
}

impl<'a> HasIndexedAccess<'a> for Map<'a> {
    fn index(&self, _arena: &'a Bump, key: &str) -> Access<'a> {
        Ok(self.get(key).unwrap_or(Value::Null))
    }

    fn contains_key(&self, key: &str) -> Option<bool> {
        Some(Map::contains_key(self, key))
    }
}

impl HasEmptyCheck for Map<'_> {
    fn is_empty(&self) -> bool {
        Map::is_empty(self)
    }
}

// ============================================================================
// Record
// ============================================================================

impl<'a> HasMember<'a> for Record<'a> {
    fn call_member(&self, arena: &'a Bump, name: &str) -> Option<Access<'a>> {
        self.call(name, arena)
    }
}

impl<'a> HasField<'a> for Record<'a> {
    fn field(&self, name: &str) -> Option<Value<'a>> {
        Record::field(self, name)
    }
}
