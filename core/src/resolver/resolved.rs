use core::fmt::{self, Write};

use crate::{
    String, ToString,
    resolver::ContextResolver,
    values::{Value, display::write_inspect},
};

/// A wrapped value, as handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub enum Resolved<'a> {
    /// A primitive, passed through unchanged.
    Value(Value<'a>),
    /// A sequence whose elements have each been wrapped.
    List(&'a [Resolved<'a>]),
    /// A composite value promoted to a scope of its own.
    Scope(&'a ContextResolver<'a>),
}

impl<'a> Resolved<'a> {
    pub fn as_value(&self) -> Option<Value<'a>> {
        match self {
            Resolved::Value(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&'a [Resolved<'a>]> {
        match self {
            Resolved::List(items) => Some(*items),
            _ => None,
        }
    }

    pub fn as_scope(&self) -> Option<&'a ContextResolver<'a>> {
        match self {
            Resolved::Scope(scope) => Some(*scope),
            _ => None,
        }
    }

    /// Element `index` of a list; `None` for anything else.
    pub fn get(&self, index: usize) -> Option<Resolved<'a>> {
        self.as_list()?.get(index).copied()
    }

    /// The underlying host value of a primitive or scope.
    ///
    /// Lists have no single host value.
    pub fn host_value(&self) -> Option<Value<'a>> {
        match self {
            Resolved::Value(value) => Some(*value),
            Resolved::Scope(scope) => Some(scope.value()),
            Resolved::List(_) => None,
        }
    }

    /// Emptiness for inverted sections.
    ///
    /// Lists are empty when they have no elements; scopes and primitives
    /// defer to their value's emptiness check, if any.
    pub fn is_empty(&self) -> bool {
        match self {
            Resolved::Value(value) => value.as_empty_check().is_some_and(|check| check.is_empty()),
            Resolved::List(items) => items.is_empty(),
            Resolved::Scope(scope) => scope.is_empty(),
        }
    }

    /// Whether a section over this value would be skipped.
    ///
    /// Null and `false` are falsy, as is anything that reports itself empty.
    pub fn is_falsy(&self) -> bool {
        match self {
            Resolved::Value(Value::Null | Value::Bool(false)) => true,
            _ => self.is_empty(),
        }
    }

    /// The string form emitted into output, unescaped.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Resolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Value(value) => fmt::Display::fmt(value, f),
            Resolved::Scope(scope) => fmt::Display::fmt(*scope, f),
            Resolved::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match item.host_value() {
                        Some(value) => write_inspect(f, &value)?,
                        None => write!(f, "{}", item)?,
                    }
                }
                f.write_char(']')
            }
        }
    }
}

/// Scopes are equal when they wrap equal values inside the same enclosing scope.
impl PartialEq for Resolved<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Resolved::Value(a), Resolved::Value(b)) => a == b,
            (Resolved::List(a), Resolved::List(b)) => a == b,
            (Resolved::Scope(a), Resolved::Scope(b)) => {
                a.value() == b.value()
                    && match (a.parent(), b.parent()) {
                        (Some(pa), Some(pb)) => core::ptr::eq(pa, pb),
                        (None, None) => true,
                        _ => false,
                    }
            }
            _ => false,
        }
    }
}
