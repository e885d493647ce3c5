//! Capability interfaces consulted during resolution.
//!
//! A value answers a lookup only through the capabilities it exposes. The
//! resolver never asks "what kind of value is this?"; it asks "does this value
//! have members? indexed access? stored fields?" in a fixed order, and falls
//! through when a capability is missing.
//!
//! Built-in values expose a fixed set (see `builtins.rs`). Host objects plug in
//! through [`HostObject`], returning `Some` from the `as_*` methods for the
//! capabilities they support.

use bumpalo::Bump;
use core::fmt;

use crate::errors::AccessError;
use crate::values::Value;

/// Result of invoking a member or an indexed access.
pub type Access<'a> = Result<Value<'a>, AccessError>;

/// Zero-argument members (methods or computed accessors).
pub trait HasMember<'a> {
    /// Invoke the member called `name`.
    ///
    /// Returns `None` when the value has no such member.
    fn call_member(&self, arena: &'a Bump, name: &str) -> Option<Access<'a>>;
}

/// Generic single-key indexed access, like `value[key]`.
pub trait HasIndexedAccess<'a> {
    /// Index the value with `key`.
    ///
    /// A missing key is not an error: implementations return whatever they
    /// consider the missing-key result, typically `Value::Null`.
    fn index(&self, arena: &'a Bump, key: &str) -> Access<'a>;

    /// Whether `key` is present, if the value can tell.
    fn contains_key(&self, _key: &str) -> Option<bool> {
        None
    }
}

/// Stored fields, looked up by their literal name.
pub trait HasField<'a> {
    fn field(&self, name: &str) -> Option<Value<'a>>;
}

/// Emptiness query used by inverted sections.
pub trait HasEmptyCheck {
    fn is_empty(&self) -> bool;
}

/// Canonical string conversion.
pub trait HasStringForm {
    fn write_string(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// Iteration by position.
///
/// Values that are iterable but also mapping-like are not treated as
/// sequences when wrapped.
pub trait HasElements<'a> {
    fn elements(&self, arena: &'a Bump) -> &'a [Value<'a>];
}

/// An arbitrary host object.
///
/// Every capability is optional. The default implementation exposes nothing
/// but a string form, so such an object can only be printed or wrapped as a
/// scope whose lookups go straight to the enclosing scope.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use core::fmt;
/// use whisker_core::values::capabilities::{Access, HasMember, HasStringForm, HostObject};
/// use whisker_core::{ContextResolver, Resolved, Value};
///
/// #[derive(Debug)]
/// struct Clock;
///
/// impl HasStringForm for Clock {
///     fn write_string(&self, out: &mut dyn fmt::Write) -> fmt::Result {
///         out.write_str("clock")
///     }
/// }
///
/// impl<'a> HasMember<'a> for Clock {
///     fn call_member(&self, _arena: &'a Bump, name: &str) -> Option<Access<'a>> {
///         (name == "hour").then(|| Ok(Value::Int(12)))
///     }
/// }
///
/// impl<'a> HostObject<'a> for Clock {
///     fn type_name(&self) -> &str {
///         "Clock"
///     }
///
///     fn as_member(&self) -> Option<&dyn HasMember<'a>> {
///         Some(self)
///     }
/// }
///
/// let arena = Bump::new();
/// let clock = Clock;
/// let root = ContextResolver::root(&arena, Value::Object(&clock));
/// assert!(matches!(root.lookup("hour"), Ok(Some(Resolved::Value(Value::Int(12))))));
/// ```
pub trait HostObject<'a>: HasStringForm + fmt::Debug {
    /// Name used in diagnostics and logs.
    fn type_name(&self) -> &str;

    fn as_member(&self) -> Option<&dyn HasMember<'a>> {
        None
    }

    fn as_indexed(&self) -> Option<&dyn HasIndexedAccess<'a>> {
        None
    }

    fn as_fields(&self) -> Option<&dyn HasField<'a>> {
        None
    }

    fn as_empty_check(&self) -> Option<&dyn HasEmptyCheck> {
        None
    }

    fn as_elements(&self) -> Option<&dyn HasElements<'a>> {
        None
    }

    /// Whether the object is iterable by key rather than by position.
    fn is_mapping(&self) -> bool {
        false
    }
}
