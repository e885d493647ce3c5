//! Errors raised by host data and by context construction.
//!
//! Resolution itself never fails: a name that cannot be found anywhere in the
//! scope chain is reported as an absent result. The only errors that travel
//! through a lookup are the ones produced by the host value being inspected,
//! and those are passed to the caller untouched.

use crate::{String, ToString};
use thiserror::Error;

/// Failure reported by a host value while answering a member or index access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// A sequence was indexed with a key that is not an integer.
    #[error("no implicit conversion of '{key}' into a sequence index")]
    InvalidIndex { key: String },

    /// A host accessor failed.
    #[error("{type_name}#{member} failed: {message}")]
    Host {
        type_name: String,
        member: String,
        message: String,
    },
}

impl AccessError {
    /// Convenience constructor for host accessors.
    pub fn host(type_name: &str, member: &str, message: impl Into<String>) -> Self {
        AccessError::Host {
            type_name: type_name.to_string(),
            member: member.to_string(),
            message: message.into(),
        }
    }
}

/// Error raised while assembling context values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The same key appears twice in a mapping or record.
    #[error("duplicate key '{0}'")]
    DuplicateKey(String),

    /// A JSON number that fits neither `i64` nor `f64`.
    #[error("number {0} cannot be represented as an integer or a float")]
    UnsupportedNumber(String),
}
