//! Whisker - scoped variable resolution for logic-less templates
//!
//! # Overview
//!
//! A template engine renders `{{name}}` by asking the current scope for
//! `name`. Whisker answers that question. It keeps a chain of scopes, one per
//! section or loop the renderer has entered, and resolves a name by looking at
//! the innermost value first and walking outward until some scope knows it.
//!
//! # Quick Start
//!
//! ```
//! use bumpalo::Bump;
//! use whisker::{ContextBuilder, ContextResolver};
//!
//! let arena = Bump::new();
//! let builder = ContextBuilder::new(&arena);
//! let context = whisker::parse_context(
//!     &builder,
//!     r#"{"title": "Guests", "people": [{"name": "Ann"}, {"name": "Ben"}]}"#,
//! )
//! .unwrap();
//!
//! let root = ContextResolver::root(&arena, context);
//! let people = root.lookup("people").unwrap().unwrap();
//!
//! let mut lines = Vec::new();
//! for person in people.as_list().unwrap() {
//!     let scope = person.as_scope().unwrap();
//!     let title = scope.lookup("title").unwrap().unwrap();
//!     let name = scope.lookup("name").unwrap().unwrap();
//!     lines.push(format!("{}: {}", title, name));
//! }
//! assert_eq!(lines, ["Guests: Ann", "Guests: Ben"]);
//! ```
//!
//! # Host values
//!
//! Context data is a [`Value`]: primitives, sequences, mappings, records with
//! computed accessors, or arbitrary host objects implementing [`HostObject`].
//! Everything is borrowed from a [`bumpalo::Bump`] arena that lives as long
//! as the render.

mod error;

pub use error::Error;

// Re-export public API from whisker_core
pub use whisker_core::{
    AccessError, AccessorFn, Ancestors, BuildError, ContextBuilder, ContextResolver, HostObject,
    Map, MissingKey, Record, Resolved, ResolverOptions, Seq, Value,
};
pub use whisker_core::values::{
    self, HasElements, HasEmptyCheck, HasField, HasIndexedAccess, HasMember, HasStringForm,
    capabilities::Access,
};

/// Parse a JSON document into a context value owned by `builder`'s arena.
pub fn parse_context<'a>(builder: &ContextBuilder<'a>, source: &str) -> Result<Value<'a>, Error> {
    let json: serde_json::Value = serde_json::from_str(source)?;
    Ok(builder.json(&json)?)
}

/// Resolve `name` against `scope`, converting host failures to [`Error`].
///
/// Unlike [`ContextResolver::lookup`], a name that no scope knows is an error
/// here. Use this where a missing variable should be reported rather than
/// rendered as nothing.
pub fn require<'a>(scope: &'a ContextResolver<'a>, name: &str) -> Result<Resolved<'a>, Error> {
    scope.lookup(name)?.ok_or_else(|| Error::NotFound {
        name: name.to_string(),
        depth: scope.depth(),
    })
}
