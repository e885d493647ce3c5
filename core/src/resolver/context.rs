//! The scope chain a template is rendered against.
//!
//! A [`ContextResolver`] pairs a host value with an optional link to the
//! resolver of the enclosing scope. The renderer creates one root per render
//! and obtains child resolvers through wrapping whenever a lookup produces a
//! composite value, e.g. when entering a section or a loop body:
//!
//! ```text
//! root { title, people: [..] }
//!   └── child { name }        <- one per person; `title` still resolves via root
//! ```
//!
//! All nodes live in the render arena and are immutable once built, so a
//! parent reference can never dangle and the chain cannot form a cycle.

use bumpalo::Bump;
use core::fmt;
use tracing::{debug, trace};

use crate::{
    String, ToString, Vec,
    errors::AccessError,
    options::{MissingKey, ResolverOptions},
    resolver::Resolved,
    values::Value,
};

/// A node of the scope chain.
pub struct ContextResolver<'a> {
    value: Value<'a>,
    parent: Option<&'a ContextResolver<'a>>,
    arena: &'a Bump,
    options: ResolverOptions,
    depth: usize,
}

impl<'a> ContextResolver<'a> {
    /// Create the root resolver for a render.
    ///
    /// # Example
    ///
    /// ```
    /// use bumpalo::Bump;
    /// use whisker_core::{ContextBuilder, ContextResolver, Resolved, Value};
    ///
    /// let arena = Bump::new();
    /// let builder = ContextBuilder::new(&arena);
    /// let context = builder.map([("name", builder.str("Bob"))]).unwrap();
    ///
    /// let root = ContextResolver::root(&arena, context);
    /// assert!(matches!(root.lookup("name"), Ok(Some(Resolved::Value(Value::Str("Bob"))))));
    /// assert!(matches!(root.lookup("missing"), Ok(Some(Resolved::Value(Value::Null)))));
    /// ```
    pub fn root(arena: &'a Bump, value: Value<'a>) -> &'a Self {
        Self::with_options(arena, value, ResolverOptions::default())
    }

    /// Create the root resolver for a render with explicit options.
    pub fn with_options(arena: &'a Bump, value: Value<'a>, options: ResolverOptions) -> &'a Self {
        arena.alloc(ContextResolver {
            value,
            parent: None,
            arena,
            options,
            depth: 0,
        })
    }

    /// Create a child scope over `value`, enclosed by `self`.
    pub fn child(&'a self, value: Value<'a>) -> &'a Self {
        self.arena.alloc(ContextResolver {
            value,
            parent: Some(self),
            arena: self.arena,
            options: self.options,
            depth: self.depth + 1,
        })
    }

    pub fn value(&self) -> Value<'a> {
        self.value
    }

    pub fn parent(&self) -> Option<&'a ContextResolver<'a>> {
        self.parent
    }

    /// Number of enclosing scopes; 0 for the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// The outermost scope of the chain.
    pub fn root_scope(&'a self) -> &'a ContextResolver<'a> {
        let mut scope = self;
        while let Some(parent) = scope.parent {
            scope = parent;
        }
        scope
    }

    /// Iterate from this scope outward to the root.
    pub fn ancestors(&'a self) -> Ancestors<'a> {
        Ancestors { next: Some(self) }
    }

    // ============================================================================
    // Resolution
    // ============================================================================

    /// Resolve `name`, searching scopes from innermost to outermost.
    ///
    /// At each scope the value is asked, in order, for a member named `name`,
    /// for indexed access with `name` as key, and for a stored field named
    /// `name`. The first capability that applies decides the result, which is
    /// wrapped by the scope that produced it. If the value has none of them
    /// the enclosing scope is searched.
    ///
    /// Returns `Ok(None)` when no scope can answer. Errors come only from
    /// host accessors and are returned unchanged.
    pub fn lookup(&'a self, name: &str) -> Result<Option<Resolved<'a>>, AccessError> {
        let mut scope = self;
        loop {
            if let Some(found) = scope.lookup_local(name)? {
                return Ok(Some(found));
            }
            match scope.parent {
                Some(parent) => {
                    debug!(name, depth = scope.depth, "Falling back to enclosing scope");
                    scope = parent;
                }
                None => {
                    debug!(name, depth = self.depth, "Name not found in any scope");
                    return Ok(None);
                }
            }
        }
    }

    /// Resolve `name` against this scope's own value only.
    fn lookup_local(&'a self, name: &str) -> Result<Option<Resolved<'a>>, AccessError> {
        if let Some(member) = self.value.as_member() {
            if let Some(result) = member.call_member(self.arena, name) {
                trace!(name, ty = self.value.type_name(), "Resolved member");
                return Ok(Some(self.wrap(result?)));
            }
        }

        if let Some(indexed) = self.value.as_indexed() {
            let known_missing = self.options.missing_key == MissingKey::FallThrough
                && indexed.contains_key(name) == Some(false);
            if !known_missing {
                trace!(name, ty = self.value.type_name(), "Resolved indexed access");
                return Ok(Some(self.wrap(indexed.index(self.arena, name)?)));
            }
        }

        if let Some(fields) = self.value.as_fields() {
            if let Some(value) = fields.field(name) {
                trace!(name, ty = self.value.type_name(), "Resolved stored field");
                return Ok(Some(self.wrap(value)));
            }
        }

        Ok(None)
    }

    /// Prepare a value found in this scope for use by the renderer.
    ///
    /// - Primitives are returned as they are.
    /// - Sequences that are not mapping-like are wrapped element by element.
    /// - Anything else becomes a child scope of `self`.
    pub fn wrap(&'a self, candidate: Value<'a>) -> Resolved<'a> {
        if candidate.is_primitive() {
            return Resolved::Value(candidate);
        }

        if !candidate.is_mapping_like() {
            if let Some(sequence) = candidate.as_elements() {
                let wrapped = sequence
                    .elements(self.arena)
                    .iter()
                    .map(|element| self.wrap(*element))
                    .collect::<Vec<_>>();
                return Resolved::List(self.arena.alloc_slice_copy(&wrapped));
            }
        }

        Resolved::Scope(self.child(candidate))
    }

    // ============================================================================
    // Emptiness and output
    // ============================================================================

    /// Whether the value reports itself as empty.
    ///
    /// Values without an emptiness check are never empty.
    pub fn is_empty(&self) -> bool {
        self.value
            .as_empty_check()
            .is_some_and(|check| check.is_empty())
    }

    /// The value's string form, unescaped.
    pub fn to_display_string(&self) -> String {
        self.value.to_string()
    }
}

impl fmt::Display for ContextResolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Debug for ContextResolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextResolver")
            .field("value", &self.value)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

/// Iterator over a scope and its enclosing scopes, innermost first.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a ContextResolver<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a ContextResolver<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent;
        Some(current)
    }
}
