//! Dotted variable paths, as typed at the prompt.
//!
//! `people.0.name` looks up `people`, takes element 0 of the resulting list
//! and looks up `name` in that element's scope. A leading `^` asks whether
//! the result would skip an inverted section instead of printing it.

use miette::Diagnostic;
use thiserror::Error;
use whisker::{AccessError, ContextResolver, MissingKey, Resolved, Value};

#[derive(Debug, Error, Diagnostic)]
pub enum PathError {
    #[error("empty path")]
    #[diagnostic(code(whisker::path::empty), help("type a variable name, e.g. `title`"))]
    Empty,

    #[error("empty segment in '{path}'")]
    #[diagnostic(code(whisker::path::segment))]
    EmptySegment { path: String },

    #[error("'{segment}' is not a list position")]
    #[diagnostic(
        code(whisker::path::index),
        help("lists are indexed by position, e.g. `items.0` or `items.-1`")
    )]
    InvalidListIndex { segment: String },

    #[error(transparent)]
    #[diagnostic(code(whisker::lookup::access))]
    Access(#[from] AccessError),
}

/// A parsed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<'p> {
    /// Report emptiness instead of the value.
    pub inverted: bool,
    pub segments: Vec<&'p str>,
}

impl<'p> Query<'p> {
    pub fn parse(input: &'p str) -> Result<Self, PathError> {
        let input = input.trim();
        let (inverted, path) = match input.strip_prefix('^') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, input),
        };
        if path.is_empty() {
            return Err(PathError::Empty);
        }

        let segments = path.split('.').collect::<Vec<_>>();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(PathError::EmptySegment {
                path: path.to_string(),
            });
        }
        Ok(Query { inverted, segments })
    }
}

/// Where a walk ended.
#[derive(Debug)]
pub struct Walk<'a> {
    /// The resolved value; `None` when some segment was not found.
    pub found: Option<Resolved<'a>>,
    /// The innermost scope the last segment was looked up in.
    pub scope: &'a ContextResolver<'a>,
}

impl Walk<'_> {
    /// Whether an inverted section would render; absent counts as empty.
    pub fn is_empty(&self) -> bool {
        self.found.as_ref().is_none_or(Resolved::is_falsy)
    }
}

/// Follow `query` from `root`.
///
/// Primitives reached midway are given a scope of their own, so members such
/// as `name.upcase` resolve against the string.
pub fn walk<'a>(root: &'a ContextResolver<'a>, query: &Query<'_>) -> Result<Walk<'a>, PathError> {
    let mut scope = root;
    let mut current = Resolved::Scope(root);

    for segment in &query.segments {
        let next = match current {
            Resolved::Scope(inner) => {
                scope = inner;
                lookup_present(scope, segment)?
            }
            Resolved::Value(value) => {
                scope = scope.child(value);
                lookup_present(scope, segment)?
            }
            Resolved::List(items) => Some(list_element(items, segment)?),
        };
        match next {
            Some(found) => current = found,
            None => return Ok(Walk { found: None, scope }),
        }
    }

    Ok(Walk {
        found: Some(current),
        scope,
    })
}

/// Look up `name`, treating the null a value yields for a key it lacks as
/// absent.
fn lookup_present<'a>(
    scope: &'a ContextResolver<'a>,
    name: &str,
) -> Result<Option<Resolved<'a>>, PathError> {
    let found = scope.lookup(name)?;
    if matches!(found, Some(Resolved::Value(Value::Null))) && lacks_key(scope, name) {
        return Ok(None);
    }
    Ok(found)
}

/// Whether the scopes that could have answered `name` all report it missing.
fn lacks_key<'a>(scope: &'a ContextResolver<'a>, name: &str) -> bool {
    let reports_missing = |s: &ContextResolver<'_>| {
        s.value()
            .as_indexed()
            .is_some_and(|indexed| indexed.contains_key(name) == Some(false))
    };
    match scope.options().missing_key {
        MissingKey::Yield => reports_missing(scope),
        MissingKey::FallThrough => scope.ancestors().all(|s| match s.value().as_indexed() {
            Some(_) => reports_missing(s),
            None => s.value().as_fields().is_none_or(|fields| fields.field(name).is_none()),
        }),
    }
}

fn list_element<'a>(items: &'a [Resolved<'a>], segment: &str) -> Result<Resolved<'a>, PathError> {
    let invalid = || PathError::InvalidListIndex {
        segment: segment.to_string(),
    };
    let index = segment.parse::<i64>().map_err(|_| invalid())?;
    let len = i64::try_from(items.len()).map_err(|_| invalid())?;
    let index = if index < 0 { len + index } else { index };
    let element = usize::try_from(index).ok().and_then(|i| items.get(i).copied());
    Ok(element.unwrap_or(Resolved::Value(Value::Null)))
}
