//! Public error type for the Whisker API.
//!
//! Errors from the core crate are converted to [`Error`] at the facade
//! boundary. Every variant carries a diagnostic code so tools built on
//! `miette` can render them with help text.

use miette::Diagnostic;
use thiserror::Error;
use whisker_core::{AccessError, BuildError};

/// Public error type for all Whisker operations.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The context document is not valid JSON.
    #[error("invalid context JSON: {0}")]
    #[diagnostic(
        code(whisker::context::json),
        help("the context must be a single JSON document, usually an object")
    )]
    Json(#[from] serde_json::Error),

    /// The context could not be turned into host values.
    #[error(transparent)]
    #[diagnostic(code(whisker::context::build))]
    Build(#[from] BuildError),

    /// A host value failed while answering a lookup.
    #[error(transparent)]
    #[diagnostic(code(whisker::lookup::access))]
    Access(#[from] AccessError),

    /// No scope in the chain knows the name.
    #[error("'{name}' is not defined in any scope")]
    #[diagnostic(
        code(whisker::lookup::not_found),
        help("searched {depth} enclosing scope(s) and the innermost one")
    )]
    NotFound { name: String, depth: usize },
}
