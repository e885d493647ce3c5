pub mod context;
pub mod resolved;

pub use context::{Ancestors, ContextResolver};
pub use resolved::Resolved;

#[cfg(test)]
mod wrap_test;
