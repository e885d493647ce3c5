//! Configuration options for context resolution.

/// What indexed access does when the key is missing.
///
/// # Example
///
/// ```
/// use whisker_core::{MissingKey, ResolverOptions};
///
/// let options = ResolverOptions {
///     missing_key: MissingKey::FallThrough,
/// };
/// assert_ne!(options.missing_key, ResolverOptions::default().missing_key);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingKey {
    /// Return whatever the value yields for a missing key (usually null) and
    /// stop there. Stored fields and enclosing scopes are not consulted.
    Yield,

    /// When the value reports that it does not contain the key, continue with
    /// stored fields and then the enclosing scope.
    ///
    /// Values that cannot tell whether a key is present behave as `Yield`.
    FallThrough,
}

/// Configuration options for a resolver tree.
///
/// Set on the root resolver and inherited by every child scope.
#[derive(Debug, Clone, Copy)]
pub struct ResolverOptions {
    /// Behaviour of indexed access for missing keys.
    ///
    /// Default: `MissingKey::Yield`
    pub missing_key: MissingKey,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            missing_key: MissingKey::Yield,
        }
    }
}
