//! Sorted `(name, item)` slices shared by mappings and records.

use crate::{ToString, Vec, errors::BuildError};
use bumpalo::Bump;

/// Sort `entries` by name, reject duplicates, and move them into the arena.
pub(crate) fn alloc_sorted<'a, T: Copy>(
    arena: &'a Bump,
    mut entries: Vec<(&'a str, T)>,
) -> Result<&'a [(&'a str, T)], BuildError> {
    entries.sort_unstable_by_key(|(name, _)| *name);

    for window in entries.windows(2) {
        if window[0].0 == window[1].0 {
            return Err(BuildError::DuplicateKey(window[0].0.to_string()));
        }
    }

    Ok(arena.alloc_slice_copy(&entries))
}

/// Binary search for `name` in a slice sorted by [`alloc_sorted`].
pub(crate) fn find<'s, T>(entries: &'s [(&str, T)], name: &str) -> Option<&'s T> {
    entries
        .binary_search_by_key(&name, |(n, _)| *n)
        .ok()
        .map(|idx| &entries[idx].1)
}

/// Check if a slice is sorted by name (for debug assertions).
pub(crate) fn is_sorted<T>(slice: &[(&str, T)]) -> bool {
    slice.windows(2).all(|w| w[0].0 < w[1].0)
}
