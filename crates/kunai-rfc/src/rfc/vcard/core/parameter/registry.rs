//! Interning registry for parameter values.
//!
//! ## Summary
//! Maps raw parameter text to the one canonical value object of a category.
//! Well-known values are fixed when the registry is built; any other text is
//! minted into a custom value the first time it is looked up and reused from
//! then on, so callers can compare values by identity instead of by string.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::versioned::sealed::Sealed;
use super::versioned::{ParameterCategory, VersionedValue};

/// Process-wide store of the values of one parameter category.
///
/// Custom values are keyed by their ASCII-lowercased text. They are never
/// removed, so every handle returned by [`ParameterRegistry::get`] stays valid
/// for the life of the process.
pub struct ParameterRegistry<T: 'static> {
    well_known: &'static [T],
    custom: RwLock<HashMap<String, T>>,
}

impl<T: ParameterCategory> ParameterRegistry<T> {
    /// Creates a registry over a category's well-known values.
    #[must_use]
    pub fn new(well_known: &'static [T]) -> Self {
        Self {
            well_known,
            custom: RwLock::new(HashMap::new()),
        }
    }

    /// ## Summary
    /// Looks up `text` among the well-known values only.
    ///
    /// Matching is ASCII case-insensitive only: non-ASCII letters must match
    /// exactly, so `"ＨＯＭＥ"` is not `home`. Returns `None` for anything
    /// that is not predefined, including custom values already minted by
    /// `get`.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<T> {
        self.well_known
            .iter()
            .copied()
            .find(|candidate| candidate.as_value().matches(text))
    }

    /// ## Summary
    /// Returns the canonical value for `text`, minting a custom value if no
    /// known or previously minted value matches.
    ///
    /// Two calls whose texts differ only in ASCII case return the same
    /// object, from any thread. Non-ASCII case is not folded: `"Ärger"` and
    /// `"ärger"` mint two distinct values. A minted value keeps the spelling
    /// of the first call and supports every version.
    #[must_use]
    pub fn get(&self, text: &str) -> T {
        if let Some(known) = self.find(text) {
            return known;
        }

        let key = text.to_ascii_lowercase();
        if let Some(existing) = self.custom.read().get(&key) {
            return *existing;
        }

        // The entry lookup re-checks under the write lock, so a racing
        // writer that minted the same key first wins and is returned here.
        let mut custom = self.custom.write();
        *custom.entry(key).or_insert_with(|| {
            tracing::debug!(
                parameter = T::NAME,
                value = text,
                "Registering custom parameter value"
            );
            let value: &'static VersionedValue =
                Box::leak(Box::new(VersionedValue::custom(text)));
            <T as Sealed>::from_value(value)
        })
    }

    /// Returns the well-known values. Custom values are never included.
    #[must_use]
    pub fn all(&self) -> &'static [T] {
        self.well_known
    }

    /// Returns how many custom values have been minted so far.
    #[must_use]
    pub fn custom_count(&self) -> usize {
        self.custom.read().len()
    }
}

impl<T: ParameterCategory> std::fmt::Debug for ParameterRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterRegistry")
            .field("category", &T::NAME)
            .field("well_known", &self.well_known.len())
            .field("custom", &self.custom_count())
            .finish()
    }
}
