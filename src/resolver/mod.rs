//! Property store and bounded placeholder resolution.
//!
//! Build-property files commonly hold values that reference other keys with
//! a `${key}` shortcut, e.g.:
//!
//! ```properties
//! build.dir=build
//! dist.dir=${build.dir}/dist
//! report.file=${dist.dir}/coverage.xml
//! ```
//!
//! [`PropertyStore`] wraps the flat in-memory mapping (parsing the on-disk
//! properties format is the caller's concern) and
//! [`PropertyStore::resolve`] expands such references transitively. The
//! lookup discipline is deliberately permissive, matching build-property
//! semantics where an unset variable must not abort processing:
//!
//! - a missing key resolves to the empty string, never an error;
//! - expansion that has not converged after
//!   [`MAX_RESOLVE_PASSES`](crate::constants::MAX_RESOLVE_PASSES) passes
//!   (cyclic references) returns the partially resolved value as-is.
//!
//! # Replacement order
//!
//! Each pass snapshots ALL placeholder key names from the current value
//! first, then substitutes them one at a time: every substitution replaces
//! the first `${...}` occurrence found by re-scanning the mutated string
//! from the start, not the span originally matched. Values are spliced in
//! literally. Callers relying on exact output for values with repeated or
//! nested placeholders get stable, well-defined behavior from this ordering.
//!
//! # Example
//!
//! ```rust
//! use covkit::resolver::PropertyStore;
//!
//! let store: PropertyStore = [
//!     ("build.dir".to_string(), "build".to_string()),
//!     ("dist.dir".to_string(), "${build.dir}/dist".to_string()),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(store.resolve("dist.dir"), "build/dist");
//! assert_eq!(store.resolve("no.such.key"), "");
//! ```
//!
//! The store is read-only during resolution, so concurrent resolutions
//! against a shared store are safe; mutating while resolving requires
//! external synchronization (single-writer discipline).

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::constants::{MAX_RESOLVE_PASSES, PLACEHOLDER_PATTERN};
use crate::pattern;

/// Compiled `${key}` placeholder pattern, shared by all resolutions.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid"));

/// A flat key→value property mapping with permissive lookup.
///
/// Keys and values are arbitrary text. The store is typically built from a
/// parsed properties file or assembled programmatically; covkit only
/// consumes the in-memory mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyStore {
    properties: HashMap<String, String>,
}

impl PropertyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a property, returning the previous value if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }

    /// Returns the raw (unexpanded) value for `key`, or the empty string if
    /// the key is absent. Missing keys are never an error.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.properties.get(key).map_or("", String::as_str)
    }

    /// Returns `true` if the store holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Number of properties in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns the value for `key` with all `${ref}` placeholders expanded.
    ///
    /// Expansion is iterative and bounded: up to
    /// [`MAX_RESOLVE_PASSES`](crate::constants::MAX_RESOLVE_PASSES) passes,
    /// each extracting the placeholder names present in the current value
    /// and substituting them sequentially (first remaining occurrence,
    /// re-scanned from the start after every substitution). Referenced keys
    /// that are absent expand to the empty string.
    ///
    /// Values whose references form a cycle do not converge; once the bound
    /// is exhausted the partially resolved value is returned as-is, still
    /// containing placeholder text. This is not an error.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        let mut value = self.get(key).to_string();
        for _ in 0..MAX_RESOLVE_PASSES {
            if !pattern::is_match(&value, &PLACEHOLDER) {
                break;
            }
            // Snapshot the referenced names before touching the string; the
            // substitutions below mutate it.
            let refs = pattern::capture_groups(&value, &PLACEHOLDER, 3);
            for reference in refs {
                value = replace_first_placeholder(&value, self.get(&reference));
            }
        }
        value
    }
}

impl From<HashMap<String, String>> for PropertyStore {
    fn from(properties: HashMap<String, String>) -> Self {
        Self { properties }
    }
}

impl FromIterator<(String, String)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, String)> for PropertyStore {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.properties.extend(iter);
    }
}

/// Replaces the first `${...}` occurrence in `value` with `replacement`,
/// spliced in literally. Returns `value` unchanged if no placeholder
/// remains.
fn replace_first_placeholder(value: &str, replacement: &str) -> String {
    match PLACEHOLDER.find(value) {
        Some(found) => {
            let mut out = String::with_capacity(value.len() + replacement.len());
            out.push_str(&value[..found.start()]);
            out.push_str(replacement);
            out.push_str(&value[found.end()..]);
            out
        }
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(pairs: &[(&str, &str)]) -> PropertyStore {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_plain_value_unchanged() {
        let props = store(&[("name", "coverage")]);
        assert_eq!(props.resolve("name"), "coverage");
    }

    #[test]
    fn test_resolve_missing_key_is_empty() {
        let props = PropertyStore::new();
        assert_eq!(props.resolve("absent"), "");
    }

    #[test]
    fn test_resolve_single_reference() {
        let props = store(&[("build.dir", "build"), ("dist.dir", "${build.dir}/dist")]);
        assert_eq!(props.resolve("dist.dir"), "build/dist");
    }

    #[test]
    fn test_resolve_transitive_references() {
        let props = store(&[
            ("a", "${b}"),
            ("b", "${c}"),
            ("c", "leaf"),
        ]);
        assert_eq!(props.resolve("a"), "leaf");
    }

    #[test]
    fn test_resolve_missing_reference_degrades_to_empty() {
        let props = store(&[("v", "prefix-${k}-suffix")]);
        assert_eq!(props.resolve("v"), "prefix--suffix");
    }

    #[test]
    fn test_resolve_adjacent_references_with_literal_brace() {
        // The literal `}` contributed by c's value is not a delimiter.
        let props = store(&[("a", "${b}${c}"), ("b", "X"), ("c", "Y}")]);
        assert_eq!(props.resolve("a"), "XY}");
    }

    #[test]
    fn test_resolve_repeated_reference() {
        let props = store(&[("a", "${b}/${b}"), ("b", "x")]);
        assert_eq!(props.resolve("a"), "x/x");
    }

    #[test]
    fn test_resolve_cycle_terminates_with_partial_result() {
        let props = store(&[("a", "${b}"), ("b", "${a}")]);
        let resolved = props.resolve("a");
        // Bounded, no panic, and the unresolvable reference is still visible.
        assert!(resolved.contains("${"));
    }

    #[test]
    fn test_resolve_self_reference_terminates() {
        let props = store(&[("a", "x${a}")]);
        let resolved = props.resolve("a");
        assert!(resolved.starts_with('x'));
        assert!(resolved.contains("${a}"));
    }

    #[test]
    fn test_replacement_value_is_spliced_literally() {
        // `$` in a referenced value must not be reinterpreted.
        let props = store(&[("a", "${b}"), ("b", "cost: $5")]);
        assert_eq!(props.resolve("a"), "cost: $5");
    }

    #[test]
    fn test_get_returns_raw_value() {
        let props = store(&[("dist.dir", "${build.dir}/dist")]);
        assert_eq!(props.get("dist.dir"), "${build.dir}/dist");
        assert_eq!(props.get("absent"), "");
    }

    #[test]
    fn test_from_hashmap() {
        let mut map = HashMap::new();
        map.insert("k".to_string(), "v".to_string());
        let props = PropertyStore::from(map);
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("k"), "v");
    }

    #[test]
    fn test_insert_replaces() {
        let mut props = PropertyStore::new();
        assert!(props.insert("k", "v1").is_none());
        assert_eq!(props.insert("k", "v2"), Some("v1".to_string()));
        assert_eq!(props.get("k"), "v2");
    }
}
