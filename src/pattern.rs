//! Regex match checking and capture-group extraction.
//!
//! These helpers back the property resolver's placeholder scanning, but they
//! work with any compiled [`Regex`], so they are also usable on their own
//! (e.g. for grepping generated build scripts for output locations).
//!
//! # Extraction order
//!
//! [`capture_groups`] flattens every capturing group of every
//! non-overlapping match into a single sequence: match order first, group
//! order (1..N) within each match. Group 0 (the whole match) is never
//! included.
//!
//! # Example
//!
//! ```rust
//! use covkit::pattern::{capture_groups, is_match};
//! use regex::Regex;
//!
//! let pattern = Regex::new(r"(\w+)=(\w+)").unwrap();
//! assert!(is_match("a=1 b=2", &pattern));
//!
//! let groups = capture_groups("a=1 b=2", &pattern, 4);
//! assert_eq!(groups, vec!["a", "1", "b", "2"]);
//! ```

use regex::Regex;

/// Returns `true` iff `pattern` matches anywhere in `text`.
#[must_use]
pub fn is_match(text: &str, pattern: &Regex) -> bool {
    pattern.is_match(text)
}

/// Extracts every capturing group of every non-overlapping match of
/// `pattern` in `text`.
///
/// Groups are appended in match order, then group order (1..N) within each
/// match. A group that did not participate in a match contributes an empty
/// string so group positions stay aligned across matches.
///
/// `expected` is a capacity hint only; the result length is whatever was
/// actually captured, including zero.
#[must_use]
pub fn capture_groups(text: &str, pattern: &Regex, expected: usize) -> Vec<String> {
    let mut groups = Vec::with_capacity(expected);
    for caps in pattern.captures_iter(text) {
        for index in 1..caps.len() {
            groups.push(
                caps.get(index)
                    .map_or_else(String::new, |m| m.as_str().to_string()),
            );
        }
    }
    groups
}
