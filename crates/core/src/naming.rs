//! Name syntax rule applied before any lookup by name.
//!
//! Element names start with an ASCII letter or digit and continue with
//! letters, digits or one of `_ - . : @ #`. Whitespace and other
//! punctuation are rejected.
//!
//! The rule is checked on the string being looked up, before the alias
//! fallback, so aliases (the `name` extended attribute) must follow it too.
//! An alias stored as `Main UPS` can never be resolved.

use std::sync::LazyLock;

use regex::Regex;

/// Longest accepted element name, in bytes.
pub const MAX_NAME_LENGTH: usize = 50;

const NAME_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9_.:@#-]*$";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("valid regex"));

/// Returns `true` when `name` is acceptable as an element name.
///
/// ```
/// use rackmap_core::naming::is_valid_name;
///
/// assert!(is_valid_name("UPS1"));
/// assert!(is_valid_name("rack-01.row_b"));
/// assert!(!is_valid_name("bad name!"));
/// assert!(!is_valid_name(""));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    name.len() <= MAX_NAME_LENGTH && NAME_RE.is_match(name)
}
