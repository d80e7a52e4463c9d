//! Key normalization for Adyen response payloads.
//!
//! Adyen answers with camelCased keys (`pspReference`, `resultCode`) and the
//! occasional namespaced or hyphenated one. Every key is rewritten into a
//! lowercase, underscore-delimited form so callers can rely on a single
//! spelling (`psp_reference`, `result_code`).

use std::sync::LazyLock;

use regex::Regex;

/// An uppercase run followed by an uppercase-then-lowercase pair (`HTTPServer`)
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("acronym boundary regex"));

/// A lowercase letter or digit followed by an uppercase letter (`fooBar`)
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("camel boundary regex"));

/// Normalize a raw response key into its snake_cased form
///
/// Namespace separators (`::`) become `/`, word boundaries become `_`,
/// hyphens become `_` and the result is lowercased. Never fails.
///
/// # Example
/// ```
/// use adyen_types::normalize_key;
///
/// assert_eq!(normalize_key("pspReference"), "psp_reference");
/// assert_eq!(normalize_key("Foo::Bar"), "foo/bar");
/// ```
pub fn normalize_key(raw: &str) -> String {
    let namespaced = raw.replace("::", "/");
    let split_acronyms = ACRONYM_BOUNDARY.replace_all(&namespaced, "${1}_${2}");
    let split_words = CAMEL_BOUNDARY.replace_all(&split_acronyms, "${1}_${2}");
    split_words.replace('-', "_").to_lowercase()
}
