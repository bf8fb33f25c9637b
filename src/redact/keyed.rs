//! Key-scoped value redaction.
//!
//! A [`KeyValueRedactor`] redacts the value of a key-value pair, given its
//! key. It is used for maps with string keys: header multimaps and query
//! parameters. Most instances are derived from a [`ValueRedactor`] via the
//! `for_*` adapters; this module adds the identity, composition, and the one
//! preset policy the crate ships.

use super::value::{Replacement, ValueRedactor};

// =============================================================================
// KeyValueRedactor - the core contract
// =============================================================================

/// Redacts the value of a key-value pair.
///
/// Implementations must be total: every `(key, value)` pair produces an
/// output string, never an error. The key itself is never rewritten; only
/// values are redacted.
///
/// Any `Fn(&str, &str) -> String` closure is a `KeyValueRedactor`.
pub trait KeyValueRedactor {
    /// Returns the redacted value for the given key-value pair.
    #[must_use]
    fn redact(&self, key: &str, value: &str) -> String;
}

impl<F> KeyValueRedactor for F
where
    F: Fn(&str, &str) -> String,
{
    fn redact(&self, key: &str, value: &str) -> String {
        self(key, value)
    }
}

// =============================================================================
// Identity and composition
// =============================================================================

/// The identity key-scoped redactor: returns the value unchanged.
///
/// This is the unit of [`KeyCompound`] composition.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyPassthrough;

impl KeyValueRedactor for KeyPassthrough {
    fn redact(&self, _key: &str, value: &str) -> String {
        value.to_owned()
    }
}

/// An ordered sequence of key-scoped redactors applied left to right.
///
/// Every layer receives the same, unchanged key together with the value
/// accumulated so far, so a value is redacted the moment any layer in the
/// chain matches its key. The empty sequence behaves like [`KeyPassthrough`].
pub struct KeyCompound {
    layers: Vec<Box<dyn KeyValueRedactor + Send + Sync>>,
}

impl KeyCompound {
    /// Creates a compound redactor from an ordered list of layers.
    #[must_use]
    pub fn new(layers: Vec<Box<dyn KeyValueRedactor + Send + Sync>>) -> Self {
        Self { layers }
    }
}

impl KeyValueRedactor for KeyCompound {
    fn redact(&self, key: &str, value: &str) -> String {
        self.layers
            .iter()
            .fold(value.to_owned(), |accumulated, layer| {
                layer.redact(key, &accumulated)
            })
    }
}

// =============================================================================
// Presets
// =============================================================================

/// The one policy this crate ships: masks the `Authorization` header value
/// (ASCII case-insensitive key match) with the fixed placeholder `XXX`.
///
/// ```
/// use httpmask::{KeyValueRedactor, authorization};
///
/// let unit = authorization();
/// assert_eq!(unit.redact("Authorization", "Bearer s3cr3t"), "XXX");
/// assert_eq!(unit.redact("Accept", "application/json"), "application/json");
/// ```
#[must_use]
pub fn authorization() -> impl KeyValueRedactor + Send + Sync {
    Replacement::new("XXX").for_keys(|key: &str| key.eq_ignore_ascii_case("Authorization"))
}

/// Masks every value whose key matches any of `names`, ASCII
/// case-insensitively, with the fixed `replacement`.
///
/// A convenience for the common deny-list of header or parameter names.
#[must_use]
pub fn replace_headers<I, S>(names: I, replacement: &'static str) -> impl KeyValueRedactor + Send + Sync
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    Replacement::new(replacement)
        .for_keys(move |key: &str| names.iter().any(|name| name.eq_ignore_ascii_case(key)))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::{KeyCompound, KeyPassthrough, KeyValueRedactor, authorization, replace_headers};
    use crate::redact::value::{Replacement, ValueRedactor};

    #[test]
    fn passthrough_returns_value_unchanged() {
        assert_eq!(KeyPassthrough.redact("key", "value"), "value");
    }

    #[test]
    fn compound_applies_layers_in_order_with_constant_key() {
        let unit = KeyCompound::new(vec![
            Box::new(|key: &str, value: &str| format!("{key}:{value}")),
            Box::new(|key: &str, value: &str| format!("{key}/{value}")),
        ]);
        assert_eq!(unit.redact("k", "v"), "k/k:v");
    }

    #[test]
    fn compound_redacts_when_any_layer_matches() {
        // The first layer does not match, the second does; the value is still
        // redacted because each layer receives the key unchanged.
        let unit = KeyCompound::new(vec![
            Box::new(Replacement::new("a").for_keys(|key: &str| key == "other")),
            Box::new(Replacement::new("b").for_keys(|key: &str| key == "password")),
        ]);
        assert_eq!(unit.redact("password", "s3cr3t"), "b");
        assert_eq!(unit.redact("limit", "1"), "1");
    }

    #[test]
    fn empty_compound_is_identity() {
        let unit = KeyCompound::new(Vec::new());
        assert_eq!(unit.redact("key", "value"), "value");
    }

    #[test]
    fn authorization_matches_case_insensitively() {
        let unit = authorization();
        assert_eq!(unit.redact("Authorization", "Basic dXNlcjpwYXNz"), "XXX");
        assert_eq!(unit.redact("authorization", "Bearer abc"), "XXX");
        assert_eq!(unit.redact("AUTHORIZATION", "Bearer abc"), "XXX");
        assert_eq!(unit.redact("Content-Type", "text/plain"), "text/plain");
    }

    #[test]
    fn replace_headers_masks_listed_names() {
        let unit = replace_headers(["Cookie", "Set-Cookie"], "<hidden>");
        assert_eq!(unit.redact("cookie", "session=abc"), "<hidden>");
        assert_eq!(unit.redact("SET-COOKIE", "session=abc"), "<hidden>");
        assert_eq!(unit.redact("Accept", "*/*"), "*/*");
    }
}
