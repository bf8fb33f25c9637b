//! Plain value redaction.
//!
//! A [`ValueRedactor`] is a total, pure `&str -> String` transformation.
//! Redactors are built from a handful of primitives ([`Passthrough`],
//! [`Replacement`], [`Compound`]) or from plain closures, and are lifted into
//! key-scoped redactors through the `for_*` adapters.

use std::borrow::Cow;

use super::keyed::KeyValueRedactor;

// =============================================================================
// ValueRedactor - the core contract
// =============================================================================

/// Redacts a single string value, independent of any surrounding context.
///
/// Implementations must be total: every input string, the empty string
/// included, produces an output string. Redaction is one-directional masking,
/// never an error.
///
/// Any `Fn(&str) -> String` closure is a `ValueRedactor`:
///
/// ```
/// use httpmask::ValueRedactor;
///
/// let shout = |value: &str| value.to_uppercase();
/// assert_eq!(shout.redact("hush"), "HUSH");
/// ```
pub trait ValueRedactor {
    /// Returns the redacted representation of `value`.
    #[must_use]
    fn redact(&self, value: &str) -> String;

    /// Lifts this redactor into a [`KeyValueRedactor`] that ignores the key.
    #[must_use]
    fn for_any_key(self) -> ForAnyKey<Self>
    where
        Self: Sized,
    {
        ForAnyKey(self)
    }

    /// Lifts this redactor into a [`KeyValueRedactor`] that only redacts
    /// values whose key satisfies `predicate`; other values pass through
    /// unchanged.
    #[must_use]
    fn for_keys<P>(self, predicate: P) -> ForKeys<Self, P>
    where
        Self: Sized,
        P: Fn(&str) -> bool,
    {
        ForKeys {
            redactor: self,
            predicate,
        }
    }

    /// Lifts this redactor into a [`KeyValueRedactor`] that only redacts
    /// key-value pairs satisfying `predicate`; other values pass through
    /// unchanged.
    #[must_use]
    fn for_pairs<P>(self, predicate: P) -> ForPairs<Self, P>
    where
        Self: Sized,
        P: Fn(&str, &str) -> bool,
    {
        ForPairs {
            redactor: self,
            predicate,
        }
    }
}

impl<F> ValueRedactor for F
where
    F: Fn(&str) -> String,
{
    fn redact(&self, value: &str) -> String {
        self(value)
    }
}

// =============================================================================
// Primitive redactors
// =============================================================================

/// The identity redactor: returns its input unchanged.
///
/// This is the unit of [`Compound`] composition.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passthrough;

impl ValueRedactor for Passthrough {
    fn redact(&self, value: &str) -> String {
        value.to_owned()
    }
}

/// Replaces every value with a fixed placeholder, ignoring the input.
///
/// Replacement redactors are fixed points: redacting an already-redacted
/// value yields the same output.
// Use `Cow` so callers can provide borrowed or owned placeholders.
#[derive(Clone, Debug)]
pub struct Replacement {
    text: Cow<'static, str>,
}

impl Replacement {
    /// Creates a redactor that always returns `text`.
    #[must_use]
    pub fn new<T>(text: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self { text: text.into() }
    }
}

impl ValueRedactor for Replacement {
    fn redact(&self, _value: &str) -> String {
        self.text.clone().into_owned()
    }
}

/// An ordered sequence of redactors applied left to right.
///
/// Each layer consumes the previous layer's output, so for layers `[r1, r2]`
/// the effective function is `v -> r2(r1(v))`. The empty sequence behaves
/// like [`Passthrough`].
///
/// ```
/// use httpmask::{Compound, ValueRedactor};
///
/// let unit = Compound::new(vec![
///     Box::new(|v: &str| format!("1 {v}")),
///     Box::new(|v: &str| format!("2 {v}")),
/// ]);
/// assert_eq!(unit.redact("0"), "2 1 0");
/// ```
pub struct Compound {
    layers: Vec<Box<dyn ValueRedactor + Send + Sync>>,
}

impl Compound {
    /// Creates a compound redactor from an ordered list of layers.
    #[must_use]
    pub fn new(layers: Vec<Box<dyn ValueRedactor + Send + Sync>>) -> Self {
        Self { layers }
    }
}

impl ValueRedactor for Compound {
    fn redact(&self, value: &str) -> String {
        self.layers
            .iter()
            .fold(value.to_owned(), |accumulated, layer| {
                layer.redact(&accumulated)
            })
    }
}

// =============================================================================
// Key-scoped adapters
// =============================================================================

/// Applies the wrapped [`ValueRedactor`] to the values of any key-value pair.
///
/// Built via [`ValueRedactor::for_any_key`].
#[derive(Clone, Copy, Debug)]
pub struct ForAnyKey<R>(R);

impl<R> KeyValueRedactor for ForAnyKey<R>
where
    R: ValueRedactor,
{
    fn redact(&self, _key: &str, value: &str) -> String {
        self.0.redact(value)
    }
}

/// Applies the wrapped [`ValueRedactor`] only when the key matches.
///
/// Built via [`ValueRedactor::for_keys`].
#[derive(Clone, Copy, Debug)]
pub struct ForKeys<R, P> {
    redactor: R,
    predicate: P,
}

impl<R, P> KeyValueRedactor for ForKeys<R, P>
where
    R: ValueRedactor,
    P: Fn(&str) -> bool,
{
    fn redact(&self, key: &str, value: &str) -> String {
        if (self.predicate)(key) {
            self.redactor.redact(value)
        } else {
            value.to_owned()
        }
    }
}

/// Applies the wrapped [`ValueRedactor`] only when the key-value pair matches.
///
/// Built via [`ValueRedactor::for_pairs`].
#[derive(Clone, Copy, Debug)]
pub struct ForPairs<R, P> {
    redactor: R,
    predicate: P,
}

impl<R, P> KeyValueRedactor for ForPairs<R, P>
where
    R: ValueRedactor,
    P: Fn(&str, &str) -> bool,
{
    fn redact(&self, key: &str, value: &str) -> String {
        if (self.predicate)(key, value) {
            self.redactor.redact(value)
        } else {
            value.to_owned()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::{Compound, Passthrough, Replacement, ValueRedactor};
    use crate::redact::keyed::KeyValueRedactor;

    #[test]
    fn passthrough_returns_input_unchanged() {
        assert_eq!(Passthrough.redact("value"), "value");
        assert_eq!(Passthrough.redact(""), "");
    }

    #[test]
    fn replacement_ignores_input() {
        let unit = Replacement::new("XXX");
        assert_eq!(unit.redact("s3cr3t"), "XXX");
        assert_eq!(unit.redact(""), "XXX");
    }

    #[test]
    fn replacement_is_a_fixed_point() {
        let unit = Replacement::new("XXX");
        assert_eq!(unit.redact(&unit.redact("s3cr3t")), "XXX");
    }

    #[test]
    fn compound_applies_layers_in_order() {
        let unit = Compound::new(vec![
            Box::new(|v: &str| format!("1 {v}")),
            Box::new(|v: &str| format!("2 {v}")),
        ]);
        assert_eq!(unit.redact("0"), "2 1 0");
    }

    #[test]
    fn empty_compound_is_identity() {
        let unit = Compound::new(Vec::new());
        assert_eq!(unit.redact("value"), "value");
    }

    #[test]
    fn for_any_key_ignores_the_key() {
        let unit = Replacement::new("foo").for_any_key();
        assert_eq!(unit.redact("press", "any key"), "foo");
    }

    #[test]
    fn for_keys_passes_non_matching_values_through() {
        let unit = Replacement::new("XXX").for_keys(|key| key == "password");
        assert_eq!(unit.redact("password", "s3cr3t"), "XXX");
        assert_eq!(unit.redact("limit", "1"), "1");
    }

    #[test]
    fn for_pairs_sees_key_and_value() {
        let unit =
            Replacement::new("XXX").for_pairs(|key, value| key == "token" && value.len() > 3);
        assert_eq!(unit.redact("token", "abcdef"), "XXX");
        assert_eq!(unit.redact("token", "abc"), "abc");
        assert_eq!(unit.redact("other", "abcdef"), "abcdef");
    }

    #[test]
    fn closures_are_redactors() {
        let unit = |value: &str| value.to_uppercase();
        assert_eq!(unit.redact("quiet"), "QUIET");
    }
}
