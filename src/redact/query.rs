//! Structural parsing and redaction of query strings.
//!
//! [`QueryParameters`] is an ordered multiset of key-value pairs: duplicate
//! keys are kept, and insertion order is the original query-string order and
//! survives redaction and reserialization. Parsing never fails; segments that
//! cannot be interpreted are carried through verbatim.
//!
//! This module imposes only the `&` / first-`=` split. It performs no
//! percent-encoding or decoding of values; the single decoding concession is
//! a best-effort, lossy percent-decode of each *key* so that redactor
//! predicates match `pass%77ord` as well as `password`. Serialization always
//! writes the raw key back, so untouched parameters round-trip byte for byte.

use std::fmt;

use percent_encoding::percent_decode_str;

use super::keyed::KeyValueRedactor;

// =============================================================================
// QueryParameter
// =============================================================================

/// A single `key=value` (or bare `key`) segment of a query string.
///
/// A segment with no `=` is a key-only parameter: it has no value, redactors
/// are not invoked for it, and it serializes back without `=`. A segment
/// `key=` has the empty string as its value and serializes as `key=`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryParameter {
    /// The key exactly as it appeared; written back on serialization.
    raw_key: String,
    /// Best-effort percent-decoded key; what redactors and predicates see.
    key: String,
    /// Raw value, `None` for key-only segments.
    value: Option<String>,
}

impl QueryParameter {
    fn parse(segment: &str) -> Self {
        let (raw_key, value) = match segment.split_once('=') {
            Some((key, value)) => (key, Some(value.to_owned())),
            None => (segment, None),
        };
        Self {
            raw_key: raw_key.to_owned(),
            // Lossy by intent: an undecodable key still participates in
            // matching, on its raw text.
            key: percent_decode_str(raw_key).decode_utf8_lossy().into_owned(),
            value,
        }
    }

    /// The decoded key, as seen by redactor predicates.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw value, or `None` for a key-only parameter.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for QueryParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={value}", self.raw_key),
            None => f.write_str(&self.raw_key),
        }
    }
}

// =============================================================================
// QueryParameters
// =============================================================================

/// An ordered multiset of [`QueryParameter`] parsed from a raw query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParameters {
    parameters: Vec<QueryParameter>,
}

impl QueryParameters {
    /// Parses a raw query string (without the leading `?`).
    ///
    /// `None` and the empty string yield an empty set. Parsing never fails:
    /// every `&`-separated segment becomes a parameter, key-only when it has
    /// no `=`. Empty segments (as in `a=1&&b=2`) are kept as key-only
    /// parameters with an empty key so they reserialize verbatim.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        Self {
            parameters: raw.split('&').map(QueryParameter::parse).collect(),
        }
    }

    /// Returns `true` iff the set holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// The number of parameters, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Iterates over the parameters in their original order.
    pub fn iter(&self) -> impl Iterator<Item = &QueryParameter> {
        self.parameters.iter()
    }

    /// Returns a new set with every parameter value passed through
    /// `redactor` with its decoded key.
    ///
    /// Keys and order are preserved; the receiver is untouched. Repeated keys
    /// are each redacted independently. Key-only parameters have no value and
    /// pass through as-is.
    #[must_use]
    pub fn redact<K>(&self, redactor: &K) -> Self
    where
        K: KeyValueRedactor + ?Sized,
    {
        Self {
            parameters: self
                .parameters
                .iter()
                .map(|parameter| QueryParameter {
                    raw_key: parameter.raw_key.clone(),
                    key: parameter.key.clone(),
                    value: parameter
                        .value
                        .as_ref()
                        .map(|value| redactor.redact(&parameter.key, value)),
                })
                .collect(),
        }
    }
}

impl fmt::Display for QueryParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, parameter) in self.parameters.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }
            write!(f, "{parameter}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
