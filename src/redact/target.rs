//! Redaction of request-target strings.
//!
//! A request target is the resource identifier of an HTTP request line: a
//! path with an optional `?`-query and `#`-fragment, or a full absolute URI.
//! Real traffic contains targets that are not RFC-compliant (stray `%`,
//! broken escapes), and redaction must never crash or drop a capture because
//! of them. This module therefore runs two paths behind one contract:
//!
//! 1. **Strict**: parse the target as a structured URL and rebuild it with a
//!    redacted query, canonically serialized.
//! 2. **Lenient**: when structured parsing fails, slice the raw string on the
//!    first `?` and `#` and redact only the bytes strictly between them,
//!    leaving everything else byte-identical.
//!
//! Callers never observe which path ran. When no parameter value changes,
//! both paths return the input unchanged, so a non-matching policy is
//! byte-preserving on any input.

use tracing::trace;
use url::Url;

use super::keyed::KeyValueRedactor;
use super::query::QueryParameters;
use super::value::ValueRedactor;

/// Redacts the query parameters embedded in a request-target string.
///
/// Implements [`ValueRedactor`], so it slots into compounds and the traffic
/// facade like any other redactor. Total: every input string produces an
/// output string.
///
/// ```
/// use httpmask::{Replacement, RequestTargetRedactor, ValueRedactor};
///
/// let unit = RequestTargetRedactor::new(
///     Replacement::new("unknown").for_keys(|key: &str| key.eq_ignore_ascii_case("password")),
/// );
/// assert_eq!(
///     unit.redact("http://localhost/?password=s3cr3t&limit=1"),
///     "http://localhost/?password=unknown&limit=1"
/// );
/// ```
pub struct RequestTargetRedactor<K> {
    parameters: K,
}

impl<K> RequestTargetRedactor<K>
where
    K: KeyValueRedactor,
{
    /// Creates a request-target redactor applying `parameters` to every
    /// query parameter.
    #[must_use]
    pub fn new(parameters: K) -> Self {
        Self { parameters }
    }

    fn redact_url(&self, target: &str, url: &Url) -> String {
        let parsed = QueryParameters::parse(url.query());

        if parsed.is_empty() {
            return target.to_owned();
        }

        let redacted = parsed.redact(&self.parameters);

        // Nothing matched; keep the original bytes rather than the
        // reserialized form.
        if redacted == parsed {
            return target.to_owned();
        }

        let mut url = url.clone();
        url.set_query(Some(&redacted.to_string()));
        url.to_string()
    }

    fn redact_lenient(&self, target: &str) -> String {
        let Some(start_of_query) = target.find('?') else {
            return target.to_owned();
        };

        let start_of_fragment = target[start_of_query..]
            .find('#')
            .map(|offset| start_of_query + offset);

        let query = match start_of_fragment {
            Some(start_of_fragment) => &target[start_of_query + 1..start_of_fragment],
            None => &target[start_of_query + 1..],
        };

        let parsed = QueryParameters::parse(Some(query));

        if parsed.is_empty() {
            return target.to_owned();
        }

        let redacted = parsed.redact(&self.parameters);

        if redacted == parsed {
            return target.to_owned();
        }

        match start_of_fragment {
            Some(start_of_fragment) => format!(
                "{}{redacted}{}",
                &target[..=start_of_query],
                &target[start_of_fragment..]
            ),
            None => format!("{}{redacted}", &target[..=start_of_query]),
        }
    }
}

impl<K> ValueRedactor for RequestTargetRedactor<K>
where
    K: KeyValueRedactor,
{
    fn redact(&self, target: &str) -> String {
        match Url::parse(target) {
            Ok(url) => self.redact_url(target, &url),
            Err(error) => {
                // Relative targets and malformed URIs end up here; the target
                // itself is sensitive and is not logged.
                trace!(%error, "request target is not an absolute URL, using lenient query redaction");
                self.redact_lenient(target)
            }
        }
    }
}
