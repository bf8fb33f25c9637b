//! The body redaction capability.
//!
//! Concrete body policies (which media types to rewrite, and how) are
//! supplied by the caller; this crate only defines the seam and the identity
//! implementation.

/// Redacts a message body, given its declared content type.
///
/// Implementations must be total over the strings they are given; failures
/// reading or decoding the body happen before this capability is invoked.
///
/// Any `Fn(Option<&str>, &str) -> String` closure is a `BodyRedactor`:
///
/// ```
/// use httpmask::BodyRedactor;
///
/// let json_only = |content_type: Option<&str>, body: &str| {
///     if content_type == Some("application/json") {
///         "{\"redacted\":true}".to_owned()
///     } else {
///         body.to_owned()
///     }
/// };
/// assert_eq!(
///     json_only.redact(Some("application/json"), "{\"password\":\"s3cr3t\"}"),
///     "{\"redacted\":true}"
/// );
/// assert_eq!(json_only.redact(Some("text/plain"), "hello"), "hello");
/// ```
pub trait BodyRedactor {
    /// Returns the redacted body for the given content type and raw body.
    #[must_use]
    fn redact(&self, content_type: Option<&str>, body: &str) -> String;
}

impl<F> BodyRedactor for F
where
    F: Fn(Option<&str>, &str) -> String,
{
    fn redact(&self, content_type: Option<&str>, body: &str) -> String {
        self(content_type, body)
    }
}

/// The identity body redactor: returns the body unchanged for every content
/// type.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughBody;

impl BodyRedactor for PassthroughBody {
    fn redact(&self, _content_type: Option<&str>, body: &str) -> String {
        body.to_owned()
    }
}
