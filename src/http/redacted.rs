//! The traffic redaction facade and its decorator views.

use std::io;

use super::body::{BodyRedactor, PassthroughBody};
use super::{Headers, HttpMessage, HttpRequest, HttpResponse};
use crate::redact::{KeyValueRedactor, Passthrough, ValueRedactor, authorization};

/// Composes header, request-target, and body redaction into a single
/// transformation over captured traffic.
///
/// The facade owns its redactors and hands out borrowed, read-only views;
/// one facade serves any number of concurrent captures because redaction is
/// pure and stateless.
///
/// ```
/// use httpmask::{Replacement, RequestTargetRedactor, TrafficRedactor, ValueRedactor};
///
/// let redactor = TrafficRedactor::new(
///     httpmask::authorization(),
///     RequestTargetRedactor::new(
///         Replacement::new("unknown").for_keys(|key: &str| key == "password"),
///     ),
///     httpmask::PassthroughBody,
/// );
/// # let _ = redactor;
/// ```
pub struct TrafficRedactor {
    headers: Box<dyn KeyValueRedactor + Send + Sync>,
    request_target: Box<dyn ValueRedactor + Send + Sync>,
    body: Box<dyn BodyRedactor + Send + Sync>,
}

impl TrafficRedactor {
    /// Creates a facade from the three redaction concerns.
    #[must_use]
    pub fn new<H, T, B>(headers: H, request_target: T, body: B) -> Self
    where
        H: KeyValueRedactor + Send + Sync + 'static,
        T: ValueRedactor + Send + Sync + 'static,
        B: BodyRedactor + Send + Sync + 'static,
    {
        Self {
            headers: Box::new(headers),
            request_target: Box::new(request_target),
            body: Box::new(body),
        }
    }

    /// Returns a redacted, read-only view over `request`.
    ///
    /// The view borrows the request; every accessor recomputes its redacted
    /// projection from the current state of the underlying view.
    #[must_use]
    pub fn redact_request<'a, R>(&'a self, request: &'a R) -> RedactedRequest<'a, R>
    where
        R: HttpRequest + ?Sized,
    {
        RedactedRequest {
            request,
            redactors: self,
        }
    }

    /// Returns a redacted, read-only view over `response`.
    ///
    /// Responses have no request target; only headers and body are redacted.
    #[must_use]
    pub fn redact_response<'a, R>(&'a self, response: &'a R) -> RedactedResponse<'a, R>
    where
        R: HttpResponse + ?Sized,
    {
        RedactedResponse {
            response,
            redactors: self,
        }
    }

    fn redact_headers(&self, headers: Headers) -> Headers {
        headers
            .into_iter()
            .map(|(key, values)| {
                let values = values
                    .iter()
                    .map(|value| self.headers.redact(&key, value))
                    .collect();
                (key, values)
            })
            .collect()
    }
}

/// The default facade masks the `Authorization` header and touches nothing
/// else; request targets and bodies pass through unchanged.
impl Default for TrafficRedactor {
    fn default() -> Self {
        Self::new(authorization(), Passthrough, PassthroughBody)
    }
}

// =============================================================================
// Decorator views
// =============================================================================

/// A read-only, redacted view over a captured request.
///
/// Created by [`TrafficRedactor::redact_request`]. The original view is
/// borrowed and never mutated.
pub struct RedactedRequest<'a, R: ?Sized> {
    request: &'a R,
    redactors: &'a TrafficRedactor,
}

impl<R> HttpMessage for RedactedRequest<'_, R>
where
    R: HttpRequest + ?Sized,
{
    fn headers(&self) -> Headers {
        self.redactors.redact_headers(self.request.headers())
    }

    fn content_type(&self) -> Option<String> {
        self.request.content_type()
    }

    fn body(&self) -> io::Result<Vec<u8>> {
        Ok(self.body_as_string()?.into_bytes())
    }

    fn body_as_string(&self) -> io::Result<String> {
        let body = self.request.body_as_string()?;
        Ok(self
            .redactors
            .body
            .redact(self.request.content_type().as_deref(), &body))
    }
}

impl<R> HttpRequest for RedactedRequest<'_, R>
where
    R: HttpRequest + ?Sized,
{
    fn remote(&self) -> String {
        self.request.remote()
    }

    fn method(&self) -> String {
        self.request.method()
    }

    fn request_target(&self) -> String {
        self.redactors
            .request_target
            .redact(&self.request.request_target())
    }
}

/// A read-only, redacted view over a captured response.
///
/// Created by [`TrafficRedactor::redact_response`]. The original view is
/// borrowed and never mutated.
pub struct RedactedResponse<'a, R: ?Sized> {
    response: &'a R,
    redactors: &'a TrafficRedactor,
}

impl<R> HttpMessage for RedactedResponse<'_, R>
where
    R: HttpResponse + ?Sized,
{
    fn headers(&self) -> Headers {
        self.redactors.redact_headers(self.response.headers())
    }

    fn content_type(&self) -> Option<String> {
        self.response.content_type()
    }

    fn body(&self) -> io::Result<Vec<u8>> {
        Ok(self.body_as_string()?.into_bytes())
    }

    fn body_as_string(&self) -> io::Result<String> {
        let body = self.response.body_as_string()?;
        Ok(self
            .redactors
            .body
            .redact(self.response.content_type().as_deref(), &body))
    }
}

impl<R> HttpResponse for RedactedResponse<'_, R>
where
    R: HttpResponse + ?Sized,
{
    fn status(&self) -> u16 {
        self.response.status()
    }
}
