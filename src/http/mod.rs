//! Capture-view seams and the traffic redaction facade.
//!
//! The capture layer that produces HTTP traffic is an external collaborator;
//! this module only defines the traits it is expected to implement
//! ([`HttpRequest`], [`HttpResponse`]) and the machinery that decorates such
//! views with redaction ([`TrafficRedactor`], [`RedactedRequest`],
//! [`RedactedResponse`]).
//!
//! Redacted views are cheap decorators: they borrow the original view, never
//! mutate it, and recompute redacted projections lazily on every accessor
//! call. Accessors not subject to redaction (method, remote, status,
//! content type) forward unchanged.

mod body;
mod redacted;

use std::collections::BTreeMap;
use std::io;

pub use body::{BodyRedactor, PassthroughBody};
pub use redacted::{RedactedRequest, RedactedResponse, TrafficRedactor};

/// Header multimap: key to ordered list of values.
pub type Headers = BTreeMap<String, Vec<String>>;

/// Common surface of captured requests and responses.
///
/// Body accessors may fail when the underlying capture cannot be read; such
/// failures are owned by the capture layer and propagate through redacted
/// views unchanged.
pub trait HttpMessage {
    /// The message headers.
    fn headers(&self) -> Headers;

    /// The declared content type, if any.
    fn content_type(&self) -> Option<String>;

    /// The raw body bytes.
    fn body(&self) -> io::Result<Vec<u8>>;

    /// The body decoded as a string.
    fn body_as_string(&self) -> io::Result<String>;
}

/// A captured HTTP request.
pub trait HttpRequest: HttpMessage {
    /// The remote address the request came from.
    fn remote(&self) -> String;

    /// The request method.
    fn method(&self) -> String;

    /// The request target: path with optional query and fragment, or an
    /// absolute URI. May be malformed; redaction tolerates that.
    fn request_target(&self) -> String;
}

/// A captured HTTP response.
pub trait HttpResponse: HttpMessage {
    /// The response status code.
    fn status(&self) -> u16;
}
