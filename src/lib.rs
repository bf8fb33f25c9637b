//! Redaction of sensitive values in captured HTTP traffic.
//!
//! This crate sits between an HTTP capture layer and whatever persists the
//! captured traffic for audit logging. It separates:
//! - **Redactors**: pure, composable string transformations, plain
//!   ([`ValueRedactor`]) or key-scoped ([`KeyValueRedactor`]).
//! - **Structural redaction**: query strings ([`QueryParameters`]) and full
//!   request targets ([`RequestTargetRedactor`]), resilient to malformed URIs.
//! - **The traffic facade**: [`TrafficRedactor`] produces redacted, read-only
//!   views over captured requests and responses.
//!
//! What this crate does:
//! - replaces header values, query-parameter values, and bodies with
//!   placeholders before they reach a log
//! - preserves every byte it was not asked to redact, including malformed
//!   percent-escapes outside the query component
//! - ships exactly one default policy (the `Authorization` header); everything
//!   else is supplied by the caller as composed redactors
//!
//! What it does not do:
//! - validate or normalize URIs
//! - perform I/O, capture traffic, or format log output
//! - resolve charsets or parse bodies (body redaction is a capability the
//!   caller plugs in via [`BodyRedactor`])
//!
//! Redaction is lossy, one-directional masking. It never fails: malformed
//! input degrades to leaving uninterpretable byte ranges untouched, not to an
//! error.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub mod http;
pub mod policy;
pub mod redact;

// Re-exports from the policy module
pub use policy::{KeepConfig, MASK_CHAR, MaskConfig, REDACTED_PLACEHOLDER, TextRedactionPolicy};
// Re-exports from the redact module
pub use redact::{
    Compound, ForAnyKey, ForKeys, ForPairs, KeyCompound, KeyPassthrough, KeyValueRedactor,
    Passthrough, QueryParameter, QueryParameters, Replacement, RequestTargetRedactor,
    ValueRedactor, authorization, replace_headers,
};
// Re-exports from the http module
pub use http::{
    BodyRedactor, Headers, HttpMessage, HttpRequest, HttpResponse, PassthroughBody,
    RedactedRequest, RedactedResponse, TrafficRedactor,
};
