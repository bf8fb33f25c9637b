//! Reusable text redaction policies.
//!
//! A [`TextRedactionPolicy`] is a ready-made [`crate::ValueRedactor`] for the
//! common masking shapes: replace everything with a placeholder, keep a
//! visible prefix or suffix, or mask a prefix or suffix. Policies compose
//! with the `for_*` adapters like any other redactor:
//!
//! ```
//! use httpmask::{KeyValueRedactor, TextRedactionPolicy, ValueRedactor};
//!
//! let last_four = TextRedactionPolicy::keep_last(4)
//!     .for_keys(|key: &str| key.eq_ignore_ascii_case("card"));
//! assert_eq!(last_four.redact("card", "4111111111111111"), "************1111");
//! assert_eq!(last_four.redact("name", "anonymous"), "anonymous");
//! ```

pub mod text;

pub use text::{KeepConfig, MASK_CHAR, MaskConfig, REDACTED_PLACEHOLDER, TextRedactionPolicy};
