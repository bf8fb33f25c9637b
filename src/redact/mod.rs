//! Redaction building blocks.
//!
//! This module provides the composable redaction machinery:
//!
//! - **`value`**: plain string redactors ([`ValueRedactor`] and primitives)
//! - **`keyed`**: key-scoped redactors for maps ([`KeyValueRedactor`])
//! - **`query`**: ordered query-string parsing and redaction ([`QueryParameters`])
//! - **`target`**: resilient request-target redaction ([`RequestTargetRedactor`])
//!
//! Partial-masking text policies live in [`crate::policy`]; the traffic
//! facade lives in [`crate::http`].

mod keyed;
mod query;
mod target;
mod value;

pub use keyed::{KeyCompound, KeyPassthrough, KeyValueRedactor, authorization, replace_headers};
pub use query::{QueryParameter, QueryParameters};
pub use target::RequestTargetRedactor;
pub use value::{Compound, ForAnyKey, ForKeys, ForPairs, Passthrough, Replacement, ValueRedactor};
