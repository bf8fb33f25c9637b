//! Text masking strategies for string values.
//!
//! Policies here are pure string transformations: they know nothing about
//! headers, keys, or URIs. Scope a policy to particular keys with
//! [`crate::ValueRedactor::for_keys`] before handing it to the traffic
//! facade.

use std::borrow::Cow;

use crate::redact::ValueRedactor;

/// Default placeholder used for full redaction.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Default character used to mask sensitive characters.
pub const MASK_CHAR: char = '*';

/// Keeps selected segments visible while masking the remainder.
///
/// Operates on Unicode scalar values. If the kept segments cover the whole
/// value, the output is unchanged.
#[derive(Clone, Copy, Debug)]
pub struct KeepConfig {
    visible_prefix: usize,
    visible_suffix: usize,
    mask_char: char,
}

impl KeepConfig {
    /// Keeps only the first `visible_prefix` characters.
    #[must_use]
    pub fn first(visible_prefix: usize) -> Self {
        Self {
            visible_prefix,
            visible_suffix: 0,
            mask_char: MASK_CHAR,
        }
    }

    /// Keeps only the last `visible_suffix` characters.
    #[must_use]
    pub fn last(visible_suffix: usize) -> Self {
        Self {
            visible_prefix: 0,
            visible_suffix,
            mask_char: MASK_CHAR,
        }
    }

    /// Keeps both leading and trailing characters visible.
    #[must_use]
    pub fn both(visible_prefix: usize, visible_suffix: usize) -> Self {
        Self {
            visible_prefix,
            visible_suffix,
            mask_char: MASK_CHAR,
        }
    }

    fn apply_to(&self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        let total = chars.len();
        if total == 0 {
            return REDACTED_PLACEHOLDER.to_owned();
        }

        // Kept spans cover the whole value: nothing to mask.
        if self.visible_prefix.saturating_add(self.visible_suffix) >= total {
            return chars.into_iter().collect();
        }

        for ch in &mut chars[self.visible_prefix..(total - self.visible_suffix)] {
            *ch = self.mask_char;
        }
        chars.into_iter().collect()
    }
}

/// Masks selected segments while leaving the remainder visible.
///
/// Operates on Unicode scalar values. If the masked segments cover the whole
/// value, everything is masked.
#[derive(Clone, Copy, Debug)]
pub struct MaskConfig {
    mask_prefix: usize,
    mask_suffix: usize,
    mask_char: char,
}

impl MaskConfig {
    /// Masks only the first `mask_prefix` characters.
    #[must_use]
    pub fn first(mask_prefix: usize) -> Self {
        Self {
            mask_prefix,
            mask_suffix: 0,
            mask_char: MASK_CHAR,
        }
    }

    /// Masks only the last `mask_suffix` characters.
    #[must_use]
    pub fn last(mask_suffix: usize) -> Self {
        Self {
            mask_prefix: 0,
            mask_suffix,
            mask_char: MASK_CHAR,
        }
    }

    /// Masks both leading and trailing characters.
    #[must_use]
    pub fn both(mask_prefix: usize, mask_suffix: usize) -> Self {
        Self {
            mask_prefix,
            mask_suffix,
            mask_char: MASK_CHAR,
        }
    }

    fn apply_to(&self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        let total = chars.len();
        if total == 0 {
            return REDACTED_PLACEHOLDER.to_owned();
        }

        // Masked spans cover the whole value: mask everything.
        if self.mask_prefix.saturating_add(self.mask_suffix) >= total {
            chars.fill(self.mask_char);
            return chars.into_iter().collect();
        }

        for ch in &mut chars[..self.mask_prefix] {
            *ch = self.mask_char;
        }
        if self.mask_suffix > 0 {
            for ch in &mut chars[(total - self.mask_suffix)..] {
                *ch = self.mask_char;
            }
        }
        chars.into_iter().collect()
    }
}

/// A masking strategy for string values, usable wherever a
/// [`ValueRedactor`] is expected.
///
/// Empty inputs are fully redacted to [`REDACTED_PLACEHOLDER`] by every
/// strategy, so a policy never reveals that a value was empty.
// Use `Cow` so callers can provide borrowed or owned placeholders.
#[derive(Clone, Debug)]
pub enum TextRedactionPolicy {
    /// Replace the entire value with a fixed placeholder.
    Full {
        /// The placeholder text to use.
        placeholder: Cow<'static, str>,
    },
    /// Keep configured segments visible while masking everything else.
    Keep(KeepConfig),
    /// Mask configured segments while leaving the remainder untouched.
    Mask(MaskConfig),
}

impl TextRedactionPolicy {
    /// Constructs [`TextRedactionPolicy::Full`] using [`REDACTED_PLACEHOLDER`].
    #[must_use]
    pub fn default_full() -> Self {
        Self::Full {
            placeholder: Cow::Borrowed(REDACTED_PLACEHOLDER),
        }
    }

    /// Constructs [`TextRedactionPolicy::Full`] using a custom placeholder.
    #[must_use]
    pub fn full_with<P>(placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self::Full {
            placeholder: placeholder.into(),
        }
    }

    /// Keeps only the first `visible_prefix` characters in clear text.
    #[must_use]
    pub fn keep_first(visible_prefix: usize) -> Self {
        Self::Keep(KeepConfig::first(visible_prefix))
    }

    /// Keeps only the last `visible_suffix` characters in clear text.
    #[must_use]
    pub fn keep_last(visible_suffix: usize) -> Self {
        Self::Keep(KeepConfig::last(visible_suffix))
    }

    /// Keeps segments using an explicit configuration.
    #[must_use]
    pub fn keep_with(config: KeepConfig) -> Self {
        Self::Keep(config)
    }

    /// Masks the first `mask_prefix` characters.
    #[must_use]
    pub fn mask_first(mask_prefix: usize) -> Self {
        Self::Mask(MaskConfig::first(mask_prefix))
    }

    /// Masks the last `mask_suffix` characters.
    #[must_use]
    pub fn mask_last(mask_suffix: usize) -> Self {
        Self::Mask(MaskConfig::last(mask_suffix))
    }

    /// Masks segments using an explicit configuration.
    #[must_use]
    pub fn mask_with(config: MaskConfig) -> Self {
        Self::Mask(config)
    }

    /// Overrides the masking character used by keep/mask strategies.
    ///
    /// Has no effect on [`TextRedactionPolicy::Full`], which replaces the
    /// whole value rather than masking characters.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        match &mut self {
            TextRedactionPolicy::Full { .. } => {}
            TextRedactionPolicy::Keep(config) => config.mask_char = mask_char,
            TextRedactionPolicy::Mask(config) => config.mask_char = mask_char,
        }
        self
    }
}

impl Default for TextRedactionPolicy {
    fn default() -> Self {
        Self::default_full()
    }
}

impl ValueRedactor for TextRedactionPolicy {
    fn redact(&self, value: &str) -> String {
        match self {
            TextRedactionPolicy::Full { placeholder } => placeholder.clone().into_owned(),
            TextRedactionPolicy::Keep(config) => config.apply_to(value),
            TextRedactionPolicy::Mask(config) => config.apply_to(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KeepConfig, MaskConfig, REDACTED_PLACEHOLDER, TextRedactionPolicy};
    use crate::redact::ValueRedactor;

    #[test]
    fn full_policy_uses_placeholders() {
        assert_eq!(
            TextRedactionPolicy::default_full().redact("secret"),
            REDACTED_PLACEHOLDER
        );
        assert_eq!(
            TextRedactionPolicy::full_with("<redacted>").redact("secret"),
            "<redacted>"
        );
    }

    #[test]
    fn keep_policies_mask_the_remainder() {
        assert_eq!(TextRedactionPolicy::keep_first(2).redact("abcdef"), "ab****");
        assert_eq!(TextRedactionPolicy::keep_last(4).redact("4111111111111111"), "************1111");
        assert_eq!(
            TextRedactionPolicy::keep_with(KeepConfig::both(2, 2)).redact("abcdef"),
            "ab**ef"
        );
    }

    #[test]
    fn keep_policy_covering_the_value_is_identity() {
        assert_eq!(TextRedactionPolicy::keep_first(3).redact("ab"), "ab");
        assert_eq!(
            TextRedactionPolicy::keep_with(KeepConfig::both(usize::MAX, usize::MAX)).redact("abcd"),
            "abcd"
        );
    }

    #[test]
    fn mask_policies_leave_the_remainder_visible() {
        assert_eq!(TextRedactionPolicy::mask_first(2).redact("abcdef"), "**cdef");
        assert_eq!(TextRedactionPolicy::mask_last(3).redact("abcdef"), "abc***");
        assert_eq!(
            TextRedactionPolicy::mask_with(MaskConfig::both(2, 2)).redact("abcdef"),
            "**cd**"
        );
    }

    #[test]
    fn mask_policy_covering_the_value_masks_everything() {
        assert_eq!(
            TextRedactionPolicy::mask_with(MaskConfig::both(2, 2)).redact("abc"),
            "***"
        );
    }

    #[test]
    fn custom_mask_char_applies_to_keep_and_mask() {
        assert_eq!(
            TextRedactionPolicy::keep_first(2).with_mask_char('#').redact("abcdef"),
            "ab####"
        );
        assert_eq!(
            TextRedactionPolicy::mask_last(2).with_mask_char('#').redact("abcd"),
            "ab##"
        );
    }

    #[test]
    fn empty_input_is_fully_redacted() {
        assert_eq!(TextRedactionPolicy::keep_last(4).redact(""), REDACTED_PLACEHOLDER);
        assert_eq!(TextRedactionPolicy::mask_first(2).redact(""), REDACTED_PLACEHOLDER);
        assert_eq!(TextRedactionPolicy::default_full().redact(""), REDACTED_PLACEHOLDER);
    }

    #[test]
    fn policies_count_unicode_scalars_not_bytes() {
        assert_eq!(TextRedactionPolicy::keep_first(2).redact("héllo"), "hé***");
    }
}
