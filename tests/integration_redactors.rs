//! End-to-end tests for redactor composition.
//!
//! These tests exercise the public composition surface: primitive value
//! redactors, compound ordering, key-scoped derivation, and the text masking
//! policies, used together the way a caller assembling a redaction policy
//! would.

use httpmask::{
    Compound, KeyCompound, KeyPassthrough, KeyValueRedactor, Passthrough, Replacement,
    TextRedactionPolicy, ValueRedactor, authorization, replace_headers,
};

#[test]
fn passthrough_is_the_identity() {
    assert_eq!(Passthrough.redact("value"), "value");
}

#[test]
fn replacement_always_returns_the_placeholder() {
    let unit = Replacement::new("unknown");
    assert_eq!(unit.redact("s3cr3t"), "unknown");
    assert_eq!(unit.redact("unknown"), "unknown");
    assert_eq!(unit.redact(""), "unknown");
}

#[test]
fn compound_applies_left_to_right() {
    let unit = Compound::new(vec![
        Box::new(|value: &str| format!("1 {value}")),
        Box::new(|value: &str| format!("2 {value}")),
    ]);
    assert_eq!(unit.redact("0"), "2 1 0");
}

#[test]
fn compound_mixes_primitives_and_closures() {
    let unit = Compound::new(vec![
        Box::new(Replacement::new("****")),
        Box::new(|value: &str| format!("<{value}>")),
    ]);
    assert_eq!(unit.redact("whatever"), "<****>");
}

#[test]
fn for_any_key_ignores_the_key() {
    let unit = Replacement::new("foo").for_any_key();
    assert_eq!(unit.redact("press", "any key"), "foo");
}

#[test]
fn for_keys_scopes_redaction_to_matching_keys() {
    let unit = Replacement::new("unknown").for_keys(|key: &str| key.eq_ignore_ascii_case("password"));
    assert_eq!(unit.redact("PASSWORD", "s3cr3t"), "unknown");
    assert_eq!(unit.redact("limit", "1"), "1");
}

#[test]
fn for_pairs_scopes_redaction_to_matching_pairs() {
    // Only long values are considered worth hiding here.
    let unit = Replacement::new("unknown").for_pairs(|key: &str, value: &str| {
        key == "token" && value.len() >= 8
    });
    assert_eq!(unit.redact("token", "deadbeefcafe"), "unknown");
    assert_eq!(unit.redact("token", "short"), "short");
}

#[test]
fn keyed_compound_feeds_each_layer_the_same_key() {
    let unit = KeyCompound::new(vec![
        Box::new(Replacement::new("a").for_keys(|key: &str| key == "first")),
        Box::new(Replacement::new("b").for_keys(|key: &str| key == "second")),
    ]);
    assert_eq!(unit.redact("first", "v"), "a");
    assert_eq!(unit.redact("second", "v"), "b");
    assert_eq!(unit.redact("third", "v"), "v");
}

#[test]
fn keyed_compound_with_passthrough_layers_is_identity() {
    let unit = KeyCompound::new(vec![Box::new(KeyPassthrough), Box::new(KeyPassthrough)]);
    assert_eq!(unit.redact("key", "value"), "value");
}

#[test]
fn redaction_with_the_same_policy_is_idempotent() {
    let unit = Replacement::new("unknown").for_keys(|key: &str| key == "password");
    let once = unit.redact("password", "s3cr3t");
    assert_eq!(unit.redact("password", &once), once);
}

#[test]
fn authorization_preset_masks_only_the_authorization_key() {
    let unit = authorization();
    assert_eq!(unit.redact("Authorization", "Bearer s3cr3t"), "XXX");
    assert_eq!(unit.redact("authorization", "Basic dXNlcg=="), "XXX");
    assert_eq!(unit.redact("Host", "localhost"), "localhost");
}

#[test]
fn name_list_preset_covers_several_headers() {
    let unit = replace_headers(["Cookie", "Set-Cookie", "X-Api-Key"], "***");
    assert_eq!(unit.redact("x-api-key", "k-123"), "***");
    assert_eq!(unit.redact("Accept", "*/*"), "*/*");
}

#[test]
fn text_policies_compose_with_key_scoping() {
    let unit = TextRedactionPolicy::keep_last(4).for_keys(|key: &str| key == "card");
    assert_eq!(unit.redact("card", "4111111111111111"), "************1111");
    assert_eq!(unit.redact("name", "anonymous"), "anonymous");
}
