//! Property-based tests for resolution over real JSON documents.

use keyfall_core::{CandidateKeys, Resolver};
use keyfall_json::JsonDocument;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

const KEYS: [&str; 4] = ["v4", "v3", "v2", "v1"];

/// For each key: absent, a string, or a number.
fn field_strategy() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        "[a-z]{0,12}".prop_map(|s| Some(json!(s))),
        any::<i64>().prop_map(|n| Some(json!(n))),
    ]
}

fn document_strategy() -> impl Strategy<Value = Vec<Option<Value>>> {
    prop::collection::vec(field_strategy(), KEYS.len())
}

fn build(fields: &[Option<Value>]) -> JsonDocument {
    let map: Map<String, Value> = KEYS
        .iter()
        .zip(fields)
        .filter_map(|(key, field)| field.clone().map(|value| (key.to_string(), value)))
        .collect();
    JsonDocument::from(Value::Object(map))
}

// =============================================================================
// RESOLUTION PROPERTIES
// =============================================================================

proptest! {
    /// The first present key decides: a string is returned, anything else
    /// yields the fallback.
    #[test]
    fn first_present_key_decides(fields in document_strategy()) {
        let document = build(&fields);
        let keys = CandidateKeys::new(&KEYS).unwrap();

        let value = Resolver::default().decode_or(&document, keys, "fallback".to_string());

        let want = match fields.iter().flatten().next() {
            Some(Value::String(s)) => s.clone(),
            _ => "fallback".to_string(),
        };
        prop_assert_eq!(value, want);
    }

    /// Re-parsing the serialized document does not change the outcome.
    #[test]
    fn text_and_value_documents_agree(fields in document_strategy()) {
        let document = build(&fields);
        let text = serde_json::to_string(document.as_value()).unwrap();
        let reparsed = JsonDocument::parse(&text).unwrap();
        let keys = CandidateKeys::new(&KEYS).unwrap();
        let resolver = Resolver::default();

        let from_value: Option<String> = resolver.decode(&document, keys, None);
        let from_text: Option<String> = resolver.decode(&reparsed, keys, None);

        prop_assert_eq!(from_value, from_text);
    }
}
