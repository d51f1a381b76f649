use keyfall_core::{EncodeFault, Encoder, LogLevel, RecordingDiagnostics, Reporter};
use keyfall_json::{JsonDocument, JsonObjectMut};
use pretty_assertions::assert_eq;
use serde_json::{Map, Value, json};
use std::collections::HashMap;

#[test]
fn empty_document_becomes_object_on_first_write() {
    let mut document = JsonDocument::new();
    Reporter::new(LogLevel::Silent).encode_into(&mut document, "name", "ada");
    assert_eq!(document.into_value(), json!({ "name": "ada" }));
}

#[test]
fn scalar_root_cannot_be_written() {
    let sink = RecordingDiagnostics::new();
    let mut document = JsonDocument::from(json!(42));

    let err = Reporter::with_diagnostics(LogLevel::Verbose, &sink)
        .try_encode_into(&mut document, "name", "ada")
        .unwrap_err();

    assert_eq!(
        err,
        EncodeFault::Other("cannot write keyed values into a JSON number".into())
    );
    assert!(sink.contains("Failed to encode key `name`"));
    assert_eq!(document.as_value(), &json!(42));
}

#[test]
fn unrepresentable_value_is_invalid_and_leaves_object_untouched() {
    let sink = RecordingDiagnostics::new();
    let mut map = Map::new();
    let mut encoder = JsonObjectMut::new(&mut map);
    let mut grid = HashMap::new();
    grid.insert((0, 0), "origin");

    Reporter::with_diagnostics(LogLevel::Verbose, &sink).encode(&mut encoder, "grid", &grid);

    assert!(map.is_empty());
    assert!(sink.contains("Failed to encode type"));
    assert!(sink.contains("key `grid`"));
    assert!(sink.contains("invalid value"));
}

#[test]
fn batch_writes_every_representable_value() {
    let mut document = JsonDocument::new();
    let mut grid = HashMap::new();
    grid.insert((1, 2), 3);

    let report = {
        let mut encoder = document.keyed_encoder().unwrap();
        Reporter::new(LogLevel::Silent)
            .batch(&mut encoder)
            .encode("title", "hello")
            .encode("grid", &grid)
            .encode("count", &3u8)
            .encode("tags", &["a", "b"])
            .finish()
    };

    assert_eq!(report.encoded, 3);
    assert_eq!(report.failed, vec!["grid".to_string()]);
    assert_eq!(
        document.into_value(),
        json!({ "title": "hello", "count": 3, "tags": ["a", "b"] })
    );
}

#[test]
fn object_value_is_writable_in_place() {
    let mut root = json!({ "existing": true });
    {
        let mut encoder = JsonObjectMut::from_value(&mut root).unwrap();
        Reporter::new(LogLevel::Silent)
            .encode_one(&mut encoder, "added", &1)
            .unwrap();
    }
    assert_eq!(root, json!({ "existing": true, "added": 1 }));
}

#[test]
fn array_value_is_not_writable() {
    let mut root = Value::Array(vec![]);
    assert!(JsonObjectMut::from_value(&mut root).is_err());
}
