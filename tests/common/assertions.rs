//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Assert a string is `#` plus six lowercase hex digits
pub fn assert_hex_color(value: &str) {
    assert_eq!(value.len(), 7, "Expected #rrggbb, got {value:?}");
    assert!(value.starts_with('#'), "Expected leading '#', got {value:?}");
    assert!(
        value[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Expected lowercase hex digits, got {value:?}"
    );
}

/// Assert JSON text parses and return the value
pub fn assert_json(text: &str) -> serde_json::Value {
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => panic!("Expected valid JSON ({e}), got:\n{text}"),
    }
}
