// Unit Tests for Response Record Decoding
//
// UNIT UNDER TEST: ResponseRecord, Usage, Choice, ResponseMessage
//
// TEST COVERAGE:
//   - Decoding the documented response shape
//   - Timestamp conversion and first-choice access
//   - Structural mismatches are rejected

use crate::types::{ResponseRecord, Usage};
use chrono::{TimeZone, Utc};

const SAMPLE: &str = r#"{"id":"x","object":"chat.completion","created":1,"model":"m","usage":{"prompt_tokens":1,"completion_tokens":2,"total_tokens":3},"choices":[{"message":{"role":"assistant","content":"hi"},"finish_reason":"stop","index":0}]}"#;

#[test]
fn test_decodes_documented_shape() {
    // Act
    let record: ResponseRecord = serde_json::from_str(SAMPLE).unwrap();

    // Assert
    assert_eq!(record.id, "x");
    assert_eq!(record.object, "chat.completion");
    assert_eq!(record.model, "m");
    assert_eq!(
        record.usage,
        Usage {
            prompt_tokens: 1,
            completion_tokens: 2,
            total_tokens: 3,
        }
    );
    assert_eq!(record.choices.len(), 1);
    assert_eq!(record.choices[0].message.role, "assistant");
    assert_eq!(record.choices[0].message.content, "hi");
    assert_eq!(record.choices[0].finish_reason, "stop");
    assert_eq!(record.choices[0].index, 0);
}

#[test]
fn test_created_at_and_first_content() {
    let record: ResponseRecord = serde_json::from_str(SAMPLE).unwrap();

    assert_eq!(
        record.created_at(),
        Some(Utc.timestamp_opt(1, 0).unwrap())
    );
    assert_eq!(record.first_content(), Some("hi"));
}

#[test]
fn test_first_content_is_none_without_choices() {
    let mut record: ResponseRecord = serde_json::from_str(SAMPLE).unwrap();
    record.choices.clear();

    assert_eq!(record.first_content(), None);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let body = SAMPLE.replacen('{', r#"{"system_fingerprint":"fp_1","#, 1);

    let record: ResponseRecord = serde_json::from_str(&body).unwrap();

    assert_eq!(record.id, "x");
}

#[test]
fn test_missing_usage_is_rejected() {
    let body = r#"{"id":"x","object":"chat.completion","created":1,"model":"m","choices":[]}"#;

    assert!(serde_json::from_str::<ResponseRecord>(body).is_err());
}

#[test]
fn test_wrong_field_type_is_rejected() {
    let body = SAMPLE.replace(r#""created":1"#, r#""created":"yesterday""#);

    assert!(serde_json::from_str::<ResponseRecord>(&body).is_err());
}
