//! Shareable state codec.
//!
//! Packs any serde value as MessagePack and renders the bytes as URL-safe
//! base64 without padding, so the text embeds directly in a query
//! parameter.
//!
//! # Wire Format
//! - Structs are written as maps keyed by field name.
//! - The alphabet is `A-Z a-z 0-9 - _`. Padding is accepted on decode.
//! - Exactly one value per string; trailing bytes are rejected.

use std::io::Cursor;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{DecodeError, Error, Result};

const STATE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes a value as URL-safe text.
///
/// # Errors
/// [`Error::Encode`] if the value's `Serialize` impl fails.
pub fn encode_state<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let bytes = rmp_serde::to_vec_named(value).map_err(|e| Error::Encode(e.to_string()))?;
    Ok(STATE_ENGINE.encode(bytes))
}

/// Decodes text produced by [`encode_state`].
///
/// # Errors
/// [`Error::Decode`] if the text is not valid base64, the bytes are not a
/// MessagePack value of type `T`, or bytes remain after the value.
pub fn decode_state<T: DeserializeOwned>(text: &str) -> Result<T> {
    decode_bytes(text).map_err(|e| {
        debug!(error = %e, len = text.len(), "rejected serialized state");
        Error::Decode(e)
    })
}

fn decode_bytes<T: DeserializeOwned>(text: &str) -> std::result::Result<T, DecodeError> {
    let bytes = STATE_ENGINE.decode(text.trim())?;
    let mut cursor = Cursor::new(bytes.as_slice());
    let value = rmp_serde::from_read(&mut cursor)?;
    let remaining = bytes.len() - cursor.position() as usize;
    if remaining > 0 {
        return Err(DecodeError::TrailingBytes(remaining));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Class, NonClass, Section, SectionKind, SectionLock, Sections, Timeslot};
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn round_trip(value: &Value) -> Value {
        let text = encode_state(value).unwrap();
        decode_state(&text).unwrap()
    }

    fn is_url_safe(text: &str) -> bool {
        text.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    #[test]
    fn test_round_trip_examples() {
        let values = [
            json!({}),
            json!({"a": 1, "b": [1, 2, 3]}),
            json!("hello world"),
            json!(null),
            json!({"x": {"y": {"z": [true, false, -7, 2.5, "deep"]}}}),
            json!([[], {}, [[1]]]),
        ];
        for v in values {
            assert_eq!(round_trip(&v), v);
        }
    }

    #[test]
    fn test_text_round_trip() {
        let text = encode_state(&json!({"b": [1, 2], "a": "x"})).unwrap();
        let value: Value = decode_state(&text).unwrap();
        assert_eq!(encode_state(&value).unwrap(), text);
    }

    #[test]
    fn test_output_is_url_safe() {
        // Bytes 0xfb/0xff map to '+' and '/' in the standard alphabet.
        let text = encode_state(&json!({"k": [251, 255, 65535, -1], "s": "??>>~~"})).unwrap();
        assert!(is_url_safe(&text), "{text}");
    }

    #[test]
    fn test_accepts_padding() {
        let text = encode_state(&json!("ab")).unwrap();
        let padded = format!("{text}{}", "=".repeat((4 - text.len() % 4) % 4));
        let value: Value = decode_state(&padded).unwrap();
        assert_eq!(value, json!("ab"));
    }

    #[test]
    fn test_rejects_bad_base64() {
        let err = decode_state::<Value>("not*base64!").unwrap_err();
        assert!(matches!(err, Error::Decode(DecodeError::Base64(_))));
    }

    #[test]
    fn test_rejects_bad_messagepack() {
        // 0xc1 is never used by MessagePack.
        let text = STATE_ENGINE.encode([0xc1]);
        let err = decode_state::<Value>(&text).unwrap_err();
        assert!(matches!(err, Error::Decode(DecodeError::MessagePack(_))));
    }

    #[test]
    fn test_rejects_truncated() {
        let bytes = rmp_serde::to_vec_named(&json!({"a": "long string value"})).unwrap();
        let text = STATE_ENGINE.encode(&bytes[..bytes.len() - 3]);
        assert!(decode_state::<Value>(&text).is_err());
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        // Two nil values.
        let text = STATE_ENGINE.encode([0xc0, 0xc0]);
        let err = decode_state::<Value>(&text).unwrap_err();
        assert!(matches!(err, Error::Decode(DecodeError::TrailingBytes(1))));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(decode_state::<Value>("").is_err());
    }

    #[test]
    fn test_activity_round_trip() {
        let mut lecture = Sections::new(SectionKind::Lecture)
            .with_section(Section::new(0, "MWF10").with_timeslot(Timeslot::new(4, 2)))
            .with_section(Section::new(1, "MWF11").with_room("10-250"));
        lecture.lock_section(SectionLock::Section(1)).unwrap();

        let mut class = Activity::from(Class::new("6.042J", "Math for CS").with_sections(lecture));
        class.set_manual_color(Some("#D32F2F".into()));
        let other = Activity::from(NonClass::new("nc-1", "Rowing").with_timeslot(Timeslot::new(90, 4)));
        let activities = vec![class, other];

        let text = encode_state(&activities).unwrap();
        assert!(is_url_safe(&text));
        let decoded: Vec<Activity> = decode_state(&text).unwrap();
        assert_eq!(decoded, activities);
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            any::<u64>().prop_map(|n| json!(n)),
            "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn json_round_trip(v in arb_json()) {
            prop_assert_eq!(round_trip(&v), v);
        }

        #[test]
        fn encoded_text_is_url_safe(v in arb_json()) {
            let text = encode_state(&v).unwrap();
            prop_assert!(is_url_safe(&text));
        }
    }
}
