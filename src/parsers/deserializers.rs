use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an optional timestamp given as Unix milliseconds or an RFC3339 string
///
/// `null` (or a missing field, via `#[serde(default)]`) means "unknown". Any other
/// shape, or a string that is not RFC3339, fails the whole record.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            let ms = n.as_i64().ok_or_else(|| Error::custom("invalid timestamp"))?;
            DateTime::from_timestamp_millis(ms)
                .map(Some)
                .ok_or_else(|| Error::custom("timestamp out of range"))
        }
        Value::String(s) => s
            .parse::<DateTime<Utc>>()
            .map(Some)
            .map_err(|e| Error::custom(format!("invalid RFC3339 timestamp: {}", e))),
        _ => Err(Error::custom("timestamp must be a number or string")),
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use crate::models::RawRecord;

    #[test]
    fn test_timestamp_rfc3339() {
        let json = r#"{"type":"user","timestamp":"2025-11-02T09:41:20.016Z"}"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        let expected = "2025-11-02T09:41:20.016Z".parse::<DateTime<chrono::Utc>>().unwrap();
        assert_eq!(record.timestamp, Some(expected));
    }

    #[test]
    fn test_timestamp_integer_millis() {
        let json = r#"{"type":"user","timestamp":1762076480016}"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.timestamp, DateTime::from_timestamp_millis(1762076480016));
    }

    #[test]
    fn test_timestamp_missing_or_null() {
        let record: RawRecord = serde_json::from_str(r#"{"type":"user"}"#).unwrap();
        assert!(record.timestamp.is_none());

        let record: RawRecord =
            serde_json::from_str(r#"{"type":"user","timestamp":null}"#).unwrap();
        assert!(record.timestamp.is_none());
    }

    #[test]
    fn test_timestamp_garbage_rejects_record() {
        assert!(serde_json::from_str::<RawRecord>(r#"{"timestamp":"yesterday"}"#).is_err());
        assert!(serde_json::from_str::<RawRecord>(r#"{"timestamp":[1]}"#).is_err());
    }
}
