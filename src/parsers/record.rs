use crate::models::{Message, RawRecord, Role};

const RECORD_TYPE_USER: &str = "user";
const RECORD_TYPE_ASSISTANT: &str = "assistant";

/// Decode one JSONL line into a [`RawRecord`]
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejecting the line, so a
/// stray byte costs one character instead of the whole turn.
pub fn decode_record(line: &[u8]) -> Result<RawRecord, serde_json::Error> {
    match std::str::from_utf8(line) {
        Ok(text) => serde_json::from_str(text),
        Err(_) => serde_json::from_str(&String::from_utf8_lossy(line)),
    }
}

/// Normalize a decoded record into a [`Message`]
///
/// Only `user` and `assistant` records that carry a `message` object survive;
/// summaries, file-history snapshots, system records and the like return `None`.
pub fn normalize_record(record: RawRecord) -> Option<Message> {
    if record.record_type != RECORD_TYPE_USER && record.record_type != RECORD_TYPE_ASSISTANT {
        return None;
    }
    let message = record.message?;

    Some(Message {
        uuid: record.uuid.unwrap_or_default(),
        role: Role::from_label(message.role.as_deref().unwrap_or_default()),
        content: message.content.extract_text(),
        timestamp: record.timestamp,
    })
}

/// Parse one raw line into a [`Message`], or `None` if the line should be skipped
///
/// Malformed JSON is not an error here: partial writes and unknown record shapes
/// are expected in live transcripts.
pub fn parse_record(line: &[u8]) -> Option<Message> {
    decode_record(line).ok().and_then(normalize_record)
}
