use percent_encoding::percent_decode_str;
use serde::Deserialize;
use serde_json::Value;

use crate::core::models::DocumentLocation;
use crate::errors::SummaryError;

/// S3 event notification, trimmed to the fields the processor reads.
#[derive(Debug, Deserialize)]
pub struct UploadEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<UploadRecord>,
}

#[derive(Debug, Deserialize)]
pub struct UploadRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct S3Object {
    pub key: String,
}

/// Decodes an S3 object key as it appears in event notifications.
///
/// Keys are form-encoded, so `+` stands for a space and must be replaced
/// before percent escapes are decoded (`%2B` is a literal plus).
///
/// # Examples
///
/// ```
/// use docsum::event::decode_object_key;
///
/// assert_eq!(decode_object_key("docs%2Freport.txt").unwrap(), "docs/report.txt");
/// assert_eq!(decode_object_key("my+notes%2B1.txt").unwrap(), "my notes+1.txt");
/// ```
pub fn decode_object_key(input: &str) -> Result<String, SummaryError> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| SummaryError::EventError(format!("Failed to decode object key: {}", e)))
}

/// Pulls the bucket and decoded key of the first record out of a raw event payload.
pub fn parse_upload_event(payload: &Value) -> Result<DocumentLocation, SummaryError> {
    let event = UploadEvent::deserialize(payload)
        .map_err(|e| SummaryError::EventError(e.to_string()))?;

    let record = event
        .records
        .into_iter()
        .next()
        .ok_or_else(|| SummaryError::EventError("event contains no records".to_string()))?;

    Ok(DocumentLocation {
        bucket: record.s3.bucket.name,
        key: decode_object_key(&record.s3.object.key)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_upload_event_first_record() {
        let payload = json!({
            "Records": [
                { "s3": { "bucket": { "name": "b" }, "object": { "key": "docs%2Freport.txt", "size": 50 } } },
                { "s3": { "bucket": { "name": "other" }, "object": { "key": "ignored.txt" } } }
            ]
        });

        let location = parse_upload_event(&payload).unwrap();
        assert_eq!(location.bucket, "b");
        assert_eq!(location.key, "docs/report.txt");
    }

    #[test]
    fn test_parse_upload_event_no_records() {
        let err = parse_upload_event(&json!({ "Records": [] })).unwrap_err();
        assert!(matches!(err, SummaryError::EventError(_)));

        let err = parse_upload_event(&json!({})).unwrap_err();
        assert!(matches!(err, SummaryError::EventError(_)));
    }

    #[test]
    fn test_parse_upload_event_missing_key() {
        let payload = json!({ "Records": [ { "s3": { "bucket": { "name": "b" }, "object": {} } } ] });
        assert!(parse_upload_event(&payload).is_err());
    }

    #[test]
    fn test_decode_object_key_invalid_utf8() {
        assert!(decode_object_key("bad%FF").is_err());
    }
}
