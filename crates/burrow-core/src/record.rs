use crate::error::{Result, StorageError};
use serde::{Deserialize, Serialize};

/// A stored URL mapping together with its visit analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    /// The original URL that was shortened.
    pub original_url: String,
    /// Number of successful resolutions. Never decreases.
    #[serde(default)]
    pub count: u64,
    /// Browser or client name of the most recent visitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Operating system of the most recent visitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
}

/// Client details captured when a short code is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMetadata {
    pub os: String,
    pub agent: String,
}

impl ClientMetadata {
    pub fn new(os: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            agent: agent.into(),
        }
    }
}

/// Values written before records carried an envelope were the bare URL.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredValue {
    Record(MappingRecord),
    Bare(String),
}

impl MappingRecord {
    /// Creates a record that has never been visited.
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            count: 0,
            device: None,
            os: None,
        }
    }

    /// Applies one visit: bumps the counter and overwrites the client fields.
    pub fn record_visit(&mut self, client: &ClientMetadata) {
        self.count = self.count.saturating_add(1);
        self.os = Some(client.os.clone());
        self.device = Some(client.agent.clone());
    }

    /// Serializes the record into its persisted JSON form.
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Decodes a persisted value.
    ///
    /// Accepts the JSON envelope as well as legacy values holding only the
    /// URL, either as raw UTF-8 bytes or as a JSON string. Legacy values are
    /// read with a zero count and no client metadata.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        match serde_json::from_slice::<StoredValue>(bytes) {
            Ok(StoredValue::Record(record)) => Ok(record),
            Ok(StoredValue::Bare(url)) => Self::legacy(url),
            Err(_) => {
                let url = std::str::from_utf8(bytes).map_err(|e| {
                    StorageError::InvalidData(format!("value is neither JSON nor UTF-8: {e}"))
                })?;
                Self::legacy(url.to_owned())
            }
        }
    }

    fn legacy(url: String) -> Result<Self> {
        if url.is_empty() {
            return Err(StorageError::InvalidData(
                "legacy value holds an empty url".to_string(),
            ));
        }
        Ok(Self::new(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_envelope_without_missing_metadata() {
        let record = MappingRecord::new("https://example.com");
        let encoded = String::from_utf8(record.encode().unwrap()).unwrap();
        assert_eq!(encoded, r#"{"original_url":"https://example.com","count":0}"#);
    }

    #[test]
    fn encodes_envelope_with_metadata() {
        let mut record = MappingRecord::new("https://example.com");
        record.record_visit(&ClientMetadata::new("Linux", "curl"));
        let value: serde_json::Value = serde_json::from_slice(&record.encode().unwrap()).unwrap();

        assert_eq!(value["original_url"], "https://example.com");
        assert_eq!(value["count"], 1);
        assert_eq!(value["os"], "Linux");
        assert_eq!(value["device"], "curl");
    }

    #[test]
    fn decodes_envelope() {
        let record =
            MappingRecord::decode(br#"{"original_url":"https://a.example","count":7,"os":"Mac OSX","device":"Safari"}"#)
                .unwrap();
        assert_eq!(record.original_url, "https://a.example");
        assert_eq!(record.count, 7);
        assert_eq!(record.os.as_deref(), Some("Mac OSX"));
        assert_eq!(record.device.as_deref(), Some("Safari"));
    }

    #[test]
    fn decodes_envelope_without_count() {
        let record = MappingRecord::decode(br#"{"original_url":"https://a.example"}"#).unwrap();
        assert_eq!(record.count, 0);
    }

    #[test]
    fn decodes_legacy_bare_url() {
        let record = MappingRecord::decode(b"http://example.com").unwrap();
        assert_eq!(record, MappingRecord::new("http://example.com"));
    }

    #[test]
    fn decodes_legacy_json_string() {
        let record = MappingRecord::decode(br#""http://example.com""#).unwrap();
        assert_eq!(record, MappingRecord::new("http://example.com"));
    }

    #[test]
    fn rejects_empty_and_binary_values() {
        assert!(matches!(
            MappingRecord::decode(b""),
            Err(StorageError::InvalidData(_))
        ));
        assert!(matches!(
            MappingRecord::decode(&[0xff, 0xfe, 0x00]),
            Err(StorageError::InvalidData(_))
        ));
    }

    #[test]
    fn record_visit_overwrites_metadata() {
        let mut record = MappingRecord::new("https://example.com");
        record.record_visit(&ClientMetadata::new("Windows 10", "Chrome"));
        record.record_visit(&ClientMetadata::new("Linux", "Firefox"));

        assert_eq!(record.count, 2);
        assert_eq!(record.os.as_deref(), Some("Linux"));
        assert_eq!(record.device.as_deref(), Some("Firefox"));
    }
}
