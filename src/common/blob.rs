//! In-memory byte containers used both as sheet sources and as export targets.
//!
//! A [`Blob`] is an immutable byte payload tagged with a MIME type. A [`File`]
//! is a blob that also carries a name and a last-modified timestamp.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::encoding::decode_text;

/// Immutable byte payload with a MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    bytes: Bytes,
    mime_type: String,
}

impl Blob {
    /// Create a blob from a payload and a MIME type.
    pub fn new(bytes: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        Blob {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Create a blob with no MIME type.
    pub fn untyped(bytes: impl Into<Bytes>) -> Self {
        Self::new(bytes, String::new())
    }

    /// The raw payload.
    #[inline]
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// The MIME type, empty when unknown.
    #[inline]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Payload length in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Decode the whole payload as UTF-8 text, dropping a leading BOM.
    pub fn text(&self) -> String {
        decode_text(&self.bytes, true).into_owned()
    }
}

impl From<Bytes> for Blob {
    fn from(bytes: Bytes) -> Self {
        Blob::untyped(bytes)
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Blob::untyped(bytes)
    }
}

impl From<String> for Blob {
    fn from(text: String) -> Self {
        Blob::new(text, "text/plain")
    }
}

impl From<&'static str> for Blob {
    fn from(text: &'static str) -> Self {
        Blob::new(text, "text/plain")
    }
}

/// A named [`Blob`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    blob: Blob,
    name: String,
    last_modified: DateTime<Utc>,
}

impl File {
    /// Create a file stamped with the current time.
    pub fn new(bytes: impl Into<Bytes>, name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self::from_blob(Blob::new(bytes, mime_type), name)
    }

    /// Give a name to an existing blob.
    pub fn from_blob(blob: Blob, name: impl Into<String>) -> Self {
        File {
            blob,
            name: name.into(),
            last_modified: Utc::now(),
        }
    }

    /// Override the last-modified timestamp.
    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = last_modified;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    #[inline]
    pub fn blob(&self) -> &Blob {
        &self.blob
    }

    #[inline]
    pub fn bytes(&self) -> &Bytes {
        self.blob.bytes()
    }

    #[inline]
    pub fn mime_type(&self) -> &str {
        self.blob.mime_type()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.blob.size()
    }

    /// Decode the whole payload as UTF-8 text, dropping a leading BOM.
    pub fn text(&self) -> String {
        self.blob.text()
    }

    pub fn into_blob(self) -> Blob {
        self.blob
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_blob_accessors() {
        let blob = Blob::new("a,b", "text/csv");
        assert_eq!(blob.size(), 3);
        assert_eq!(blob.mime_type(), "text/csv");
        assert_eq!(blob.text(), "a,b");
        assert_eq!(Blob::from(vec![0x61u8]).mime_type(), "");
    }

    #[test]
    fn test_file_keeps_blob_payload() {
        let stamp = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let file = File::new("x\ty", "data.tsv", "text/tsv").with_last_modified(stamp);
        assert_eq!(file.name(), "data.tsv");
        assert_eq!(file.mime_type(), "text/tsv");
        assert_eq!(file.last_modified(), stamp);
        assert_eq!(file.text(), "x\ty");
        assert_eq!(file.into_blob(), Blob::new("x\ty", "text/tsv"));
    }
}
