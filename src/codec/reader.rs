//! Cursor over a versioned binary record buffer.
//!
//! All three file formats begin with a 3-byte version tag. Sprite and
//! palette files follow it with a sequence of labeled records: one byte of
//! label length, the UTF-8 label bytes, then a fixed-size payload whose
//! length is a compile-time constant of the record kind (never stored in
//! the file). Record boundaries are never realigned; the first malformed
//! read fails the parse.

use crate::error::{GfxError, Result};
use crate::types::{FormatKind, FormatVersion};

/// One labeled record pulled off the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRecord<'a> {
    pub label: String,
    pub payload: &'a [u8],
}

/// Cursor over a byte buffer of labeled records.
#[derive(Debug)]
pub struct RecordReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> RecordReader<'a> {
    /// Open a buffer, validating its version tag against the version the
    /// format expects. Any mismatch is fatal.
    pub fn new(data: &'a [u8], kind: FormatKind) -> Result<Self> {
        if data.len() < 3 {
            return Err(GfxError::TruncatedRecord {
                offset: 0,
                needed: 3,
                remaining: data.len(),
            });
        }

        let found = FormatVersion::from_bytes([data[0], data[1], data[2]]);
        let expected = kind.expected_version();
        if found != expected {
            return Err(GfxError::VersionMismatch {
                kind,
                expected,
                found,
            });
        }

        Ok(Self { data, offset: 3 })
    }

    /// The version tag the buffer carried.
    pub fn version(&self) -> FormatVersion {
        FormatVersion::from_bytes([self.data[0], self.data[1], self.data[2]])
    }

    /// Current cursor offset from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True once the cursor has consumed the whole buffer.
    pub fn is_done(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Read one labeled record with a fixed payload size.
    ///
    /// Reads a label-length byte, that many UTF-8 label bytes, then exactly
    /// `payload_size` payload bytes, advancing the cursor past all three.
    pub fn read_labeled_record(&mut self, payload_size: usize) -> Result<LabeledRecord<'a>> {
        let label_len = self.take(1)?[0] as usize;
        let label_offset = self.offset;
        let label_bytes = self.take(label_len)?;
        let label = std::str::from_utf8(label_bytes)
            .map_err(|_| GfxError::InvalidEncoding {
                offset: label_offset,
            })?
            .to_string();
        let payload = self.take(payload_size)?;

        Ok(LabeledRecord { label, payload })
    }

    /// Read exactly `len` bytes, advancing the cursor.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let remaining = self.data.len() - self.offset;
        if len > remaining {
            return Err(GfxError::TruncatedRecord {
                offset: self.offset,
                needed: len,
                remaining,
            });
        }
        let slice = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(body: &[u8]) -> Vec<u8> {
        let mut data = vec![0, 0, 1];
        data.extend_from_slice(body);
        data
    }

    #[test]
    fn test_rejects_short_buffer() {
        let err = RecordReader::new(&[0, 0], FormatKind::Sprite).unwrap_err();
        assert!(matches!(err, GfxError::TruncatedRecord { needed: 3, .. }));
    }

    #[test]
    fn test_rejects_any_single_byte_version_skew() {
        for i in 0..3 {
            let mut data = tagged(&[]);
            data[i] ^= 0xFF;
            let err = RecordReader::new(&data, FormatKind::Palette).unwrap_err();
            assert!(
                matches!(err, GfxError::VersionMismatch { .. }),
                "byte {} skew not caught",
                i
            );
        }
    }

    #[test]
    fn test_version_gate_ignores_wellformed_body() {
        // A valid record body after a bad tag must still be rejected.
        let mut data = vec![0, 1, 1];
        data.extend_from_slice(&[1, b'A', 0xAB]);
        assert!(RecordReader::new(&data, FormatKind::Sprite).is_err());
    }

    #[test]
    fn test_read_labeled_record() {
        let data = tagged(&[3, b'f', b'o', b'o', 0xDE, 0xAD]);
        let mut reader = RecordReader::new(&data, FormatKind::Sprite).unwrap();

        let record = reader.read_labeled_record(2).unwrap();
        assert_eq!(record.label, "foo");
        assert_eq!(record.payload, &[0xDE, 0xAD]);
        assert!(reader.is_done());
        // new offset = 3 (tag) + 1 + 3 + 2
        assert_eq!(reader.offset(), 9);
    }

    #[test]
    fn test_empty_label_allowed() {
        let data = tagged(&[0, 0x42]);
        let mut reader = RecordReader::new(&data, FormatKind::Sprite).unwrap();
        let record = reader.read_labeled_record(1).unwrap();
        assert_eq!(record.label, "");
        assert_eq!(record.payload, &[0x42]);
    }

    #[test]
    fn test_invalid_utf8_label() {
        let data = tagged(&[2, 0xFF, 0xFE, 0x00]);
        let mut reader = RecordReader::new(&data, FormatKind::Sprite).unwrap();
        let err = reader.read_labeled_record(1).unwrap_err();
        assert!(matches!(err, GfxError::InvalidEncoding { offset: 4 }));
    }

    #[test]
    fn test_truncated_label() {
        let data = tagged(&[5, b'a', b'b']);
        let mut reader = RecordReader::new(&data, FormatKind::Sprite).unwrap();
        let err = reader.read_labeled_record(1).unwrap_err();
        assert!(matches!(
            err,
            GfxError::TruncatedRecord {
                needed: 5,
                remaining: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_truncated_payload() {
        let data = tagged(&[1, b'a', 0x01]);
        let mut reader = RecordReader::new(&data, FormatKind::Sprite).unwrap();
        let err = reader.read_labeled_record(4).unwrap_err();
        assert!(matches!(
            err,
            GfxError::TruncatedRecord {
                needed: 4,
                remaining: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_take_exact() {
        let data = tagged(&[1, 2, 3]);
        let mut reader = RecordReader::new(&data, FormatKind::Map).unwrap();
        assert_eq!(reader.take(3).unwrap(), &[1, 2, 3]);
        assert!(reader.is_done());
    }
}
