//! The 272-byte dictionary header: version, creation time, and a
//! NUL-terminated UTF-8 description.

use crate::error::Error;

/// Fixed size of the serialized header, in bytes.
pub const HEADER_SIZE: usize = 272;
const DESCRIPTION_SIZE: usize = 256;

/// The only system-dictionary version this crate recognises.
pub const SYSTEM_DICT_VERSION_1: u64 = 0x0001_0000_0000_0000;

/// Parsed dictionary header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: u64,
    pub create_time: i64,
    pub description: String,
}

impl Header {
    pub fn new(version: u64, create_time: i64, description: impl Into<String>) -> Self {
        Header {
            version,
            create_time,
            description: description.into(),
        }
    }

    /// Read a header starting at `offset` in `bytes`.
    pub fn read(bytes: &[u8], offset: usize) -> Header {
        let version = u64::from_le_bytes(bytes[offset..offset + 8].try_into().unwrap());
        let create_time =
            i64::from_le_bytes(bytes[offset + 8..offset + 16].try_into().unwrap());
        let desc_bytes = &bytes[offset + 16..offset + 16 + DESCRIPTION_SIZE];
        let nul_pos = desc_bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(DESCRIPTION_SIZE);
        let description = String::from_utf8_lossy(&desc_bytes[..nul_pos]).into_owned();

        Header {
            version,
            create_time,
            description,
        }
    }

    /// Serialize to a fixed 272-byte array.
    pub fn write(&self) -> Result<[u8; HEADER_SIZE], Error> {
        let desc_bytes = self.description.as_bytes();
        if desc_bytes.len() > DESCRIPTION_SIZE {
            return Err(Error::DescriptionTooLong(desc_bytes.len()));
        }

        let mut out = [0u8; HEADER_SIZE];
        out[0..8].copy_from_slice(&self.version.to_le_bytes());
        out[8..16].copy_from_slice(&self.create_time.to_le_bytes());
        out[16..16 + desc_bytes.len()].copy_from_slice(desc_bytes);
        // Remaining description bytes are already zero (NUL-padded).
        Ok(out)
    }

    /// True iff `version` is a recognised system-dictionary version.
    pub fn is_dictionary(version: u64) -> bool {
        version == SYSTEM_DICT_VERSION_1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_version_and_time() {
        let h = Header::new(SYSTEM_DICT_VERSION_1, 1_700_000_000, "synonym dictionary");
        let bytes = h.write().unwrap();
        let read = Header::read(&bytes, 0);
        assert_eq!(read, h);
    }

    #[test]
    fn empty_description_is_legal() {
        let h = Header::new(SYSTEM_DICT_VERSION_1, 0, "");
        let bytes = h.write().unwrap();
        let read = Header::read(&bytes, 0);
        assert_eq!(read.description, "");
    }

    #[test]
    fn description_without_nul_reads_full_256_bytes() {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..8].copy_from_slice(&SYSTEM_DICT_VERSION_1.to_le_bytes());
        // Fill all 256 description bytes with ASCII 'x', no NUL terminator.
        for b in &mut bytes[16..16 + DESCRIPTION_SIZE] {
            *b = b'x';
        }
        let read = Header::read(&bytes, 0);
        assert_eq!(read.description.len(), DESCRIPTION_SIZE);
    }

    #[test]
    fn description_too_long_is_rejected() {
        let h = Header::new(SYSTEM_DICT_VERSION_1, 0, "x".repeat(257));
        assert!(matches!(h.write(), Err(Error::DescriptionTooLong(257))));
    }

    #[test]
    fn recognises_only_system_version() {
        assert!(Header::is_dictionary(SYSTEM_DICT_VERSION_1));
        assert!(!Header::is_dictionary(0));
        assert!(!Header::is_dictionary(SYSTEM_DICT_VERSION_1 + 1));
    }

    #[test]
    fn header_at_nonzero_offset() {
        let h = Header::new(SYSTEM_DICT_VERSION_1, 42, "offset test");
        let mut buf = vec![0xFFu8; 10];
        buf.extend_from_slice(&h.write().unwrap());
        let read = Header::read(&buf, 10);
        assert_eq!(read, h);
    }
}
