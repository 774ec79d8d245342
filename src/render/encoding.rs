//! Byte-to-text decoding with BOM detection.

use serde::{Deserialize, Serialize};

use crate::core::ReloadError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Text encoding assumed for files without a byte order mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    #[serde(rename = "utf-16le", alias = "utf16le")]
    Utf16Le,
    #[serde(rename = "utf-16be", alias = "utf16be")]
    Utf16Be,
}

impl TextEncoding {
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
        }
    }

    /// Detect encoding from a byte order mark.
    ///
    /// Returns the encoding and the payload with the mark removed.
    fn detect(bytes: &[u8]) -> Option<(Self, &[u8])> {
        if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
            Some((Self::Utf8, rest))
        } else if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
            Some((Self::Utf16Le, rest))
        } else if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
            Some((Self::Utf16Be, rest))
        } else {
            None
        }
    }

    /// Decode `bytes`, letting a byte order mark override `self`.
    pub fn decode(self, bytes: &[u8]) -> Result<String, ReloadError> {
        let (encoding, payload) = Self::detect(bytes).unwrap_or((self, bytes));

        match encoding {
            Self::Utf8 => std::str::from_utf8(payload)
                .map(str::to_owned)
                .map_err(|e| encoding.error(e.to_string())),
            Self::Utf16Le => encoding.decode_utf16(payload, u16::from_le_bytes),
            Self::Utf16Be => encoding.decode_utf16(payload, u16::from_be_bytes),
        }
    }

    fn decode_utf16(self, payload: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, ReloadError> {
        if payload.len() % 2 != 0 {
            return Err(self.error(format!("odd byte length {}", payload.len())));
        }

        let units: Vec<u16> = payload
            .chunks_exact(2)
            .map(|pair| unit([pair[0], pair[1]]))
            .collect();

        String::from_utf16(&units).map_err(|e| self.error(e.to_string()))
    }

    fn error(self, detail: String) -> ReloadError {
        ReloadError::Encoding {
            encoding: self.name(),
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    fn utf16le(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_le_bytes).collect()
    }

    fn utf16be(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_be_bytes).collect()
    }

    #[test]
    fn test_utf8_plain() {
        assert_eq!(TextEncoding::Utf8.decode("héllo".as_bytes()).unwrap(), "héllo");
    }

    #[test]
    fn test_empty_is_empty_string() {
        assert_eq!(TextEncoding::Utf8.decode(b"").unwrap(), "");
        assert_eq!(TextEncoding::Utf16Le.decode(b"").unwrap(), "");
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"{\"a\":1}");
        assert_eq!(TextEncoding::Utf8.decode(&bytes).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_bom_overrides_configured_encoding() {
        let mut bytes = UTF16_LE_BOM.to_vec();
        bytes.extend(utf16le("ok"));
        assert_eq!(TextEncoding::Utf8.decode(&bytes).unwrap(), "ok");

        let mut bytes = UTF16_BE_BOM.to_vec();
        bytes.extend(utf16be("ok"));
        assert_eq!(TextEncoding::Utf16Le.decode(&bytes).unwrap(), "ok");
    }

    #[test]
    fn test_configured_utf16_without_bom() {
        assert_eq!(TextEncoding::Utf16Le.decode(&utf16le("abc")).unwrap(), "abc");
        assert_eq!(TextEncoding::Utf16Be.decode(&utf16be("abc")).unwrap(), "abc");
    }

    #[test]
    fn test_invalid_utf8() {
        let err = TextEncoding::Utf8.decode(&[0x66, 0xFF, 0x6F]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
        assert!(err.to_string().contains("utf-8"));
    }

    #[test]
    fn test_odd_utf16_length() {
        let err = TextEncoding::Utf16Le.decode(&[0x61, 0x00, 0x62]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
    }

    #[test]
    fn test_unpaired_surrogate() {
        // 0xD800 alone is not valid UTF-16
        let err = TextEncoding::Utf16Le.decode(&[0x00, 0xD8]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
    }
}
