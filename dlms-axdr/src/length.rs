//! Length indicator codec for variable-size A-XDR elements

use crate::error::{DlmsError, DlmsResult};

/// Largest indicator byte that is itself the length
const SHORT_FORM_MAX: u8 = 0x80;
/// Largest long-form indicator (four length octets follow)
const LONG_FORM_MAX: u8 = 0x84;

/// Decoded length indicator
///
/// For arrays and structures `length` is the number of child elements, for
/// every other variable-size type it is the payload byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthDescriptor {
    /// Payload byte length or element count
    pub length: usize,
    /// Bytes taken by the indicator, including any length octets
    pub header_len: usize,
}

impl LengthDescriptor {
    /// Decode a length indicator
    ///
    /// `bytes` starts at the indicator byte, i.e. just past the tag.
    pub fn decode(bytes: &[u8]) -> DlmsResult<Self> {
        let Some(&indicator) = bytes.first() else {
            return Err(DlmsError::InvalidData(
                "Not enough bytes for length".to_string(),
            ));
        };

        if indicator <= SHORT_FORM_MAX {
            return Ok(Self {
                length: indicator as usize,
                header_len: 1,
            });
        }
        if indicator > LONG_FORM_MAX {
            return Err(DlmsError::MalformedLength(indicator));
        }

        let length_of_length = (indicator & 0x0F) as usize;
        let Some(octets) = bytes.get(1..1 + length_of_length) else {
            return Err(DlmsError::InvalidData(format!(
                "Not enough bytes for long length: need {}, have {}",
                length_of_length,
                bytes.len() - 1
            )));
        };
        let length = octets
            .iter()
            .fold(0usize, |len, &byte| (len << 8) | byte as usize);

        Ok(Self {
            length,
            header_len: 1 + length_of_length,
        })
    }

    /// Decode the length indicator of a tag-prefixed element
    pub fn decode_element(element: &[u8]) -> DlmsResult<Self> {
        Self::decode(element.get(1..).unwrap_or_default())
    }

    /// Offset of the payload measured from the tag byte
    pub fn offset(&self) -> usize {
        1 + self.header_len
    }

    /// Encode a length in the shortest indicator form
    pub fn encode(length: usize) -> Vec<u8> {
        if length <= SHORT_FORM_MAX as usize {
            return vec![length as u8];
        }
        let bytes = (length as u32).to_be_bytes();
        let skip = bytes.iter().take_while(|byte| **byte == 0).count();
        let mut result = Vec::with_capacity(1 + bytes.len() - skip);
        result.push(0x80 | (bytes.len() - skip) as u8);
        result.extend_from_slice(&bytes[skip..]);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_form() {
        let desc = LengthDescriptor::decode(&[0x05, 0xAA]).unwrap();
        assert_eq!(desc, LengthDescriptor { length: 5, header_len: 1 });
        assert_eq!(desc.offset(), 2);
    }

    #[test]
    fn test_boundary_table() {
        let cases: [(&[u8], usize, usize); 5] = [
            (&[0x80], 128, 2),
            (&[0x81, 0x05], 5, 3),
            (&[0x82, 0x01, 0x00], 256, 4),
            (&[0x83, 0x01, 0x00, 0x00], 65536, 5),
            (&[0x84, 0x00, 0x00, 0x01, 0x00], 256, 6),
        ];
        for (bytes, length, offset) in cases {
            let desc = LengthDescriptor::decode(bytes).unwrap();
            assert_eq!(desc.length, length, "indicator {:02X?}", bytes);
            assert_eq!(desc.offset(), offset, "indicator {:02X?}", bytes);
        }
    }

    #[test]
    fn test_two_octet_length_is_unsigned() {
        let desc = LengthDescriptor::decode(&[0x82, 0xFF, 0xFE]).unwrap();
        assert_eq!(desc.length, 0xFFFE);
    }

    #[test]
    fn test_malformed_indicator() {
        assert!(matches!(
            LengthDescriptor::decode(&[0x85, 0, 0, 0, 0, 0]),
            Err(DlmsError::MalformedLength(0x85))
        ));
        assert!(matches!(
            LengthDescriptor::decode(&[0xFF]),
            Err(DlmsError::MalformedLength(0xFF))
        ));
    }

    #[test]
    fn test_truncated_long_form() {
        assert!(matches!(
            LengthDescriptor::decode(&[0x82, 0x01]),
            Err(DlmsError::InvalidData(_))
        ));
        assert!(matches!(
            LengthDescriptor::decode(&[]),
            Err(DlmsError::InvalidData(_))
        ));
    }

    #[test]
    fn test_decode_element_skips_tag() {
        let desc = LengthDescriptor::decode_element(&[0x09, 0x81, 0x90]).unwrap();
        assert_eq!(desc.length, 0x90);
        assert_eq!(desc.offset(), 3);
        assert!(LengthDescriptor::decode_element(&[0x09]).is_err());
    }

    #[test]
    fn test_encode() {
        assert_eq!(LengthDescriptor::encode(0x80), vec![0x80]);
        assert_eq!(LengthDescriptor::encode(0x90), vec![0x81, 0x90]);
        assert_eq!(LengthDescriptor::encode(256), vec![0x82, 0x01, 0x00]);
        assert_eq!(LengthDescriptor::encode(0x01_0000), vec![0x83, 0x01, 0x00, 0x00]);
        let desc = LengthDescriptor::decode(&LengthDescriptor::encode(300)).unwrap();
        assert_eq!(desc.length, 300);
    }
}
