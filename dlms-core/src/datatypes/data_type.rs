//! Data type catalog for DLMS/COSEM encoded values

use crate::error::{DlmsError, DlmsResult};
use serde::{Deserialize, Serialize};

/// Sizing rule of a data type on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSize {
    /// Payload has a fixed number of bytes and no length prefix
    Fixed(usize),
    /// Payload is preceded by a length indicator
    Variable,
}

/// Data tag values recognised in a DLMS response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    NullData = 0x00,
    Array = 0x01,
    Structure = 0x02,
    Boolean = 0x03,
    BitString = 0x04,
    Int32 = 0x05,
    Uint32 = 0x06,
    OctetString = 0x09,
    String = 0x0A,
    Utf8String = 0x0C,
    Bcd = 0x0D,
    Int8 = 0x0F,
    Int16 = 0x10,
    Uint8 = 0x11,
    Uint16 = 0x12,
    CompactArray = 0x13,
    Int64 = 0x14,
    Uint64 = 0x15,
    Enum = 0x16,
    Float32 = 0x17,
    Float64 = 0x18,
    DateTime = 0x19,
    Date = 0x1A,
    Time = 0x1B,
}

impl DataType {
    /// Get the data type for a tag byte
    pub fn from_tag(tag: u8) -> DlmsResult<Self> {
        match tag {
            0x00 => Ok(DataType::NullData),
            0x01 => Ok(DataType::Array),
            0x02 => Ok(DataType::Structure),
            0x03 => Ok(DataType::Boolean),
            0x04 => Ok(DataType::BitString),
            0x05 => Ok(DataType::Int32),
            0x06 => Ok(DataType::Uint32),
            0x09 => Ok(DataType::OctetString),
            0x0A => Ok(DataType::String),
            0x0C => Ok(DataType::Utf8String),
            0x0D => Ok(DataType::Bcd),
            0x0F => Ok(DataType::Int8),
            0x10 => Ok(DataType::Int16),
            0x11 => Ok(DataType::Uint8),
            0x12 => Ok(DataType::Uint16),
            0x13 => Ok(DataType::CompactArray),
            0x14 => Ok(DataType::Int64),
            0x15 => Ok(DataType::Uint64),
            0x16 => Ok(DataType::Enum),
            0x17 => Ok(DataType::Float32),
            0x18 => Ok(DataType::Float64),
            0x19 => Ok(DataType::DateTime),
            0x1A => Ok(DataType::Date),
            0x1B => Ok(DataType::Time),
            _ => Err(DlmsError::UnknownTag(tag)),
        }
    }

    /// Convert the data type back to its tag byte
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Intrinsic payload size, or `Variable` when a length indicator follows the tag
    pub fn size(self) -> TypeSize {
        match self {
            DataType::NullData => TypeSize::Fixed(0),
            DataType::Boolean | DataType::Int8 | DataType::Uint8 | DataType::Enum => {
                TypeSize::Fixed(1)
            }
            DataType::Int16 | DataType::Uint16 => TypeSize::Fixed(2),
            DataType::Int32 | DataType::Uint32 | DataType::Float32 => TypeSize::Fixed(4),
            DataType::Int64 | DataType::Uint64 | DataType::Float64 => TypeSize::Fixed(8),
            DataType::Date => TypeSize::Fixed(5),
            DataType::Time => TypeSize::Fixed(4),
            DataType::DateTime => TypeSize::Fixed(12),
            DataType::Array
            | DataType::Structure
            | DataType::BitString
            | DataType::OctetString
            | DataType::String
            | DataType::Utf8String
            | DataType::Bcd
            | DataType::CompactArray => TypeSize::Variable,
        }
    }

    /// Whether the length indicator counts child elements rather than bytes
    pub fn is_container(self) -> bool {
        matches!(self, DataType::Array | DataType::Structure)
    }
}

impl TryFrom<u8> for DataType {
    type Error = DlmsError;

    fn try_from(tag: u8) -> DlmsResult<Self> {
        DataType::from_tag(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_roundtrips_every_known_tag() {
        for tag in 0u8..=0xFF {
            if let Ok(data_type) = DataType::from_tag(tag) {
                assert_eq!(data_type.tag(), tag);
            }
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert!(matches!(DataType::from_tag(0xFE), Err(DlmsError::UnknownTag(0xFE))));
        assert!(matches!(DataType::from_tag(0x07), Err(DlmsError::UnknownTag(0x07))));
    }

    #[test]
    fn test_sizes() {
        assert_eq!(DataType::Uint16.size(), TypeSize::Fixed(2));
        assert_eq!(DataType::DateTime.size(), TypeSize::Fixed(12));
        assert_eq!(DataType::OctetString.size(), TypeSize::Variable);
        assert_eq!(DataType::Bcd.size(), TypeSize::Variable);
    }

    #[test]
    fn test_containers() {
        assert!(DataType::Array.is_container());
        assert!(DataType::Structure.is_container());
        assert!(!DataType::OctetString.is_container());
        assert!(!DataType::CompactArray.is_container());
        // every container is length-prefixed
        assert_eq!(DataType::Structure.size(), TypeSize::Variable);
    }
}
