//! COSEM Time type for DLMS/COSEM protocol

use crate::datatypes::DataType;
use crate::datatypes::cosem_date::{Field, NOT_SPECIFIED, require_len, write_field};
use crate::error::DlmsResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A COSEM time as read off the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosemTime {
    octet_string: [u8; 4],
}

impl CosemTime {
    pub const LENGTH: usize = 4;

    /// Read a time from the first four bytes of a payload
    pub fn decode(payload: &[u8]) -> DlmsResult<Self> {
        Self::decode_as(DataType::Time, payload)
    }

    pub(crate) fn decode_as(data_type: DataType, payload: &[u8]) -> DlmsResult<Self> {
        require_len(data_type, payload, Self::LENGTH)?;
        let mut octet_string = [0u8; 4];
        octet_string.copy_from_slice(&payload[..Self::LENGTH]);
        Ok(Self { octet_string })
    }

    pub fn hour(&self) -> Option<u8> {
        self.field(0)
    }

    pub fn minute(&self) -> Option<u8> {
        self.field(1)
    }

    pub fn second(&self) -> Option<u8> {
        self.field(2)
    }

    pub fn hundredths(&self) -> Option<u8> {
        self.field(3)
    }

    fn field(&self, index: usize) -> Option<u8> {
        let value = self.octet_string[index];
        (value != NOT_SPECIFIED).then_some(value)
    }
}

impl fmt::Display for CosemTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_field(f, self.octet_string[0], Field::Hour)?;
        f.write_str(":")?;
        write_field(f, self.octet_string[1], Field::Minute)?;
        f.write_str(":")?;
        write_field(f, self.octet_string[2], Field::Second)
    }
}
