//! COSEM date type for DLMS/COSEM protocol

use crate::datatypes::DataType;
use crate::error::{DlmsError, DlmsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte value marking a date/time field as not specified
pub const NOT_SPECIFIED: u8 = 0xff;

/// Field types for COSEM date/time formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    Month,
    DayOfMonth,
    DayOfWeek,
    Hour,
    Minute,
    Second,
    Hundredths,
}

impl Field {
    /// Placeholder rendered in place of a field that is not specified
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Year => "YY",
            Field::Month => "MM",
            Field::DayOfMonth => "DD",
            Field::DayOfWeek => "WW",
            Field::Hour => "HH",
            Field::Minute => "mm",
            Field::Second => "SS",
            Field::Hundredths => "hh",
        }
    }
}

/// Check that a payload carries at least `expected` bytes
pub(crate) fn require_len(data_type: DataType, payload: &[u8], expected: usize) -> DlmsResult<()> {
    if payload.len() < expected {
        return Err(DlmsError::MalformedPayload {
            data_type,
            expected,
            actual: payload.len(),
        });
    }
    Ok(())
}

/// Write a one-byte field as two digits, or its placeholder when not specified
pub(crate) fn write_field(f: &mut fmt::Formatter<'_>, value: u8, field: Field) -> fmt::Result {
    if value == NOT_SPECIFIED {
        f.write_str(field.placeholder())
    } else {
        write!(f, "{:02}", value)
    }
}

fn field_value(value: u8) -> Option<u8> {
    (value != NOT_SPECIFIED).then_some(value)
}

/// A COSEM date as read off the wire
///
/// Fields holding 0xff are "not specified" and render as placeholders,
/// e.g. `2022/MM/15`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosemDate {
    octet_string: [u8; 5],
}

impl CosemDate {
    pub const LENGTH: usize = 5;

    /// Read a date from the first five bytes of a payload
    pub fn decode(payload: &[u8]) -> DlmsResult<Self> {
        Self::decode_as(DataType::Date, payload)
    }

    pub(crate) fn decode_as(data_type: DataType, payload: &[u8]) -> DlmsResult<Self> {
        require_len(data_type, payload, Self::LENGTH)?;
        let mut octet_string = [0u8; 5];
        octet_string.copy_from_slice(&payload[..Self::LENGTH]);
        Ok(Self { octet_string })
    }

    /// Year, or `None` when both year bytes are 0xff
    pub fn year(&self) -> Option<u16> {
        if self.octet_string[0] == NOT_SPECIFIED && self.octet_string[1] == NOT_SPECIFIED {
            None
        } else {
            Some(u16::from_be_bytes([self.octet_string[0], self.octet_string[1]]))
        }
    }

    pub fn month(&self) -> Option<u8> {
        field_value(self.octet_string[2])
    }

    pub fn day_of_month(&self) -> Option<u8> {
        field_value(self.octet_string[3])
    }

    /// Day of week, 1 is Monday
    pub fn day_of_week(&self) -> Option<u8> {
        field_value(self.octet_string[4])
    }

    /// Raw encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.octet_string
    }
}

impl fmt::Display for CosemDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year() {
            Some(year) => write!(f, "{:04}", year)?,
            None => f.write_str(Field::Year.placeholder())?,
        }
        f.write_str("/")?;
        write_field(f, self.octet_string[2], Field::Month)?;
        f.write_str("/")?;
        write_field(f, self.octet_string[3], Field::DayOfMonth)
    }
}
