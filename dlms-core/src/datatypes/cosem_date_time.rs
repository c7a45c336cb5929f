//! COSEM DateTime type for DLMS/COSEM protocol

use crate::datatypes::DataType;
use crate::datatypes::cosem_date::{CosemDate, NOT_SPECIFIED, require_len};
use crate::datatypes::cosem_time::CosemTime;
use crate::error::DlmsResult;
use serde::{Deserialize, Serialize};
use std::fmt;

const DEVIATION_NOT_SPECIFIED: i16 = i16::MIN;

/// Clock status flags for COSEM DateTime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
    InvalidValue = 0x01,
    DoubtfulValue = 0x02,
    DifferentClockBase = 0x04,
    InvalidClockStatus = 0x08,
    DaylightSavingActive = 0x80,
}

impl ClockStatus {
    const ALL: [ClockStatus; 5] = [
        ClockStatus::InvalidValue,
        ClockStatus::DoubtfulValue,
        ClockStatus::DifferentClockBase,
        ClockStatus::InvalidClockStatus,
        ClockStatus::DaylightSavingActive,
    ];

    /// Parse clock status flags from a byte
    pub fn from_byte(byte: u8) -> Vec<ClockStatus> {
        Self::ALL
            .into_iter()
            .filter(|status| byte & *status as u8 != 0)
            .collect()
    }
}

/// A COSEM date-time as read off the wire
///
/// Only the first eight bytes are required: date (0..5, byte 4 being the
/// day of week) and hour/minute/second (5..8). Hundredths, deviation and
/// clock status are picked up when the payload carries them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosemDateTime {
    date: CosemDate,
    time: CosemTime,
    deviation: Option<i16>,
    clock_status: Option<u8>,
}

impl CosemDateTime {
    pub const LENGTH: usize = 12;
    pub const MIN_LENGTH: usize = 8;

    /// Read a date-time from a payload of at least eight bytes
    pub fn decode(payload: &[u8]) -> DlmsResult<Self> {
        require_len(DataType::DateTime, payload, Self::MIN_LENGTH)?;

        let date = CosemDate::decode_as(DataType::DateTime, &payload[..CosemDate::LENGTH])?;
        let hundredths = payload.get(8).copied().unwrap_or(NOT_SPECIFIED);
        let time = CosemTime::decode_as(
            DataType::DateTime,
            &[payload[5], payload[6], payload[7], hundredths],
        )?;
        let deviation = match payload.get(9..11) {
            Some(&[high, low]) => Some(i16::from_be_bytes([high, low]))
                .filter(|deviation| *deviation != DEVIATION_NOT_SPECIFIED),
            _ => None,
        };
        let clock_status = payload.get(11).copied();

        Ok(Self {
            date,
            time,
            deviation,
            clock_status,
        })
    }

    pub fn date(&self) -> &CosemDate {
        &self.date
    }

    pub fn time(&self) -> &CosemTime {
        &self.time
    }

    /// Deviation from UTC in minutes
    pub fn deviation(&self) -> Option<i16> {
        self.deviation
    }

    /// Clock status flags, empty when the payload carried none
    pub fn clock_status(&self) -> Vec<ClockStatus> {
        self.clock_status
            .filter(|byte| *byte != NOT_SPECIFIED)
            .map(ClockStatus::from_byte)
            .unwrap_or_default()
    }
}

impl fmt::Display for CosemDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DlmsError;

    #[test]
    fn test_cosem_date_time_full() {
        let bytes = [
            0x07, 0xE8, 0x03, 0x1C, 0x04, 0x0C, 0x00, 0x1E, 0x00, 0xFF, 0x88, 0x80,
        ];
        let dt = CosemDateTime::decode(&bytes).unwrap();
        assert_eq!(dt.to_string(), "2024/03/28 12:00:30");
        assert_eq!(dt.date().day_of_week(), Some(4));
        assert_eq!(dt.time().hundredths(), Some(0));
        assert_eq!(dt.deviation(), Some(-120));
        assert_eq!(dt.clock_status(), vec![ClockStatus::DaylightSavingActive]);
    }

    #[test]
    fn test_cosem_date_time_minimal_payload() {
        let dt = CosemDateTime::decode(&[0xFF, 0xFF, 0xFF, 0x01, 0xFF, 0x17, 0x3B, 0xFF])
            .unwrap();
        assert_eq!(dt.to_string(), "YY/MM/01 23:59:SS");
        assert_eq!(dt.deviation(), None);
        assert!(dt.clock_status().is_empty());
    }

    #[test]
    fn test_cosem_date_time_unspecified_deviation() {
        let bytes = [
            0x07, 0xE8, 0x01, 0x01, 0xFF, 0x00, 0x00, 0x00, 0xFF, 0x80, 0x00, 0xFF,
        ];
        let dt = CosemDateTime::decode(&bytes).unwrap();
        assert_eq!(dt.deviation(), None);
        assert!(dt.clock_status().is_empty());
    }

    #[test]
    fn test_cosem_date_time_short_payload() {
        assert!(matches!(
            CosemDateTime::decode(&[0x07, 0xE8, 0x01, 0x01, 0xFF, 0x00, 0x00]),
            Err(DlmsError::MalformedPayload {
                data_type: DataType::DateTime,
                expected: 8,
                actual: 7,
            })
        ));
    }
}
