//! String rendering of decoded A-XDR payloads

use crate::error::{DlmsError, DlmsResult};
use dlms_core::datatypes::{CosemDate, CosemDateTime, CosemTime, DataType};
use std::fmt::Write;

/// Render a payload of the given type
///
/// Byte-oriented types (and arrays/structures) render as uppercase hex with
/// a space after every byte; numbers render as decimal text; dates and times
/// render with placeholders for unspecified fields.
pub fn render(data_type: DataType, payload: &[u8]) -> DlmsResult<String> {
    let value = match data_type {
        DataType::NullData => String::new(),
        DataType::Array
        | DataType::Structure
        | DataType::Bcd
        | DataType::BitString
        | DataType::Boolean
        | DataType::Enum
        | DataType::OctetString => to_hex(payload),
        DataType::Int8 => i8::from_be_bytes(fixed(data_type, payload)?).to_string(),
        DataType::Uint8 => u8::from_be_bytes(fixed(data_type, payload)?).to_string(),
        DataType::Int16 => i16::from_be_bytes(fixed(data_type, payload)?).to_string(),
        DataType::Uint16 => u16::from_be_bytes(fixed(data_type, payload)?).to_string(),
        DataType::Int32 => i32::from_be_bytes(fixed(data_type, payload)?).to_string(),
        DataType::Uint32 => u32::from_be_bytes(fixed(data_type, payload)?).to_string(),
        DataType::Int64 => i64::from_be_bytes(fixed(data_type, payload)?).to_string(),
        DataType::Uint64 => u64::from_be_bytes(fixed(data_type, payload)?).to_string(),
        DataType::Float32 => format!("{:?}", f32::from_be_bytes(fixed(data_type, payload)?)),
        DataType::Float64 => format!("{:?}", f64::from_be_bytes(fixed(data_type, payload)?)),
        DataType::String => payload
            .iter()
            .map(|&byte| if byte.is_ascii() { byte as char } else { char::REPLACEMENT_CHARACTER })
            .collect(),
        DataType::Utf8String => String::from_utf8_lossy(payload).into_owned(),
        DataType::Date => render_date(payload)?,
        DataType::Time => render_time(payload)?,
        DataType::DateTime => render_date_time(payload)?,
        DataType::CompactArray => return Err(DlmsError::NoSuchType(data_type)),
    };
    Ok(value)
}

/// Render a date payload as `YYYY/MM/DD`
pub fn render_date(payload: &[u8]) -> DlmsResult<String> {
    Ok(CosemDate::decode(payload)?.to_string())
}

/// Render a time payload as `HH:mm:SS`
pub fn render_time(payload: &[u8]) -> DlmsResult<String> {
    Ok(CosemTime::decode(payload)?.to_string())
}

/// Render a date-time payload as `YYYY/MM/DD HH:mm:SS`
pub fn render_date_time(payload: &[u8]) -> DlmsResult<String> {
    Ok(CosemDateTime::decode(payload)?.to_string())
}

/// Uppercase hex dump, every byte followed by a space
pub fn to_hex(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len() * 3);
    for byte in bytes {
        // writing to a String cannot fail
        let _ = write!(result, "{:02X} ", byte);
    }
    result
}

fn fixed<const N: usize>(data_type: DataType, payload: &[u8]) -> DlmsResult<[u8; N]> {
    payload
        .get(..N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(DlmsError::MalformedPayload {
            data_type,
            expected: N,
            actual: payload.len(),
        })
}
