use crate::datatypes::DataType;
use thiserror::Error;

/// Main error type for DLMS data decoding
#[derive(Error, Debug)]
pub enum DlmsError {
    #[error("Connection error: {0}")]
    Connection(#[from] std::io::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unknown data tag: 0x{0:02X}")]
    UnknownTag(u8),

    #[error("No rendering for data type {0:?}")]
    NoSuchType(DataType),

    #[error("Malformed length indicator: 0x{0:02X}")]
    MalformedLength(u8),

    #[error("Malformed {data_type:?} payload: expected at least {expected} bytes, got {actual}")]
    MalformedPayload {
        data_type: DataType,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for DLMS operations
pub type DlmsResult<T> = Result<T, DlmsError>;
