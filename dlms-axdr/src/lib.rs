//! A-XDR response decoding for DLMS/COSEM protocol
//!
//! Turns the raw buffer returned by a meter into a [`ValueNode`] tree and
//! renders scalars, dates and times as text.
//!
//! ```
//! use dlms_axdr::decode;
//!
//! // structure { integer 5, long-unsigned 1000 }
//! let node = decode(&[0x02, 0x02, 0x0F, 0x05, 0x12, 0x03, 0xE8]).unwrap();
//! assert_eq!(node.children()[1].value(), "1000");
//! ```

pub mod error;
pub mod length;
pub mod formatter;
pub mod decoder;

pub use error::{DlmsError, DlmsResult};
pub use length::LengthDescriptor;
pub use decoder::{
    AxdrDecoder, DecoderSettings, date_string, date_time_string, decode, payload, render,
    time_string, type_of,
};
pub use dlms_core::datatypes::{DataType, ValueNode};
