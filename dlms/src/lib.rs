//! DLMS/COSEM response decoding
//!
//! Decodes the A-XDR data returned by a meter for a `get` request into a
//! typed value tree, and renders scalars, dates and times as text.
//!
//! # Architecture
//!
//! - `dlms-core`: data type catalog, COSEM date/time views, value tree, errors
//! - `dlms-axdr`: length codec, value formatter, tree decoder
//! - `dlms-transport`: the link layer interface responses are read through
//!
//! # Usage
//!
//! ```
//! use dlms::{DataType, decode};
//!
//! let node = decode(&[0x01, 0x02, 0x11, 0x01, 0x11, 0x02]).unwrap();
//! assert_eq!(node.data_type(), DataType::Array);
//! assert_eq!(node.len(), 2);
//! ```

pub mod client;

// Re-export core types
pub use dlms_core::{DlmsError, DlmsResult};
pub use dlms_core::datatypes::*;

// Re-export decoding API
pub use dlms_axdr::{
    AxdrDecoder, DecoderSettings, LengthDescriptor, date_string, date_time_string, decode,
    formatter, payload, render, time_string, type_of,
};

pub use dlms_transport::LinkLayer;
pub use client::ResponseReader;
