//! Core types for decoding DLMS/COSEM data
//!
//! This crate provides the data type catalog, the COSEM date/time views,
//! the decoded value tree and the error type shared by the other crates.

pub mod error;
pub mod datatypes;

pub use error::{DlmsError, DlmsResult};
pub use datatypes::{DataType, TypeSize, ValueNode, ValueNodeBuilder};
