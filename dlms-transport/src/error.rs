//! Error types shared with dlms-core

pub use dlms_core::error::{DlmsError, DlmsResult};
