//! Link layer interface for DLMS/COSEM
//!
//! The decoder only consumes the bytes a link layer reads back from a
//! meter. Framing (HDLC, wrapper) and the physical transport live behind
//! the [`LinkLayer`] trait and are provided by the caller.

pub mod error;
pub mod link;

pub use error::{DlmsError, DlmsResult};
pub use link::LinkLayer;
#[cfg(any(test, feature = "mock"))]
pub use link::MockLinkLayer;
