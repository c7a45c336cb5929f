//! Data types used in DLMS/COSEM protocol

pub mod data_type;
pub mod cosem_date;
pub mod cosem_time;
pub mod cosem_date_time;
pub mod value_node;

// Re-export types
pub use data_type::{DataType, TypeSize};
pub use cosem_date::{CosemDate, Field, NOT_SPECIFIED};
pub use cosem_time::CosemTime;
pub use cosem_date_time::{CosemDateTime, ClockStatus};
pub use value_node::{ValueNode, ValueNodeBuilder};
