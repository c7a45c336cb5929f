//! Decoded value tree

use crate::datatypes::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One decoded element of a DLMS response
///
/// Leaves carry a scalar or byte-string rendering and no children. Arrays and
/// structures carry one child per decoded element, in wire order. A node is
/// immutable once built; use [`ValueNodeBuilder`] to assemble one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueNode {
    data_type: DataType,
    value: String,
    children: Vec<ValueNode>,
}

impl ValueNode {
    /// Create a childless node
    pub fn leaf(data_type: DataType, value: impl Into<String>) -> Self {
        Self {
            data_type,
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Rendered string of this element
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn children(&self) -> &[ValueNode] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&ValueNode> {
        self.children.get(index)
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        !self.data_type.is_container()
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{:?}", "", self.data_type, indent = depth * 2)?;
        if self.is_leaf() {
            write!(f, ": {}", self.value)?;
        } else {
            write!(f, ": {} element(s)", self.children.len())?;
        }
        for child in &self.children {
            writeln!(f)?;
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

/// Accumulates the children of a node while it is being decoded
#[derive(Debug)]
pub struct ValueNodeBuilder {
    data_type: DataType,
    value: String,
    children: Vec<ValueNode>,
}

impl ValueNodeBuilder {
    pub fn new(data_type: DataType, value: impl Into<String>) -> Self {
        Self {
            data_type,
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Create a builder with room for `capacity` children
    pub fn with_capacity(data_type: DataType, value: impl Into<String>, capacity: usize) -> Self {
        Self {
            data_type,
            value: value.into(),
            children: Vec::with_capacity(capacity),
        }
    }

    pub fn push_child(&mut self, child: ValueNode) {
        self.children.push(child);
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn build(self) -> ValueNode {
        ValueNode {
            data_type: self.data_type,
            value: self.value,
            children: self.children,
        }
    }
}
