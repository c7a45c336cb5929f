//! A-XDR decoder for DLMS/COSEM responses

use crate::error::{DlmsError, DlmsResult};
use crate::formatter;
use crate::length::LengthDescriptor;
use dlms_core::datatypes::{DataType, TypeSize, ValueNode, ValueNodeBuilder};

/// Decoder settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderSettings {
    /// Fail when a container declares more elements than the buffer holds.
    /// When unset, decoding stops at the end of the buffer and the container
    /// keeps the children found so far.
    pub strict: bool,
    /// Maximum nesting of arrays and structures
    pub max_depth: usize,
}

impl DecoderSettings {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Create settings with the permissive defaults
    pub fn new() -> Self {
        Self {
            strict: false,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Create settings that reject truncated containers
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::new()
        }
    }

    /// Create permissive settings with a custom nesting limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::new()
        }
    }
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Location of an element's payload, measured from its tag byte
#[derive(Debug, Clone, Copy)]
struct Span {
    data_type: DataType,
    offset: usize,
    /// Byte length for leaves, element count for containers
    length: usize,
}

impl Span {
    fn locate(element: &[u8]) -> DlmsResult<Self> {
        let tag = *element
            .first()
            .ok_or_else(|| DlmsError::InvalidData("Empty element".to_string()))?;
        let data_type = DataType::from_tag(tag)?;

        let span = match data_type.size() {
            TypeSize::Fixed(size) => Self {
                data_type,
                offset: 1,
                length: size,
            },
            TypeSize::Variable => {
                let desc = LengthDescriptor::decode_element(element)?;
                Self {
                    data_type,
                    offset: desc.offset(),
                    length: desc.length,
                }
            }
        };

        if !data_type.is_container() && span.end() > element.len() {
            return Err(DlmsError::InvalidData(format!(
                "{:?} needs {} bytes, have {}",
                data_type,
                span.end(),
                element.len()
            )));
        }
        Ok(span)
    }

    fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }

    /// Payload bytes; for containers, the bytes after the header clamped to the buffer
    fn payload<'a>(&self, element: &'a [u8]) -> &'a [u8] {
        &element[self.offset..self.end().min(element.len())]
    }
}

fn verify(buffer: &[u8]) -> DlmsResult<()> {
    if buffer.len() < 2 {
        return Err(DlmsError::InvalidData(format!(
            "Buffer too short: need at least 2 bytes, have {}",
            buffer.len()
        )));
    }
    Ok(())
}

/// Get the data type of the top-level element
pub fn type_of(buffer: &[u8]) -> DlmsResult<DataType> {
    verify(buffer)?;
    DataType::from_tag(buffer[0])
}

/// Get the data type and payload bytes of the top-level element
pub fn payload(buffer: &[u8]) -> DlmsResult<(DataType, &[u8])> {
    verify(buffer)?;
    let span = Span::locate(buffer)?;
    Ok((span.data_type, span.payload(buffer)))
}

/// Render the top-level element without decoding its children
pub fn render(buffer: &[u8]) -> DlmsResult<String> {
    let (data_type, payload) = payload(buffer)?;
    formatter::render(data_type, payload)
}

/// Render the top-level element's payload as a date, whatever its tag
pub fn date_string(buffer: &[u8]) -> DlmsResult<String> {
    formatter::render_date(payload(buffer)?.1)
}

/// Render the top-level element's payload as a time, whatever its tag
pub fn time_string(buffer: &[u8]) -> DlmsResult<String> {
    formatter::render_time(payload(buffer)?.1)
}

/// Render the top-level element's payload as a date-time, whatever its tag
///
/// Meters usually report their clock as a 12-byte octet string, so this is
/// the usual way to read one.
pub fn date_time_string(buffer: &[u8]) -> DlmsResult<String> {
    formatter::render_date_time(payload(buffer)?.1)
}

/// Decode a response with the default settings
pub fn decode(buffer: &[u8]) -> DlmsResult<ValueNode> {
    AxdrDecoder::new().decode(buffer)
}

/// A-XDR decoder producing a [`ValueNode`] tree
#[derive(Debug, Clone, Default)]
pub struct AxdrDecoder {
    settings: DecoderSettings,
}

impl AxdrDecoder {
    /// Create a decoder with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: DecoderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DecoderSettings {
        &self.settings
    }

    /// Decode one tag-prefixed value, recursing into arrays and structures
    pub fn decode(&self, buffer: &[u8]) -> DlmsResult<ValueNode> {
        verify(buffer)?;
        let (node, consumed) = self.decode_element(buffer, 0)?;
        if consumed < buffer.len() {
            log::debug!(
                "{} trailing byte(s) after {:?} value",
                buffer.len() - consumed,
                node.data_type()
            );
        }
        Ok(node)
    }

    /// Decode the element at the start of `element`, returning it and the bytes it spans
    fn decode_element(&self, element: &[u8], depth: usize) -> DlmsResult<(ValueNode, usize)> {
        let span = Span::locate(element)?;
        let value = formatter::render(span.data_type, span.payload(element))?;

        if !span.data_type.is_container() {
            log::trace!("{:?} at depth {} ({} bytes)", span.data_type, depth, span.end());
            return Ok((ValueNode::leaf(span.data_type, value), span.end()));
        }

        if depth >= self.settings.max_depth {
            return Err(DlmsError::InvalidData(format!(
                "Nesting deeper than {} levels",
                self.settings.max_depth
            )));
        }

        let count = span.length;
        // every child takes at least one byte
        let capacity = count.min(element.len() - span.offset);
        let mut builder = ValueNodeBuilder::with_capacity(span.data_type, value, capacity);
        let mut position = span.offset;
        for _ in 0..count {
            let rest = &element[position..];
            if rest.is_empty() {
                if self.settings.strict {
                    return Err(DlmsError::InvalidData(format!(
                        "{:?} declares {} elements, found {}",
                        span.data_type,
                        count,
                        builder.child_count()
                    )));
                }
                log::debug!(
                    "{:?} declares {} elements, buffer ends after {}",
                    span.data_type,
                    count,
                    builder.child_count()
                );
                break;
            }
            let (child, consumed) = self.decode_element(rest, depth + 1)?;
            builder.push_child(child);
            position += consumed;
        }

        log::trace!(
            "{:?} at depth {} with {} element(s) ({} bytes)",
            span.data_type,
            depth,
            builder.child_count(),
            position
        );
        Ok((builder.build(), position))
    }
}
