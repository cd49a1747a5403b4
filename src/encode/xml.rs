//! XML response encoding.

use quick_xml::se::Serializer;
use serde::Serialize;

use crate::encode::{Encodable, encode_seq};
use crate::error::EncodeError;
use crate::format::Format;
use crate::redact::Redact;

/// Encodes response values as XML.
///
/// The document root element is named after the value's type. Fields
/// carrying `#[serde(skip)]` never appear in output; fields with an
/// emptiness-conditional skip are dropped only when empty. Marshal
/// failures are propagated, never swallowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlEncoder {
    indent: bool,
}

impl XmlEncoder {
    /// Create an encoder producing compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle two-space pretty-printing for subsequent calls.
    pub fn set_indent(&mut self, indent: bool) {
        self.indent = indent;
    }

    /// Serialize one value using standard XML rules, without redaction.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, EncodeError> {
        to_bytes(value, self.indent)
    }

    /// Redact `value`, then serialize the visible copy.
    pub fn encode_redacted<T: Redact + Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, EncodeError> {
        to_bytes(&value.redacted(), self.indent)
    }

    /// Serialize each value independently (redacted) and concatenate the
    /// results in input order.
    ///
    /// The output of a multi-value call is a sequence of independent XML
    /// documents with no separators, not one document. The first failing
    /// value aborts the call; no partial output is returned.
    pub fn encode_seq(&self, values: &[&dyn Encodable]) -> Result<Vec<u8>, EncodeError> {
        encode_seq(Format::Xml, self.indent, values)
    }
}

pub(crate) fn to_bytes<T: Serialize + ?Sized>(
    value: &T,
    indent: bool,
) -> Result<Vec<u8>, EncodeError> {
    let mut out = String::new();
    let mut ser = Serializer::new(&mut out);
    if indent {
        ser.indent(' ', 2);
    }
    value.serialize(ser)?;
    Ok(out.into_bytes())
}
