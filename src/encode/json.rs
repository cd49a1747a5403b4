//! JSON response encoding.

use serde::Serialize;

use crate::encode::{Encodable, encode_seq};
use crate::error::EncodeError;
use crate::format::Format;
use crate::redact::Redact;

/// Encodes response values as JSON.
///
/// Cheap to construct; build one per request-handling unit instead of
/// sharing an instance whose indent flag might be toggled concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder {
    indent: bool,
}

impl JsonEncoder {
    /// Create an encoder producing compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle two-space pretty-printing for subsequent calls.
    pub fn set_indent(&mut self, indent: bool) {
        self.indent = indent;
    }

    /// Serialize one value using standard JSON rules, without redaction.
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
    /// The output of a multi-value call is a sequence of independent JSON
    /// documents with no separators, not one document. The first failing
    /// value aborts the call; no partial output is returned.
    pub fn encode_seq(&self, values: &[&dyn Encodable]) -> Result<Vec<u8>, EncodeError> {
        encode_seq(Format::Json, self.indent, values)
    }
}

pub(crate) fn to_bytes<T: Serialize + ?Sized>(
    value: &T,
    indent: bool,
) -> Result<Vec<u8>, EncodeError> {
    let bytes = if indent {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    Ok(bytes)
}
