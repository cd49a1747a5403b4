//! Format encoders for response bodies.
//!
//! One encoder per supported format, sharing the same contract: serialize
//! values into body bytes, with an indent flag for two-space
//! pretty-printing. Encoders are plain structs selected at compile time;
//! the per-request dispatch over an inbound content type lives in
//! [`crate::negotiate`].

mod json;
mod xml;

pub use json::JsonEncoder;
pub use xml::XmlEncoder;

use serde::Serialize;

use crate::error::EncodeError;
use crate::format::Format;
use crate::redact::Redact;

/// A value that can appear in a response body.
///
/// Object-safe, so heterogeneous values can share one sequence. Provided
/// for every `T: Redact + Serialize`; encoding through this trait redacts
/// the value before marshaling it.
pub trait Encodable {
    /// Redact, then serialize into the given format.
    fn encode_to(&self, format: Format, indent: bool) -> Result<Vec<u8>, EncodeError>;
}

impl<T: Redact + Serialize> Encodable for T {
    fn encode_to(&self, format: Format, indent: bool) -> Result<Vec<u8>, EncodeError> {
        let visible = self.redacted();
        match format {
            Format::Json => json::to_bytes(&visible, indent),
            Format::Xml => xml::to_bytes(&visible, indent),
        }
    }
}

/// Serialize each value independently and concatenate the byte sequences
/// in input order, with no separators. The first failure aborts the call.
pub(crate) fn encode_seq(
    format: Format,
    indent: bool,
    values: &[&dyn Encodable],
) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    for value in values {
        out.extend_from_slice(&value.encode_to(format, indent)?);
    }
    Ok(out)
}
