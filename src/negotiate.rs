//! Per-request dispatch between the format encoders.

use http::{HeaderMap, Request, header};
use log::debug;
use serde::Serialize;

use crate::encode::{Encodable, JsonEncoder, XmlEncoder};
use crate::error::EncodeError;
use crate::format::Format;
use crate::redact::Redact;

/// Encoder selected from one inbound request's declared content type.
///
/// The format is resolved once at construction (header match wins over
/// the configured default, which wins over the JSON fallback) and the
/// value is immutable apart from its indent flag. Build one per request
/// and discard it with the response; the caller is responsible for
/// setting the outbound `Content-Type` header from [`format`](Self::format).
#[derive(Debug, Clone, Copy)]
pub struct NegotiatedEncoder {
    format: Format,
    json: JsonEncoder,
    xml: XmlEncoder,
}

impl NegotiatedEncoder {
    /// Negotiate from a raw `Content-Type` header value.
    ///
    /// An invalid default never reaches this constructor: unknown format
    /// identifiers are rejected when the default is parsed from
    /// configuration.
    pub fn new(content_type: Option<&str>, default: Option<Format>) -> Self {
        let format = Format::negotiate(content_type, default);
        debug!("negotiated {format} response encoding (content type {content_type:?})");
        Self {
            format,
            json: JsonEncoder::new(),
            xml: XmlEncoder::new(),
        }
    }

    /// Negotiate from a request's header map.
    ///
    /// Only the `Content-Type` header is read; a non-UTF-8 value is
    /// treated as absent.
    pub fn from_headers(headers: &HeaderMap, default: Option<Format>) -> Self {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        Self::new(content_type, default)
    }

    /// Negotiate from an inbound request.
    pub fn for_request<B>(request: &Request<B>, default: Option<Format>) -> Self {
        Self::from_headers(request.headers(), default)
    }

    /// The negotiated format, for the outbound `Content-Type` header.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Toggle two-space pretty-printing on both underlying encoders.
    pub fn set_indent(&mut self, indent: bool) {
        self.json.set_indent(indent);
        self.xml.set_indent(indent);
    }

    /// Serialize one value in the negotiated format, without redaction.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, EncodeError> {
        match self.format {
            Format::Json => self.json.encode(value),
            Format::Xml => self.xml.encode(value),
        }
    }

    /// Redact `value`, then serialize the visible copy in the negotiated
    /// format.
    pub fn encode_redacted<T: Redact + Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, EncodeError> {
        match self.format {
            Format::Json => self.json.encode_redacted(value),
            Format::Xml => self.xml.encode_redacted(value),
        }
    }

    /// Serialize a sequence of values in the negotiated format; see the
    /// per-format `encode_seq` for the concatenation contract.
    pub fn encode_seq(&self, values: &[&dyn Encodable]) -> Result<Vec<u8>, EncodeError> {
        match self.format {
            Format::Json => self.json.encode_seq(values),
            Format::Xml => self.xml.encode_seq(values),
        }
    }
}
