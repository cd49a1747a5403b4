//! Response format identifiers and content negotiation.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::EncodeError;

/// Media type selecting JSON output.
pub const MEDIA_TYPE_JSON: &str = "application/json";

/// Media type selecting XML output.
pub const MEDIA_TYPE_XML: &str = "application/xml";

/// A supported response format.
///
/// Unknown identifiers are rejected when a value is parsed (from a string
/// or from configuration), so an encoder never carries an unsupported
/// format at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Format {
    Json,
    Xml,
}

impl Format {
    /// The canonical identifier (`json` or `xml`).
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }

    /// The media type the caller should set as the outbound `Content-Type`.
    ///
    /// This crate never writes response headers itself.
    pub fn media_type(self) -> &'static str {
        match self {
            Format::Json => MEDIA_TYPE_JSON,
            Format::Xml => MEDIA_TYPE_XML,
        }
    }

    /// Select a format from a request's declared content type.
    ///
    /// The header value is reduced to its essence (parameters after `;`
    /// dropped, surrounding whitespace trimmed) and matched
    /// ASCII-case-insensitively, media types being case-insensitive
    /// tokens per RFC 9110. A recognized media type wins over the
    /// configured default; the default wins over the hard JSON fallback
    /// used when none is configured. A missing, empty, or unrecognized
    /// header is never an error here.
    pub fn negotiate(content_type: Option<&str>, default: Option<Format>) -> Format {
        if let Some(value) = content_type {
            let essence = media_type_essence(value);
            if essence.eq_ignore_ascii_case(MEDIA_TYPE_XML) {
                return Format::Xml;
            }
            if essence.eq_ignore_ascii_case(MEDIA_TYPE_JSON) {
                return Format::Json;
            }
        }
        default.unwrap_or(Format::Json)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            other => Err(EncodeError::InvalidFormat(other.to_string())),
        }
    }
}

impl TryFrom<String> for Format {
    type Error = EncodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Strip parameters from a media type: split on `;`, take the first
/// segment, trim whitespace.
pub fn media_type_essence(value: &str) -> &str {
    value.split(';').next().unwrap_or(value).trim()
}
