//! replyfmt - content-negotiated response encoding.
//!
//! JSON and XML encoders with a shared redaction pass that strips
//! non-exportable fields before anything reaches the wire, plus a
//! per-request dispatcher driven by the inbound `Content-Type` header.

pub mod config;
pub mod encode;
pub mod error;
pub mod format;
pub mod negotiate;
pub mod redact;

pub use config::{ConfigError, EncoderConfig};
pub use encode::{Encodable, JsonEncoder, XmlEncoder};
pub use error::{EncodeError, Severity};
pub use format::{Format, MEDIA_TYPE_JSON, MEDIA_TYPE_XML};
pub use negotiate::NegotiatedEncoder;
pub use redact::{Redact, RedactBoxed};
