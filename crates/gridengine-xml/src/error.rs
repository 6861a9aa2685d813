//! Decode errors.

use std::fmt;
use thiserror::Error;

/// Which Grid Engine document was being decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    /// Host and queue inventory (`qhost -q -xml`).
    Qhost,
    /// Queue and job status (`qstat -u * -xml -f`).
    Qstat,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Qhost => f.write_str("qhost"),
            Self::Qstat => f.write_str("qstat"),
        }
    }
}

/// A document could not be decoded into the expected tree.
#[derive(Error, Debug)]
#[error("error parsing {document} xml: {source}")]
pub struct DecodeError {
    pub document: Document,
    #[source]
    pub source: quick_xml::DeError,
}
