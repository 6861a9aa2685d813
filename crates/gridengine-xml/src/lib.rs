//! Grid Engine XML documents.
//!
//! Decodes `qhost -q -xml` and `qstat -u * -xml -f` output into trees that
//! mirror the external schema. No interpretation happens here: every value
//! stays text and every collection keeps document order.

pub mod error;
pub mod qhost;
pub mod qstat;

pub use error::{DecodeError, Document};
pub use qhost::{decode_qhost, Property, Qhost, QhostHost, QhostQueue};
pub use qstat::{decode_qstat, Qstat, QstatQueue, RawJob};
