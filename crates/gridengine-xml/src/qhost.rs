//! Host and queue inventory as reported by `qhost -q -xml`.
//!
//! ```xml
//! <qhost>
//!   <host name='node01'>
//!     <hostvalue name='num_proc'>32</hostvalue>
//!     <queue name='all.q'>
//!       <queuevalue qname='all.q' name='slots'>32</queuevalue>
//!     </queue>
//!   </host>
//! </qhost>
//! ```
//!
//! Values are kept as text. Property names are open-ended so the tree stays
//! tolerant of whatever the installed qhost version emits.

use crate::error::{DecodeError, Document};
use serde::Deserialize;

/// A `name` attribute plus inner text, used by both `hostvalue` and `queuevalue`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Property {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "$text")]
    pub value: String,
}

/// A queue instance listed under a host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QhostQueue {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "queuevalue")]
    pub properties: Vec<Property>,
}

/// A single execution host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QhostHost {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "hostvalue")]
    pub properties: Vec<Property>,
    #[serde(rename = "queue")]
    pub queues: Vec<QhostQueue>,
}

/// Root of the qhost document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Qhost {
    #[serde(rename = "host")]
    pub hosts: Vec<QhostHost>,
}

/// Decode qhost XML output.
pub fn decode_qhost(xml: &str) -> Result<Qhost, DecodeError> {
    quick_xml::de::from_str(xml).map_err(|source| DecodeError {
        document: Document::Qhost,
        source,
    })
}
