//! Remote node identifiers and public node snapshots.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Handle identifying a node (file or folder) in the remote tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeHandle(u64);

impl Default for NodeHandle {
    fn default() -> Self {
        Self::UNDEF
    }
}

impl NodeHandle {
    /// Sentinel meaning "no node".
    pub const UNDEF: Self = Self(u64::MAX);

    /// Wrap a raw 64-bit handle.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw 64-bit value of the handle.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Whether the handle refers to an actual node rather than the sentinel.
    #[must_use]
    pub const fn is_defined(self) -> bool {
        self.0 != Self::UNDEF.0
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Kind of entity a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Leaf node carrying file data.
    File,
    /// Container node holding other nodes.
    Folder,
}

/// Snapshot of a node resolved from a public link.
///
/// Owned entirely by whoever holds it; cloning produces an independent copy
/// with no ties to the service that produced the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicNode {
    /// Handle of the node within the remote tree.
    pub handle: NodeHandle,
    /// Display name of the node.
    pub name: String,
    /// Whether the node is a file or a folder.
    pub kind: NodeKind,
    /// Payload size in bytes; zero for folders.
    pub size_bytes: u64,
    /// Creation timestamp reported by the service.
    pub created_at: DateTime<Utc>,
    /// Optional content fingerprint for change detection.
    pub fingerprint: Option<String>,
}

impl PublicNode {
    /// Whether the node is a folder.
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder)
    }
}
