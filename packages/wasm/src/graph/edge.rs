//! Edge record.
//!
//! An edge is an ordered `(source, target)` pair meaning "source is the
//! parent of target". The optional `id` is carried for the renderer and
//! plays no part in layout.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::node::NodeId;
use super::nullable;

/// Directed parent → child edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    /// Create an edge with the conventional `e-<source>-<target>` id.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("e-{}-{}", source.as_str(), target.as_str()),
            source,
            target,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
