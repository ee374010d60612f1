//! Node identifier, position and node record.
//!
//! A node record mirrors what the front-end renderer consumes:
//! - An opaque string identifier
//! - An optional renderer type tag (e.g. `"treeNode"`)
//! - A position in plane coordinates (origin until laid out)
//! - An arbitrary payload

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Node identifier.
///
/// Identifiers are opaque strings supplied by the caller. Uniqueness is
/// assumed by the layout, and checked only under strict validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new NodeId.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl From<&str> for NodeId {
    #[inline]
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for NodeId {
    #[inline]
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for NodeId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A point in layout space. Consumers typically render 1 unit as 1 pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// The origin, also used for nodes the layout never reached.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node record carrying a caller-defined payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<T> {
    pub id: NodeId,
    /// Renderer type tag, serialized as `type`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Absent on input means "not yet laid out".
    #[serde(default)]
    pub position: Position,
    pub data: T,
}

impl<T> Node<T> {
    /// Create an untyped node at the origin.
    pub fn new(id: impl Into<NodeId>, data: T) -> Self {
        Self {
            id: id.into(),
            kind: None,
            position: Position::ORIGIN,
            data,
        }
    }

    /// Set the renderer type tag.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}
