//! Error type for forest construction and layout.
//!
//! Every malformed-forest condition has its own variant so callers can tell
//! a cyclic edge list apart from a dangling reference without parsing
//! messages. Only cycles and invalid spacing are fatal in the default
//! (permissive) mode; the rest are reported when strict validation is on.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors produced while building a forest or computing a layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A node is its own descendant.
    #[error("cyclic tree structure: {node} is its own descendant")]
    Cycle {
        /// A node on the cycle.
        node: NodeId,
    },

    /// The same identifier appears on more than one node record.
    #[error("duplicate node identifier {0}")]
    DuplicateNode(NodeId),

    /// An edge names a node that is not in the node list.
    #[error("edge {from} -> {to} references unknown {missing}")]
    DanglingEdge {
        /// Edge source.
        from: NodeId,
        /// Edge target.
        to: NodeId,
        /// The endpoint that has no node record.
        missing: NodeId,
    },

    /// Two different sources claim the same target.
    #[error("{node} has multiple parents: {first} and {second}")]
    MultipleParents {
        /// The node with conflicting parents.
        node: NodeId,
        /// Parent from the earlier edge.
        first: NodeId,
        /// Parent from the later edge.
        second: NodeId,
    },

    /// A spacing option is NaN or infinite.
    #[error("invalid {name}: {value}")]
    InvalidSpacing {
        /// Option name as seen by JS callers.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
