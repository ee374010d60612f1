//! Graph records and forest construction.
//!
//! This module provides the node and edge records exchanged with the
//! front-end, and the per-call [`Forest`] that turns a raw edge list into
//! ordered child lists and roots for the layout.

mod data;
mod edge;
mod forest;
mod hierarchy;
mod node;
mod nullable;

pub use data::{BlockStyle, Direction, TreeNodeData};
pub use edge::Edge;
pub use forest::{Forest, ParentPolicy, validate};
pub use hierarchy::{Hierarchy, HierarchyItem, TREE_NODE_TYPE, create_tree_from_hierarchy};
pub use node::{Node, NodeId, Position};
