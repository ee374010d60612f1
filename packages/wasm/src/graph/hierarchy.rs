//! Build node and edge lists from a flat parent-linked item list.

use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::node::{Node, NodeId};

/// Renderer type tag given to nodes built from a hierarchy.
pub const TREE_NODE_TYPE: &str = "treeNode";

/// One item of a flat hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyItem<T> {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<NodeId>,
    pub data: T,
}

impl<T> HierarchyItem<T> {
    pub fn root(id: impl Into<NodeId>, data: T) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            data,
        }
    }

    pub fn child(id: impl Into<NodeId>, parent: impl Into<NodeId>, data: T) -> Self {
        Self {
            id: id.into(),
            parent_id: Some(parent.into()),
            data,
        }
    }
}

/// Node and edge lists ready for [`auto_layout`](crate::layout::auto_layout()).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hierarchy<T> {
    pub nodes: Vec<Node<T>>,
    pub edges: Vec<Edge>,
}

/// Turn `(id, parentId?, data)` items into `treeNode` records at the origin
/// plus one `e-<parent>-<id>` edge per item with a non-empty parent.
pub fn create_tree_from_hierarchy<T>(items: Vec<HierarchyItem<T>>) -> Hierarchy<T> {
    let mut nodes = Vec::with_capacity(items.len());
    let mut edges = Vec::new();

    for item in items {
        if let Some(parent) = item.parent_id.filter(|p| !p.as_str().is_empty()) {
            edges.push(Edge::new(parent, item.id.clone()));
        }
        nodes.push(Node::new(item.id, item.data).with_kind(TREE_NODE_TYPE));
    }

    Hierarchy { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Position;

    #[test]
    fn test_create_tree_from_hierarchy() {
        let hierarchy = create_tree_from_hierarchy(vec![
            HierarchyItem::root("1", "Root"),
            HierarchyItem::child("2", "1", "Child 1"),
            HierarchyItem::child("3", "1", "Child 2"),
        ]);

        assert_eq!(hierarchy.nodes.len(), 3);
        for node in &hierarchy.nodes {
            assert_eq!(node.kind.as_deref(), Some(TREE_NODE_TYPE));
            assert_eq!(node.position, Position::ORIGIN);
        }
        assert_eq!(hierarchy.nodes[1].data, "Child 1");

        let ids: Vec<&str> = hierarchy.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e-1-2", "e-1-3"]);
        assert_eq!(hierarchy.edges[0].source.as_str(), "1");
        assert_eq!(hierarchy.edges[0].target.as_str(), "2");
    }

    #[test]
    fn test_empty_parent_id_is_a_root() {
        let hierarchy = create_tree_from_hierarchy(vec![
            HierarchyItem::root("a", ()),
            HierarchyItem::child("b", "", ()),
        ]);
        assert_eq!(hierarchy.nodes.len(), 2);
        assert!(hierarchy.edges.is_empty());
    }
}
