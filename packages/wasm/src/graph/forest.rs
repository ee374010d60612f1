//! Forest construction from a node list and a parent → child edge list.
//!
//! The forest is an arena of distinct node identifiers with ordered child
//! lists and a root list. It is rebuilt from scratch for every layout call
//! and never shared.
//!
//! Construction resolves the ambiguities of a raw edge list up front:
//! - repeated node identifiers (first occurrence owns the slot)
//! - several edges claiming the same target ([`ParentPolicy`])
//! - edges naming unknown nodes (skipped, or rejected when strict)
//! - cycles, which are always rejected before any traversal

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::{debug, warn};
use petgraph::Directed;
use petgraph::algo::toposort;
use petgraph::stable_graph::StableGraph;
use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::node::NodeId;
use crate::error::LayoutError;

/// What to do when more than one edge targets the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParentPolicy {
    /// Keep the last edge naming the target; earlier ones are discarded.
    #[default]
    LastWins,
    /// Keep the first edge naming the target; later ones are discarded.
    FirstWins,
    /// Fail with [`LayoutError::MultipleParents`].
    Reject,
}

/// A rooted forest over the distinct node identifiers of one layout call.
#[derive(Debug)]
pub struct Forest {
    /// Distinct identifiers in first-occurrence order.
    ids: Vec<NodeId>,
    /// Identifier → arena index.
    index: HashMap<NodeId, usize>,
    /// Children per node, in edge-list order.
    children: Vec<Vec<usize>>,
    /// Root nodes in input order.
    roots: Vec<usize>,
}

impl Forest {
    /// Build the forest.
    ///
    /// # Arguments
    ///
    /// * `nodes` - Node identifiers in input order
    /// * `edges` - Parent → child edges in input order
    /// * `policy` - How to resolve several edges targeting one node
    /// * `strict` - Reject duplicate identifiers and edges with unknown endpoints
    ///
    /// # Errors
    ///
    /// [`LayoutError::Cycle`] if the surviving edges contain a cycle, plus the
    /// policy- and strictness-dependent variants.
    pub fn build<S: AsRef<str>>(
        nodes: &[S],
        edges: &[Edge],
        policy: ParentPolicy,
        strict: bool,
    ) -> Result<Self, LayoutError> {
        let mut ids: Vec<NodeId> = Vec::with_capacity(nodes.len());
        let mut index: HashMap<NodeId, usize> = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let id = node.as_ref();
            if index.contains_key(id) {
                if strict {
                    return Err(LayoutError::DuplicateNode(NodeId::from(id)));
                }
                debug!("duplicate node id {id:?} shares its first occurrence's slot");
                continue;
            }
            index.insert(NodeId::from(id), ids.len());
            ids.push(NodeId::from(id));
        }

        // Winning edge per target. Unknown targets get an entry too, so the
        // policy applies uniformly.
        let mut parent_edge: HashMap<&str, usize> = HashMap::with_capacity(edges.len());

        for (i, edge) in edges.iter().enumerate() {
            if strict {
                for endpoint in [&edge.source, &edge.target] {
                    if !index.contains_key(endpoint.as_str()) {
                        return Err(LayoutError::DanglingEdge {
                            from: edge.source.clone(),
                            to: edge.target.clone(),
                            missing: endpoint.clone(),
                        });
                    }
                }
            }

            match parent_edge.entry(edge.target.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(mut slot) => {
                    let previous = &edges[*slot.get()];
                    let same_parent = previous.source == edge.source;
                    match policy {
                        ParentPolicy::LastWins => {
                            slot.insert(i);
                        }
                        ParentPolicy::FirstWins => {}
                        ParentPolicy::Reject if same_parent => {}
                        ParentPolicy::Reject => {
                            return Err(LayoutError::MultipleParents {
                                node: edge.target.clone(),
                                first: previous.source.clone(),
                                second: edge.source.clone(),
                            });
                        }
                    }
                    if !same_parent {
                        debug!(
                            "{} claimed by {} and {}, keeping {:?}",
                            edge.target, previous.source, edge.source, policy
                        );
                    }
                }
            }
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); ids.len()];
        let mut has_parent = vec![false; ids.len()];

        for (i, edge) in edges.iter().enumerate() {
            if parent_edge.get(edge.target.as_str()) != Some(&i) {
                continue;
            }
            let Some(&child) = index.get(edge.target.as_str()) else {
                debug!("skipping edge {edge}: unknown target");
                continue;
            };
            has_parent[child] = true;
            match index.get(edge.source.as_str()) {
                Some(&parent) => children[parent].push(child),
                None => debug!("{} has an unknown parent and will not be placed", edge.target),
            }
        }

        Self::check_acyclic(&ids, &children)?;

        let mut roots: Vec<usize> = (0..ids.len()).filter(|&n| !has_parent[n]).collect();
        if roots.is_empty() && !ids.is_empty() {
            warn!(
                "no root among {} nodes, falling back to {}",
                ids.len(),
                ids[0]
            );
            roots.push(0);
        }

        Ok(Self {
            ids,
            index,
            children,
            roots,
        })
    }

    /// Reject cycles before anything walks the child lists.
    fn check_acyclic(ids: &[NodeId], children: &[Vec<usize>]) -> Result<(), LayoutError> {
        let edge_count = children.iter().map(Vec::len).sum();
        let mut graph: StableGraph<usize, (), Directed> =
            StableGraph::with_capacity(ids.len(), edge_count);

        let handles: Vec<_> = (0..ids.len()).map(|n| graph.add_node(n)).collect();
        for (parent, kids) in children.iter().enumerate() {
            for &child in kids {
                graph.add_edge(handles[parent], handles[child], ());
            }
        }

        toposort(&graph, None)
            .map(|_| ())
            .map_err(|cycle| LayoutError::Cycle {
                node: ids[graph[cycle.node_id()]].clone(),
            })
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the forest has no nodes.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifier of an arena node.
    pub fn id(&self, node: usize) -> &NodeId {
        &self.ids[node]
    }

    /// Arena index of an identifier.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Ordered children of an arena node.
    pub fn children(&self, node: usize) -> &[usize] {
        &self.children[node]
    }

    /// Roots in input order.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Nodes reachable from the roots, parents before children, siblings
    /// left to right.
    pub fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.ids.len());
        let mut stack: Vec<usize> = self.roots.iter().rev().copied().collect();

        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.children[node].iter().rev());
        }

        order
    }
}

/// Check a node and edge list for every malformed-forest condition.
///
/// Runs the strict build with [`ParentPolicy::Reject`]: duplicate ids,
/// dangling edges, multiple parents and cycles are all errors.
pub fn validate<S: AsRef<str>>(nodes: &[S], edges: &[Edge]) -> Result<(), LayoutError> {
    Forest::build(nodes, edges, ParentPolicy::Reject, true).map(|_| ())
}
