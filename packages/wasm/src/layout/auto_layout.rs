//! Hierarchical auto layout by subtree-width accumulation.
//!
//! A simplified Reingold-Tilford layout: every subtree is given a number of
//! slots equal to its leaf count, parents are centered over the slots of
//! their children, and disconnected trees are laid side by side.
//!
//! # Algorithm Overview
//!
//! 1. **Forest:** resolve the edge list into ordered child lists and roots
//!    (see [`Forest`]). Cycles are rejected here, before any traversal.
//! 2. **Widths (bottom-up):** a leaf is one slot wide, an internal node is
//!    as wide as its children combined.
//! 3. **Placement (top-down):** each root tree occupies `width * slot` along
//!    the sibling axis, followed by a one-slot gap. Within a node's footprint,
//!    children are packed left to right, each centered in its own footprint.
//!    Depth advances by one level step per generation.
//! 4. **Merge:** positions are written back in input order. Nodes never
//!    reached from a root stay at the origin.
//!
//! Slot centers start at 0, so the left-most leaf of the first tree sits on
//! the sibling-axis origin. Both walks use explicit work lists; tree depth is
//! bounded only by memory.

use log::debug;

use super::options::{LayoutDirection, LayoutOptions};
use crate::error::LayoutError;
use crate::graph::{Edge, Forest, Node, Position};

/// Result of the auto layout computation.
///
/// All vectors are indexed by input node order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    /// Final positions. Unplaced nodes get the origin.
    pub positions: Vec<Position>,
    /// Subtree width in slots; 0 for nodes never reached from a root.
    pub widths: Vec<usize>,
    /// Number of distinct nodes laid out.
    pub node_count: usize,
}

impl LayoutResult {
    /// Whether the node at `index` was reached from a root.
    pub fn is_placed(&self, index: usize) -> bool {
        self.widths.get(index).is_some_and(|&w| w > 0)
    }

    /// Input indices of nodes that were never reached from a root.
    pub fn unplaced(&self) -> impl Iterator<Item = usize> + '_ {
        self.widths
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w == 0)
            .map(|(i, _)| i)
    }
}

/// The auto layout engine.
#[derive(Debug, Clone, Default)]
pub struct TreeLayout {
    options: LayoutOptions,
}

impl TreeLayout {
    /// Create a layout with the given options.
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// Create a layout with default options.
    pub fn with_defaults() -> Self {
        Self::new(LayoutOptions::default())
    }

    /// Compute positions for a forest.
    ///
    /// # Arguments
    ///
    /// * `nodes` - Node identifiers in input order
    /// * `edges` - Parent → child edges; order decides sibling order
    ///
    /// # Returns
    ///
    /// A `LayoutResult` with one position and width per input node.
    pub fn compute<S: AsRef<str>>(
        &self,
        nodes: &[S],
        edges: &[Edge],
    ) -> Result<LayoutResult, LayoutError> {
        self.options.validate()?;

        let forest = Forest::build(
            nodes,
            edges,
            self.options.parent_policy,
            self.options.strict,
        )?;
        if forest.is_empty() {
            return Ok(LayoutResult::default());
        }

        let order = forest.preorder();
        let widths = Self::subtree_widths(&forest, &order);
        let placed = self.place(&forest, &widths);

        if order.len() < forest.len() {
            debug!(
                "{} of {} nodes unreachable from any root, left at origin",
                forest.len() - order.len(),
                forest.len()
            );
        }

        let mut positions = Vec::with_capacity(nodes.len());
        let mut node_widths = Vec::with_capacity(nodes.len());

        for node in nodes {
            let slot = forest.index_of(node.as_ref());
            match slot.and_then(|s| placed[s].map(|p| (p, widths[s]))) {
                Some((position, width)) => {
                    positions.push(position);
                    node_widths.push(width);
                }
                None => {
                    positions.push(Position::ORIGIN);
                    node_widths.push(0);
                }
            }
        }

        Ok(LayoutResult {
            positions,
            widths: node_widths,
            node_count: order.len(),
        })
    }

    /// Slot count per arena node, children before parents.
    fn subtree_widths(forest: &Forest, order: &[usize]) -> Vec<usize> {
        let mut widths = vec![0; forest.len()];

        for &node in order.iter().rev() {
            let children = forest.children(node);
            widths[node] = if children.is_empty() {
                1
            } else {
                children.iter().map(|&child| widths[child]).sum()
            };
        }

        widths
    }

    /// Assign a position to every node reachable from a root.
    fn place(&self, forest: &Forest, widths: &[usize]) -> Vec<Option<Position>> {
        let (slot, level) = self.options.axis_spacing();
        let mut placed = vec![None; forest.len()];

        // (node, sibling-axis center, depth-axis coordinate)
        let mut stack: Vec<(usize, f64, f64)> = Vec::with_capacity(forest.roots().len());

        let mut offset = 0.0;
        for &root in forest.roots() {
            let width = widths[root] as f64;
            stack.push((root, offset + (width - 1.0) * slot / 2.0, 0.0));
            offset += width * slot + slot;
        }

        while let Some((node, center, depth)) = stack.pop() {
            placed[node] = Some(self.to_position(center, depth));

            let mut left = center - widths[node] as f64 * slot / 2.0;
            for &child in forest.children(node) {
                let span = widths[child] as f64 * slot;
                stack.push((child, left + span / 2.0, depth + level));
                left += span;
            }
        }

        placed
    }

    fn to_position(&self, center: f64, depth: f64) -> Position {
        match self.options.direction {
            LayoutDirection::Vertical => Position::new(center, depth),
            LayoutDirection::Horizontal => Position::new(depth, center),
        }
    }
}

/// Lay out node records, returning copies with `position` filled in.
///
/// Records keep their input order. Every record sharing an identifier
/// receives the same position.
pub fn auto_layout<T: Clone>(
    nodes: &[Node<T>],
    edges: &[Edge],
    options: &LayoutOptions,
) -> Result<Vec<Node<T>>, LayoutError> {
    let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let result = TreeLayout::new(options.clone()).compute(&ids, edges)?;

    Ok(nodes
        .iter()
        .zip(result.positions)
        .map(|(node, position)| Node {
            position,
            ..node.clone()
        })
        .collect())
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    /// A random forest: node `i` has parent `links[i] % i` when its flag is set.
    fn forest_strategy() -> impl Strategy<Value = (Vec<String>, Vec<Edge>, Vec<Option<usize>>)> {
        prop::collection::vec((any::<bool>(), any::<usize>()), 1..40).prop_map(|links| {
            let ids: Vec<String> = (0..links.len()).map(|i| format!("n{i}")).collect();
            let parents: Vec<Option<usize>> = links
                .iter()
                .enumerate()
                .map(|(i, &(linked, raw))| (i > 0 && linked).then(|| raw % i))
                .collect();
            let edges: Vec<Edge> = parents
                .iter()
                .enumerate()
                .filter_map(|(i, p)| p.map(|p| Edge::new(ids[p].as_str(), ids[i].as_str())))
                .collect();
            (ids, edges, parents)
        })
    }

    fn spacing() -> impl Strategy<Value = f64> {
        (1u32..500).prop_map(f64::from)
    }

    proptest! {
        #[test]
        fn prop_layout_is_deterministic((ids, edges, _) in forest_strategy(), s in spacing()) {
            let layout = TreeLayout::new(LayoutOptions::default().with_spacing(s, s / 2.0));
            let first = layout.compute(&ids, &edges).unwrap();
            let second = layout.compute(&ids, &edges).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_children_are_centered_under_parent(
            (ids, edges, parents) in forest_strategy(),
            h in spacing(),
            v in spacing(),
        ) {
            let result = TreeLayout::new(LayoutOptions::default().with_spacing(h, v))
                .compute(&ids, &edges)
                .unwrap();
            prop_assert_eq!(result.node_count, ids.len());

            for (parent, _) in ids.iter().enumerate() {
                let kids: Vec<usize> = (0..ids.len()).filter(|&i| parents[i] == Some(parent)).collect();
                if kids.is_empty() {
                    prop_assert_eq!(result.widths[parent], 1);
                    continue;
                }
                let first = kids[0];
                let last = kids[kids.len() - 1];
                let left = result.positions[first].x - result.widths[first] as f64 * h / 2.0;
                let right = result.positions[last].x + result.widths[last] as f64 * h / 2.0;
                prop_assert!(((left + right) / 2.0 - result.positions[parent].x).abs() < 1e-6);
                for &kid in &kids {
                    prop_assert!((result.positions[kid].y - result.positions[parent].y - v).abs() < 1e-6);
                }
                let sum: usize = kids.iter().map(|&k| result.widths[k]).sum();
                prop_assert_eq!(result.widths[parent], sum);
            }
        }

        #[test]
        fn prop_roots_are_one_slot_apart((ids, edges, parents) in forest_strategy(), h in spacing()) {
            let result = TreeLayout::new(LayoutOptions::default().with_spacing(h, 10.0))
                .compute(&ids, &edges)
                .unwrap();

            let roots: Vec<usize> = (0..ids.len()).filter(|&i| parents[i].is_none()).collect();
            for pair in roots.windows(2) {
                let right = result.positions[pair[0]].x + result.widths[pair[0]] as f64 * h / 2.0;
                let left = result.positions[pair[1]].x - result.widths[pair[1]] as f64 * h / 2.0;
                prop_assert!((left - right - h).abs() < 1e-6);
            }
        }

        #[test]
        fn prop_horizontal_transposes_vertical(
            (ids, edges, _) in forest_strategy(),
            h in spacing(),
            v in spacing(),
        ) {
            let vertical = TreeLayout::new(LayoutOptions::default().with_spacing(h, v))
                .compute(&ids, &edges)
                .unwrap();
            let horizontal = TreeLayout::new(
                LayoutOptions::default()
                    .with_direction(LayoutDirection::Horizontal)
                    .with_spacing(v, h),
            )
            .compute(&ids, &edges)
            .unwrap();

            for (a, b) in vertical.positions.iter().zip(&horizontal.positions) {
                prop_assert_eq!(a.x, b.y);
                prop_assert_eq!(a.y, b.x);
            }
        }
    }
}
