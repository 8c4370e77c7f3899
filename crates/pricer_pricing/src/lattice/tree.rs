//! Arena-backed full binary lattice.
//!
//! Nodes live in a single `Vec` in level order, addressed by [`NodeId`].
//! Parent and child links are indices, so traversals use explicit stacks
//! and never recurse.

use pricer_core::types::PricingError;

use super::node::{Children, LatticeNode, NodeId};

/// Number of nodes in a full binary lattice of `periods` periods: `2^(n+1) - 1`.
#[inline]
pub fn expected_node_count(periods: usize) -> usize {
    (1usize << (periods + 1)) - 1
}

/// Number of terminal states in a full binary lattice: `2^n`.
#[inline]
pub fn expected_leaf_count(periods: usize) -> usize {
    1usize << periods
}

/// A full binary tree of underlying prices.
///
/// Paths are never merged: two paths reaching the same price level are
/// distinct nodes. Every node at depth `d < periods` has exactly two
/// children; nodes at depth `periods` are leaves.
#[derive(Clone, Debug)]
pub struct Lattice {
    nodes: Vec<LatticeNode>,
    periods: usize,
}

impl Lattice {
    pub(crate) fn with_root(root_price: f64, periods: usize) -> Self {
        let mut nodes = Vec::with_capacity(expected_node_count(periods));
        nodes.push(LatticeNode::new(root_price, 0));
        Self { nodes, periods }
    }

    pub(crate) fn push_children(&mut self, parent: NodeId, up_price: f64, down_price: f64) {
        let depth = self.nodes[parent.0].depth() + 1;
        let up = NodeId(self.nodes.len());
        self.nodes.push(LatticeNode::new(up_price, depth));
        let down = NodeId(self.nodes.len());
        self.nodes.push(LatticeNode::new(down_price, depth));
        self.nodes[parent.0].set_children(Children { up, down });
    }

    /// Number of periods from the root to the leaves.
    #[inline]
    pub fn periods(&self) -> usize {
        self.periods
    }

    /// Total number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of terminal nodes.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// The node holding the spot price.
    #[inline]
    pub fn root(&self) -> &LatticeNode {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Looks up a node by id.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this lattice.
    #[inline]
    pub fn node(&self, id: NodeId) -> &LatticeNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut LatticeNode {
        &mut self.nodes[id.0]
    }

    /// Iterates over every node in arena (level) order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &LatticeNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Ids of all terminal nodes.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().filter(|(_, n)| n.is_leaf()).map(|(id, _)| id)
    }

    /// Resolved option value of `id`.
    ///
    /// # Errors
    /// Returns `PricingError::UnresolvedNode` if the node has not been resolved.
    pub fn resolved_value(&self, id: NodeId) -> Result<f64, PricingError> {
        self.nodes[id.0].option_value().value().ok_or(PricingError::UnresolvedNode { index: id.0 })
    }

    /// Node ids ordered so each node follows both of its children
    /// (up subtree, down subtree, node).
    pub fn post_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(NodeId::ROOT, false)];
        while let Some((id, expanded)) = stack.pop() {
            match self.nodes[id.0].children() {
                Some(children) if !expanded => {
                    stack.push((id, true));
                    stack.push((children.down, false));
                    stack.push((children.up, false));
                }
                _ => order.push(id),
            }
        }
        order
    }

    /// Node ids in in-order (up subtree, node, down subtree), i.e. from the
    /// highest terminal price to the lowest.
    pub fn in_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(NodeId::ROOT, false)];
        while let Some((id, expanded)) = stack.pop() {
            match self.nodes[id.0].children() {
                Some(children) if !expanded => {
                    stack.push((children.down, false));
                    stack.push((id, true));
                    stack.push((children.up, false));
                }
                _ => order.push(id),
            }
        }
        order
    }
}
