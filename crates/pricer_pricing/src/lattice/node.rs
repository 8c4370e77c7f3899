//! Lattice node state.

/// Index of a node within a [`Lattice`](super::Lattice) arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node always occupies the first arena slot.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the arena index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The two successors of an internal node, one period later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Children {
    /// Successor after an up move.
    pub up: NodeId,
    /// Successor after a down move.
    pub down: NodeId,
}

/// Resolution state of a node's option value.
///
/// Transitions one way only: `Unresolved` to `Resolved`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OptionValue {
    /// Not yet computed.
    #[default]
    Unresolved,
    /// Fair value of the option at this node.
    Resolved(f64),
}

impl OptionValue {
    /// Returns whether the value has been computed.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        matches!(self, OptionValue::Resolved(_))
    }

    /// Returns the value if resolved.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            OptionValue::Resolved(v) => Some(*v),
            OptionValue::Unresolved => None,
        }
    }
}

/// One state of the underlying at a given period.
///
/// Leaves (depth equal to the lattice horizon) have no children and keep
/// `hedge_shares` and `risk_free_amount` at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct LatticeNode {
    price: f64,
    depth: usize,
    children: Option<Children>,
    option_value: OptionValue,
    hedge_shares: f64,
    risk_free_amount: f64,
}

impl LatticeNode {
    pub(crate) fn new(price: f64, depth: usize) -> Self {
        Self {
            price,
            depth,
            children: None,
            option_value: OptionValue::Unresolved,
            hedge_shares: 0.0,
            risk_free_amount: 0.0,
        }
    }

    /// Underlying price at this state.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Number of periods elapsed since the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Successors, or `None` for a leaf.
    #[inline]
    pub fn children(&self) -> Option<Children> {
        self.children
    }

    /// Returns whether this node is a terminal state.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Resolution state of the option value.
    #[inline]
    pub fn option_value(&self) -> OptionValue {
        self.option_value
    }

    /// Shares of the underlying held by the replicating portfolio.
    #[inline]
    pub fn hedge_shares(&self) -> f64 {
        self.hedge_shares
    }

    /// Cash invested at the risk-free rate by the replicating portfolio.
    #[inline]
    pub fn risk_free_amount(&self) -> f64 {
        self.risk_free_amount
    }

    pub(crate) fn set_children(&mut self, children: Children) {
        self.children = Some(children);
    }

    pub(crate) fn resolve_terminal(&mut self, payoff: f64) {
        debug_assert!(self.is_leaf(), "terminal payoff set on internal node");
        debug_assert!(!self.option_value.is_resolved(), "node resolved twice");
        self.option_value = OptionValue::Resolved(payoff);
    }

    pub(crate) fn resolve_replicated(&mut self, value: f64, hedge_shares: f64, risk_free: f64) {
        debug_assert!(!self.is_leaf(), "replicated value set on leaf");
        debug_assert!(!self.option_value.is_resolved(), "node resolved twice");
        self.option_value = OptionValue::Resolved(value);
        self.hedge_shares = hedge_shares;
        self.risk_free_amount = risk_free;
    }
}
