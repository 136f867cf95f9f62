use crate::types::NodeId;

/// Index-based handle of an edge: the node owning it and its slot in that
/// node's adjacency list.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct EdgeRef {
    pub node: NodeId,
    pub slot: usize,
}

/// A directed residual arc.
///
/// `available` always equals `remaining > 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    capacity: u64,
    remaining: u64,
    available: bool,
    is_reverse: bool,
    opposite: Option<EdgeRef>,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, capacity: u64) -> Edge {
        Edge {
            from,
            to,
            capacity,
            remaining: capacity,
            available: capacity > 0,
            is_reverse: false,
            opposite: None,
        }
    }

    /// The counter-flow arc of `forward`. It starts empty and only gains
    /// capacity when flow is pushed along `forward`.
    pub fn reverse_of(forward: &Edge) -> Edge {
        Edge {
            from: forward.to,
            to: forward.from,
            capacity: 0,
            remaining: 0,
            available: false,
            is_reverse: true,
            opposite: None,
        }
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn remaining_capacity(&self) -> u64 {
        self.remaining
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn is_reverse(&self) -> bool {
        self.is_reverse
    }

    pub fn opposite(&self) -> Option<EdgeRef> {
        self.opposite
    }

    /// Flow currently carried by a forward edge.
    pub fn flow(&self) -> u64 {
        self.capacity.saturating_sub(self.remaining)
    }

    pub(crate) fn set_opposite(&mut self, opposite: EdgeRef) {
        self.opposite = Some(opposite);
    }

    /// Consumes `amount` of remaining capacity. Callers never withdraw more
    /// than the path bottleneck, which is at most `remaining`.
    pub(crate) fn withdraw(&mut self, amount: u64) {
        debug_assert!(amount <= self.remaining);
        self.set_remaining(self.remaining.saturating_sub(amount));
    }

    pub(crate) fn restore(&mut self, amount: u64) {
        self.set_remaining(self.remaining + amount);
    }

    fn set_remaining(&mut self, remaining: u64) {
        self.remaining = remaining;
        self.available = remaining > 0;
    }
}
