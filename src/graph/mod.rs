use crate::call_context::CallContext;
use crate::types::Connection;
pub use crate::types::NodeId;

mod augmenting_path;
mod edge;
mod flow;
mod network;
mod test;

pub use crate::graph::augmenting_path::{breadth_first_search, SearchTree};
pub use crate::graph::edge::{Edge, EdgeRef};
pub use crate::graph::flow::{compute_flow, Augmentation, FlowResult};
pub use crate::graph::network::{EdgeFlow, LimitKind, Network, NetworkError, ResidualArcs};

// The network is built from raw connections in two steps:
//
// target -> super-sink             capacity: max_in[target]
// from -> to (in input order)      capacity: min(max_out[from], max_in[to], capacity)
//
// where max_in and max_out are budgets that shrink as connections are
// allocated. With paired residual arcs every edge is followed by a reverse
// arc of capacity 0 in the adjacency list of its head.

/// A vertex of the residual network. It owns the edges leaving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    outgoing: Vec<Edge>,
}

impl Node {
    pub fn new(id: NodeId) -> Node {
        Node {
            id,
            outgoing: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Appends an edge and returns its slot in this node's adjacency list.
    pub fn add_edge(&mut self, edge: Edge) -> usize {
        debug_assert_eq!(edge.from(), self.id);
        self.outgoing.push(edge);
        self.outgoing.len() - 1
    }

    pub fn edges(&self) -> &[Edge] {
        &self.outgoing
    }

    pub(crate) fn edge_mut(&mut self, slot: usize) -> &mut Edge {
        &mut self.outgoing[slot]
    }
}

/// Maximum throughput from `origin` to the merged `targets`, respecting
/// every connection capacity and every node's inbound and outbound limit.
pub fn max_throughput(
    connections: &[Connection],
    max_in: &[i64],
    max_out: &[i64],
    origin: NodeId,
    targets: &[NodeId],
) -> Result<u64, NetworkError> {
    let mut network = Network::new(
        connections,
        max_in,
        max_out,
        origin,
        targets,
        ResidualArcs::default(),
    )?;
    Ok(compute_flow(&mut network, &CallContext::default()).total)
}
