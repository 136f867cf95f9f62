use log::{debug, trace};
use std::cmp::min;
use std::fmt::{Display, Formatter};

use crate::graph::{Edge, EdgeRef, Node};
use crate::types::{Connection, NodeId, Problem};

/// Whether construction pairs every edge with a reverse residual arc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResidualArcs {
    /// Every edge gets a counter-flow arc, so later augmenting paths can
    /// cancel flow pushed by earlier ones.
    #[default]
    Paired,
    /// Forward edges only. Flow once pushed is never undone.
    ForwardOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitKind {
    In,
    Out,
}

impl Display for LimitKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            LimitKind::In => write!(f, "inbound"),
            LimitKind::Out => write!(f, "outbound"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("max_in has {max_in} entries but max_out has {max_out}")]
    LimitsLengthMismatch { max_in: usize, max_out: usize },
    #[error("at least one target is required")]
    NoTargets,
    #[error("origin {origin} is outside the node range 0..{node_count}")]
    OriginOutOfRange { origin: NodeId, node_count: usize },
    #[error("target {target} is outside the node range 0..{node_count}")]
    TargetOutOfRange { target: NodeId, node_count: usize },
    #[error("connection #{index} ({from} -> {to}) references a node outside 0..{node_count}")]
    ConnectionOutOfRange {
        index: usize,
        from: NodeId,
        to: NodeId,
        node_count: usize,
    },
    #[error("origin {0} is also listed as a target")]
    OriginIsTarget(NodeId),
    #[error("target {0} is listed more than once")]
    DuplicateTarget(NodeId),
    #[error("connection #{index} has negative capacity {capacity}")]
    NegativeCapacity { index: usize, capacity: i64 },
    #[error("node {node} has negative {kind} limit {value}")]
    NegativeLimit {
        node: NodeId,
        kind: LimitKind,
        value: i64,
    },
}

/// Flow carried by one (non-reverse) edge after the engine has run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeFlow {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: u64,
    pub flow: u64,
}

/// Residual network over the original nodes plus one super-sink.
#[derive(Clone, Debug)]
pub struct Network {
    nodes: Vec<Node>,
    source: NodeId,
    sink: NodeId,
    targets: Vec<NodeId>,
    remaining_in: Vec<u64>,
    remaining_out: Vec<u64>,
    residual_arcs: ResidualArcs,
}

impl Network {
    /// Builds the residual network.
    ///
    /// Node limits are turned into edge capacities greedily: connections are
    /// served first-come-first-served in input order, each one taking
    /// `min(max_out[from], max_in[to], capacity)` out of the budgets of its
    /// endpoints. Reordering `connections` can therefore change the result.
    /// Every target is linked to the super-sink with its full inbound limit.
    pub fn new(
        connections: &[Connection],
        max_in: &[i64],
        max_out: &[i64],
        origin: NodeId,
        targets: &[NodeId],
        residual_arcs: ResidualArcs,
    ) -> Result<Network, NetworkError> {
        let (remaining_in, remaining_out, capacities) =
            validate(connections, max_in, max_out, origin, targets)?;
        let node_count = remaining_in.len();
        let mut network = Network {
            nodes: (0..=node_count).map(Node::new).collect(),
            source: origin,
            sink: node_count,
            targets: targets.to_vec(),
            remaining_in,
            remaining_out,
            residual_arcs,
        };

        let sink = network.sink;
        for &target in targets {
            let absorbable = network.remaining_in[target];
            network.insert_edge(target, sink, absorbable);
        }

        for (connection, capacity) in connections.iter().zip(capacities) {
            let (from, to) = (connection.from, connection.to);
            let allocated = min(
                min(network.remaining_out[from], network.remaining_in[to]),
                capacity,
            );
            network.remaining_out[from] -= allocated;
            network.remaining_in[to] -= allocated;
            trace!("Allocated {allocated} of {capacity} to {from} -> {to}");
            network.insert_edge(from, to, allocated);
        }

        debug!(
            "Built network with {} nodes and {} edges ({:?})",
            network.nodes.len(),
            network.edge_count(),
            residual_arcs
        );
        Ok(network)
    }

    pub fn from_problem(
        problem: &Problem,
        residual_arcs: ResidualArcs,
    ) -> Result<Network, NetworkError> {
        Network::new(
            &problem.connections,
            &problem.max_in,
            &problem.max_out,
            problem.origin,
            &problem.targets,
            residual_arcs,
        )
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The super-sink.
    pub fn sink(&self) -> NodeId {
        self.sink
    }

    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    /// Number of original nodes (the super-sink is not counted).
    pub fn node_count(&self) -> usize {
        self.sink
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn edge(&self, edge: EdgeRef) -> &Edge {
        &self.nodes[edge.node].edges()[edge.slot]
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges().len()).sum()
    }

    pub fn residual_arcs(&self) -> ResidualArcs {
        self.residual_arcs
    }

    /// Inbound budget of `node` left over after construction.
    pub fn remaining_in_limit(&self, node: NodeId) -> u64 {
        self.remaining_in[node]
    }

    /// Outbound budget of `node` left over after construction.
    pub fn remaining_out_limit(&self, node: NodeId) -> u64 {
        self.remaining_out[node]
    }

    /// All non-reverse edges in adjacency order with the flow they carry.
    pub fn edge_flows(&self) -> Vec<EdgeFlow> {
        self.nodes
            .iter()
            .flat_map(|n| n.edges())
            .filter(|e| !e.is_reverse())
            .map(|e| EdgeFlow {
                from: e.from(),
                to: e.to(),
                capacity: e.capacity(),
                flow: e.flow(),
            })
            .collect()
    }

    /// Pushes `amount` along `path`, opening the opposite arcs if present.
    pub(crate) fn augment(&mut self, path: &[EdgeRef], amount: u64) {
        for edge in path {
            let opposite = {
                let e = self.edge_mut(*edge);
                e.withdraw(amount);
                e.opposite()
            };
            if let Some(opposite) = opposite {
                self.edge_mut(opposite).restore(amount);
            }
        }
    }

    fn edge_mut(&mut self, edge: EdgeRef) -> &mut Edge {
        self.nodes[edge.node].edge_mut(edge.slot)
    }

    fn insert_edge(&mut self, from: NodeId, to: NodeId, capacity: u64) -> EdgeRef {
        let forward = Edge::new(from, to, capacity);
        let reverse = Edge::reverse_of(&forward);
        let forward_ref = EdgeRef {
            node: from,
            slot: self.nodes[from].add_edge(forward),
        };
        if self.residual_arcs == ResidualArcs::Paired {
            let reverse_ref = EdgeRef {
                node: to,
                slot: self.nodes[to].add_edge(reverse),
            };
            self.edge_mut(forward_ref).set_opposite(reverse_ref);
            self.edge_mut(reverse_ref).set_opposite(forward_ref);
        }
        forward_ref
    }
}

type Budgets = (Vec<u64>, Vec<u64>, Vec<u64>);

/// Checks the input shape and converts limits and capacities to unsigned
/// budgets.
fn validate(
    connections: &[Connection],
    max_in: &[i64],
    max_out: &[i64],
    origin: NodeId,
    targets: &[NodeId],
) -> Result<Budgets, NetworkError> {
    if max_in.len() != max_out.len() {
        return Err(NetworkError::LimitsLengthMismatch {
            max_in: max_in.len(),
            max_out: max_out.len(),
        });
    }
    let node_count = max_in.len();
    if targets.is_empty() {
        return Err(NetworkError::NoTargets);
    }
    if origin >= node_count {
        return Err(NetworkError::OriginOutOfRange { origin, node_count });
    }
    let mut is_target = vec![false; node_count];
    for &target in targets {
        if target >= node_count {
            return Err(NetworkError::TargetOutOfRange { target, node_count });
        }
        if target == origin {
            return Err(NetworkError::OriginIsTarget(origin));
        }
        if is_target[target] {
            return Err(NetworkError::DuplicateTarget(target));
        }
        is_target[target] = true;
    }

    let capacities = connections
        .iter()
        .enumerate()
        .map(|(index, c)| {
            if c.from >= node_count || c.to >= node_count {
                return Err(NetworkError::ConnectionOutOfRange {
                    index,
                    from: c.from,
                    to: c.to,
                    node_count,
                });
            }
            u64::try_from(c.capacity).map_err(|_| NetworkError::NegativeCapacity {
                index,
                capacity: c.capacity,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((
        unsigned_limits(max_in, LimitKind::In)?,
        unsigned_limits(max_out, LimitKind::Out)?,
        capacities,
    ))
}

fn unsigned_limits(limits: &[i64], kind: LimitKind) -> Result<Vec<u64>, NetworkError> {
    limits
        .iter()
        .enumerate()
        .map(|(node, &value)| {
            u64::try_from(value).map_err(|_| NetworkError::NegativeLimit { node, kind, value })
        })
        .collect()
}
