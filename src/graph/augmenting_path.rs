use std::collections::VecDeque;

use crate::graph::{EdgeRef, Network};
use crate::types::NodeId;

/// Outcome of one breadth-first search: the edge through which every
/// discovered node was first reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTree {
    source: NodeId,
    predecessor: Vec<Option<EdgeRef>>,
}

impl SearchTree {
    pub fn predecessor(&self, node: NodeId) -> Option<EdgeRef> {
        self.predecessor[node]
    }

    pub fn reached(&self, node: NodeId) -> bool {
        self.predecessor[node].is_some()
    }

    /// Edges from the source to `sink`, in path order, or `None` if the
    /// search did not reach `sink`. The source itself has no path.
    pub fn path_to(&self, network: &Network, sink: NodeId) -> Option<Vec<EdgeRef>> {
        if sink == self.source || !self.reached(sink) {
            return None;
        }
        let mut path = Vec::new();
        let mut node = sink;
        while node != self.source {
            let edge = self.predecessor[node]?;
            path.push(edge);
            node = network.edge(edge).from();
        }
        path.reverse();
        Some(path)
    }
}

/// Breadth-first search over available edges, in adjacency order.
///
/// Returns as soon as `sink` is dequeued, so the path to it has the fewest
/// edges among all augmenting paths.
pub fn breadth_first_search(network: &Network, source: NodeId, sink: NodeId) -> SearchTree {
    let node_total = network.nodes().len();
    let mut tree = SearchTree {
        source,
        predecessor: vec![None; node_total],
    };
    if source == sink {
        return tree;
    }
    let mut discovered = vec![false; node_total];
    discovered[source] = true;
    let mut queue = VecDeque::from([source]);
    while let Some(node) = queue.pop_front() {
        if node == sink {
            break;
        }
        for (slot, edge) in network.node(node).edges().iter().enumerate() {
            if !edge.is_available() || discovered[edge.to()] {
                continue;
            }
            discovered[edge.to()] = true;
            tree.predecessor[edge.to()] = Some(EdgeRef { node, slot });
            queue.push_back(edge.to());
        }
    }
    tree
}

#[cfg(test)]
mod test {
    use super::breadth_first_search;
    use crate::graph::{Network, ResidualArcs};
    use crate::types::Connection;

    fn network(connections: &[(usize, usize, i64)], nodes: usize, target: usize) -> Network {
        let connections: Vec<Connection> = connections.iter().map(|c| (*c).into()).collect();
        Network::new(
            &connections,
            &vec![100; nodes],
            &vec![100; nodes],
            0,
            &[target],
            ResidualArcs::ForwardOnly,
        )
        .unwrap()
    }

    #[test]
    fn finds_fewest_edges() {
        // 0 -> 1 -> 2 -> 3 and the shortcut 0 -> 3 listed last.
        let n = network(&[(0, 1, 5), (1, 2, 5), (2, 3, 5), (0, 3, 5)], 4, 3);
        let tree = breadth_first_search(&n, 0, n.sink());
        let path = tree.path_to(&n, n.sink()).unwrap();
        let nodes: Vec<_> = path.iter().map(|e| n.edge(*e).to()).collect();
        assert_eq!(nodes, vec![3, n.sink()]);
    }

    #[test]
    fn skips_unavailable_edges() {
        let n = network(&[(0, 1, 0), (1, 2, 5)], 3, 2);
        let tree = breadth_first_search(&n, 0, n.sink());
        assert!(!tree.reached(1));
        assert_eq!(tree.path_to(&n, n.sink()), None);
    }

    #[test]
    fn source_equal_to_sink_has_no_path() {
        let n = network(&[(0, 1, 5)], 2, 1);
        let tree = breadth_first_search(&n, 1, 1);
        assert_eq!(tree.path_to(&n, 1), None);
    }

    #[test]
    fn first_discovery_wins() {
        // Both 1 and 2 lead to 3; 1 is listed first.
        let n = network(&[(0, 1, 5), (0, 2, 5), (1, 3, 5), (2, 3, 5)], 4, 3);
        let tree = breadth_first_search(&n, 0, n.sink());
        let into_three = tree.predecessor(3).unwrap();
        assert_eq!(n.edge(into_three).from(), 1);
    }
}
