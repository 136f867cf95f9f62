use serde::Deserialize;

use crate::types::{Connection, NodeId};

/// Complete input of one throughput computation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub connections: Vec<Connection>,
    pub max_in: Vec<i64>,
    pub max_out: Vec<i64>,
    pub origin: NodeId,
    pub targets: Vec<NodeId>,
}

impl Problem {
    /// Number of original nodes, i.e. the declared id range `0..node_count`.
    pub fn node_count(&self) -> usize {
        self.max_in.len()
    }
}
