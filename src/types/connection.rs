use serde::Deserialize;
use std::fmt::{Display, Formatter};

use crate::types::NodeId;

/// A raw directed connection as supplied by the caller.
///
/// The capacity is signed so that negative input survives parsing and
/// can be rejected by network construction with a precise error.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Ord, PartialOrd, Deserialize)]
#[serde(from = "(NodeId, NodeId, i64)")]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: i64,
}

impl Connection {
    pub fn new(from: NodeId, to: NodeId, capacity: i64) -> Connection {
        Connection { from, to, capacity }
    }
}

impl From<(NodeId, NodeId, i64)> for Connection {
    fn from((from, to, capacity): (NodeId, NodeId, i64)) -> Self {
        Connection { from, to, capacity }
    }
}

impl Display for Connection {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.capacity)
    }
}
