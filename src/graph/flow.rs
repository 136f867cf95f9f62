use log::debug;
use std::fmt::{Display, Formatter};

use crate::call_context::CallContext;
use crate::graph::augmenting_path::breadth_first_search;
use crate::graph::Network;
use crate::types::NodeId;

/// One augmenting round: the nodes it passed (source first, super-sink
/// last) and the amount pushed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Augmentation {
    pub bottleneck: u64,
    pub path: Vec<NodeId>,
}

impl Display for Augmentation {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let path = self
            .path
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        write!(f, "{} via {path}", self.bottleneck)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowResult {
    pub total: u64,
    pub augmentations: Vec<Augmentation>,
}

impl FlowResult {
    pub fn bottlenecks(&self) -> Vec<u64> {
        self.augmentations.iter().map(|a| a.bottleneck).collect()
    }
}

/// Edmonds-Karp: augment along shortest paths from the source to the
/// super-sink until none is left.
pub fn compute_flow(network: &mut Network, call_context: &CallContext) -> FlowResult {
    let (source, sink) = (network.source(), network.sink());
    let mut result = FlowResult::default();
    loop {
        let tree = breadth_first_search(network, source, sink);
        let Some(path) = tree.path_to(network, sink) else {
            break;
        };
        let Some(bottleneck) = path
            .iter()
            .map(|e| network.edge(*e).remaining_capacity())
            .min()
        else {
            break;
        };
        network.augment(&path, bottleneck);
        result.total += bottleneck;

        let augmentation = Augmentation {
            bottleneck,
            path: std::iter::once(source)
                .chain(path.iter().map(|e| network.edge(*e).to()))
                .collect(),
        };
        debug!("Augmenting {augmentation}");
        result.augmentations.push(augmentation);
    }

    call_context.log_message(&format!("Max flow: {}", result.total));
    call_context.log_message(&format!(
        "Augmenting paths: {}",
        result.augmentations.len()
    ));
    result
}
