#[cfg(test)]
mod test {
    use crate::call_context::CallContext;
    use crate::graph::{compute_flow, max_throughput, Network, NetworkError, ResidualArcs};
    use crate::types::Connection;

    fn connections(input: &[(usize, usize, i64)]) -> Vec<Connection> {
        input.iter().map(|c| Connection::from(*c)).collect()
    }

    fn flow(
        input: &[(usize, usize, i64)],
        max_in: &[i64],
        max_out: &[i64],
        origin: usize,
        targets: &[usize],
    ) -> u64 {
        max_throughput(&connections(input), max_in, max_out, origin, targets).unwrap()
    }

    #[test]
    fn direct() {
        assert_eq!(flow(&[(0, 1, 10)], &[10, 10], &[10, 10], 0, &[1]), 10);
    }

    #[test]
    fn two_disjoint_paths() {
        let edges = [(0, 1, 5), (1, 3, 5), (0, 2, 5), (2, 3, 5)];
        assert_eq!(flow(&edges, &[10; 4], &[10; 4], 0, &[3]), 10);
    }

    #[test]
    fn shared_node_out_limit() {
        let edges = [(0, 1, 10), (1, 2, 10)];
        assert_eq!(flow(&edges, &[10; 3], &[10, 4, 10], 0, &[2]), 4);
    }

    #[test]
    fn shared_node_in_limit() {
        let edges = [(0, 1, 10), (1, 2, 10)];
        assert_eq!(flow(&edges, &[10, 6, 10], &[10; 3], 0, &[2]), 6);
    }

    #[test]
    fn bounded_by_target_absorption() {
        let edges = [(0, 1, 100), (1, 2, 100), (1, 3, 100)];
        let max_in = [100, 100, 3, 4];
        assert_eq!(flow(&edges, &max_in, &[100; 4], 0, &[2, 3]), 7);
    }

    #[test]
    fn starved_origin() {
        let edges = [(0, 1, 10), (1, 2, 10)];
        assert_eq!(flow(&edges, &[10; 3], &[0, 10, 10], 0, &[2]), 0);
    }

    #[test]
    fn unreachable_target() {
        let edges = [(0, 1, 10), (2, 3, 10)];
        assert_eq!(flow(&edges, &[10; 4], &[10; 4], 0, &[3]), 0);
    }

    #[test]
    fn targets_share_origin_budget() {
        let edges = [(0, 1, 10), (0, 2, 10)];
        assert_eq!(flow(&edges, &[10; 3], &[12, 10, 10], 0, &[1, 2]), 12);
    }

    #[test]
    fn target_limit_taken_before_connections() {
        // The connection into 1 consumes its whole inbound budget, but the
        // super-sink edge was created first with the full limit.
        let mut network = Network::new(
            &connections(&[(0, 1, 10)]),
            &[10, 4],
            &[10, 10],
            0,
            &[1],
            ResidualArcs::Paired,
        )
        .unwrap();
        assert_eq!(network.remaining_in_limit(1), 0);
        assert_eq!(network.remaining_out_limit(0), 6);
        let result = compute_flow(&mut network, &CallContext::default());
        assert_eq!(result.total, 4);
    }

    #[test]
    fn greedy_allocation_follows_input_order() {
        // Node 1 can send 5 in total. Whichever connection comes first takes
        // all of it; 2 is a dead end.
        let max = [5; 4];
        let dead_end_first = [(0, 1, 5), (1, 2, 5), (1, 3, 5)];
        let target_first = [(0, 1, 5), (1, 3, 5), (1, 2, 5)];
        assert_eq!(flow(&dead_end_first, &max, &max, 0, &[3]), 0);
        assert_eq!(flow(&target_first, &max, &max, 0, &[3]), 5);
    }

    #[test]
    fn zero_capacity_connection_is_kept_unavailable() {
        let network = Network::new(
            &connections(&[(0, 1, 0)]),
            &[1, 1],
            &[1, 1],
            0,
            &[1],
            ResidualArcs::ForwardOnly,
        )
        .unwrap();
        let edge = &network.node(0).edges()[0];
        assert_eq!(edge.to(), 1);
        assert!(!edge.is_available());
    }

    // s=0 a=1 b=2 x=3 y=4 t=5. The first shortest path s-a-y-t blocks
    // s-b-y-t; only a reverse arc y->a lets the second unit through.
    const CROSSED: [(usize, usize, i64); 7] = [
        (0, 1, 1),
        (0, 2, 1),
        (1, 4, 1),
        (1, 3, 1),
        (2, 4, 1),
        (3, 5, 1),
        (4, 5, 1),
    ];

    fn crossed(residual_arcs: ResidualArcs) -> u64 {
        let mut network = Network::new(
            &connections(&CROSSED),
            &[10; 6],
            &[10; 6],
            0,
            &[5],
            residual_arcs,
        )
        .unwrap();
        compute_flow(&mut network, &CallContext::default()).total
    }

    #[test]
    fn reverse_arcs_undo_blocking_path() {
        assert_eq!(crossed(ResidualArcs::Paired), 2);
        assert_eq!(crossed(ResidualArcs::ForwardOnly), 1);
    }

    #[test]
    fn augmentation_sequence() {
        let mut network = Network::new(
            &connections(&CROSSED),
            &[10; 6],
            &[10; 6],
            0,
            &[5],
            ResidualArcs::Paired,
        )
        .unwrap();
        let result = compute_flow(&mut network, &CallContext::new("crossed"));
        assert_eq!(result.bottlenecks(), vec![1, 1]);
        assert_eq!(result.augmentations[0].path, vec![0, 1, 4, 5, 6]);
        assert_eq!(result.augmentations[1].path, vec![0, 2, 4, 1, 3, 5, 6]);
        assert_eq!(format!("{}", result.augmentations[0]), "1 via 0 -> 1 -> 4 -> 5 -> 6");

        let carried: Vec<_> = network
            .edge_flows()
            .into_iter()
            .filter(|e| e.flow > 0)
            .map(|e| (e.from, e.to, e.flow))
            .collect();
        assert_eq!(
            carried,
            vec![(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 4, 1), (3, 5, 1), (4, 5, 1), (5, 6, 2)]
        );
    }

    #[test]
    fn paired_arcs_are_linked() {
        let network = Network::new(
            &connections(&[(0, 1, 3)]),
            &[5, 5],
            &[5, 5],
            0,
            &[1],
            ResidualArcs::Paired,
        )
        .unwrap();
        for node in network.nodes() {
            for edge in node.edges() {
                let opposite = network.edge(edge.opposite().unwrap());
                assert_eq!((opposite.from(), opposite.to()), (edge.to(), edge.from()));
                assert_ne!(opposite.is_reverse(), edge.is_reverse());
            }
        }
        assert_eq!(network.edge_count(), 4);
        assert_eq!(network.sink(), 2);
        assert_eq!(network.node_count(), 2);
    }

    #[test]
    fn self_loop_is_harmless() {
        let edges = [(0, 1, 4), (1, 1, 4), (1, 2, 4)];
        assert_eq!(flow(&edges, &[10; 3], &[10; 3], 0, &[2]), 4);
    }

    fn build_error(
        input: &[(usize, usize, i64)],
        max_in: &[i64],
        max_out: &[i64],
        origin: usize,
        targets: &[usize],
    ) -> NetworkError {
        max_throughput(&connections(input), max_in, max_out, origin, targets).unwrap_err()
    }

    #[test]
    fn rejects_invalid_topology() {
        assert_eq!(
            build_error(&[(0, 1, 1)], &[1, 1], &[1, 1], 0, &[]),
            NetworkError::NoTargets
        );
        assert_eq!(
            build_error(&[(0, 1, 1)], &[1, 1], &[1, 1], 0, &[0]),
            NetworkError::OriginIsTarget(0)
        );
        assert_eq!(
            build_error(&[(0, 1, 1)], &[1, 1, 1], &[1, 1, 1], 0, &[1, 2, 1]),
            NetworkError::DuplicateTarget(1)
        );
        assert_eq!(
            build_error(&[(0, 1, 1)], &[1, 1], &[1, 1], 2, &[1]),
            NetworkError::OriginOutOfRange {
                origin: 2,
                node_count: 2
            }
        );
        assert_eq!(
            build_error(&[(0, 1, 1)], &[1, 1], &[1, 1], 0, &[7]),
            NetworkError::TargetOutOfRange {
                target: 7,
                node_count: 2
            }
        );
        assert_eq!(
            build_error(&[(0, 1, 1), (1, 3, 1)], &[1, 1], &[1, 1], 0, &[1]),
            NetworkError::ConnectionOutOfRange {
                index: 1,
                from: 1,
                to: 3,
                node_count: 2
            }
        );
        assert_eq!(
            build_error(&[(0, 1, 1)], &[1, 1], &[1], 0, &[1]),
            NetworkError::LimitsLengthMismatch {
                max_in: 2,
                max_out: 1
            }
        );
    }

    #[test]
    fn rejects_negative_values() {
        assert_eq!(
            build_error(&[(0, 1, 1), (0, 1, -2)], &[1, 1], &[1, 1], 0, &[1]),
            NetworkError::NegativeCapacity {
                index: 1,
                capacity: -2
            }
        );
        let err = build_error(&[(0, 1, 1)], &[1, 1], &[1, -5], 0, &[1]);
        assert_eq!(err.to_string(), "node 1 has negative outbound limit -5");
    }
}
