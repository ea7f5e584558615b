use crate::data_wrappers::{Candidate, Edge};
use crate::graph::Graph;
use crate::ClusterError;
use num_traits::Float;
use std::collections::BinaryHeap;

/// A minimum spanning tree stored as an arena of directed edge records. The two orientations
/// of tree edge `e` live at ids `2e` and `2e + 1`, so the mirror of record `id` is `id ^ 1`
/// and its undirected edge is `id / 2`.
#[derive(Debug, Clone)]
pub(crate) struct SpanningTree<T> {
    records: Vec<Edge<T>>,
    adjacency: Vec<Vec<usize>>,
}

impl<T: Float> SpanningTree<T> {
    fn with_capacity(n_samples: usize) -> Self {
        Self {
            records: Vec::with_capacity(2 * n_samples.saturating_sub(1)),
            adjacency: vec![Vec::new(); n_samples],
        }
    }

    fn insert(&mut self, edge: Edge<T>) {
        let forward_id = self.records.len();
        self.adjacency[edge.source].push(forward_id);
        self.adjacency[edge.destination].push(forward_id + 1);
        self.records.push(edge);
        self.records.push(edge.mirror());
    }

    pub(crate) fn n_samples(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected tree edges.
    pub(crate) fn n_edges(&self) -> usize {
        self.records.len() / 2
    }

    pub(crate) fn records(&self) -> &[Edge<T>] {
        &self.records
    }

    pub(crate) fn record(&self, record_id: usize) -> &Edge<T> {
        &self.records[record_id]
    }

    /// Ids of the directed records leaving `node`.
    pub(crate) fn incident(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// One orientation per undirected edge, in the order the edges joined the tree.
    pub(crate) fn edges(&self) -> impl Iterator<Item = &Edge<T>> + '_ {
        self.records.iter().step_by(2)
    }

    pub(crate) fn total_weight(&self) -> T {
        self.edges()
            .map(|edge| edge.weight)
            .fold(T::zero(), std::ops::Add::add)
    }
}

pub(crate) fn undirected_id(record_id: usize) -> usize {
    record_id / 2
}

/// Grows a minimum spanning tree from `start` with Prim's algorithm, using a binary heap of
/// candidate edges and discarding stale entries lazily when popped. Equal weights are popped
/// in ascending (source, destination) order.
pub(crate) fn prims_min_spanning_tree<T: Float>(
    graph: &Graph<T>,
    start: usize,
) -> Result<SpanningTree<T>, ClusterError> {
    let n_samples = graph.n_samples();
    let mut in_tree = vec![false; n_samples];
    let mut tree = SpanningTree::with_capacity(n_samples);
    let mut candidates = BinaryHeap::new();

    in_tree[start] = true;
    let mut n_in_tree = 1;
    push_candidates(graph, start, &in_tree, &mut candidates);

    while n_in_tree < n_samples {
        let Candidate { edge_id, edge } = match candidates.pop() {
            Some(candidate) => candidate,
            None => break,
        };
        if in_tree[edge.destination] {
            continue;
        }
        log::trace!(
            "Adding edge {edge_id} ({} -> {}, {}) to spanning tree",
            edge.source,
            edge.destination,
            edge.weight.to_f64().unwrap_or(f64::NAN)
        );
        in_tree[edge.destination] = true;
        n_in_tree += 1;
        tree.insert(edge);
        push_candidates(graph, edge.destination, &in_tree, &mut candidates);
    }

    if n_in_tree < n_samples {
        return Err(ClusterError::DisconnectedGraph {
            reached: n_in_tree,
            n_samples,
        });
    }
    log::debug!(
        "Built spanning tree with {} edges and total weight {}",
        tree.n_edges(),
        tree.total_weight().to_f64().unwrap_or(f64::NAN)
    );
    Ok(tree)
}

fn push_candidates<T: Float>(
    graph: &Graph<T>,
    node: usize,
    in_tree: &[bool],
    candidates: &mut BinaryHeap<Candidate<T>>,
) {
    for (edge_id, edge) in graph.outgoing(node) {
        if !in_tree[edge.destination] {
            candidates.push(Candidate {
                edge_id,
                edge: *edge,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Vec<f64>> {
        let diag = 2.0_f64.sqrt();
        vec![
            vec![0.0, 1.0, 1.0, diag],
            vec![1.0, 0.0, diag, 1.0],
            vec![1.0, diag, 0.0, 1.0],
            vec![diag, 1.0, 1.0, 0.0],
        ]
    }

    fn edge_pairs(tree: &SpanningTree<f64>) -> Vec<(usize, usize)> {
        tree.edges().map(|e| (e.source, e.destination)).collect()
    }

    #[test]
    fn collinear_points() {
        let dist_matrix = vec![
            vec![0.0, 1.0, 3.0],
            vec![1.0, 0.0, 2.0],
            vec![3.0, 2.0, 0.0],
        ];
        let graph = Graph::from_distance_matrix(&dist_matrix);
        let tree = prims_min_spanning_tree(&graph, 0).unwrap();
        assert_eq!(vec![(0, 1), (1, 2)], edge_pairs(&tree));
        assert_eq!(3.0, tree.total_weight());
    }

    #[test]
    fn unit_square_ties_follow_endpoint_order() {
        let graph = Graph::from_distance_matrix(&unit_square());
        let tree = prims_min_spanning_tree(&graph, 0).unwrap();
        assert_eq!(vec![(0, 1), (0, 2), (1, 3)], edge_pairs(&tree));
        assert_eq!(3.0, tree.total_weight());
    }

    #[test]
    fn records_are_mirrored_pairs() {
        let graph = Graph::from_distance_matrix(&unit_square());
        let tree = prims_min_spanning_tree(&graph, 2).unwrap();
        assert_eq!(3, tree.n_edges());
        assert_eq!(6, tree.records().len());
        for (id, record) in tree.records().iter().enumerate() {
            assert_eq!(record.mirror(), *tree.record(id ^ 1));
            assert_eq!(undirected_id(id), undirected_id(id ^ 1));
            assert!(tree.incident(record.source).contains(&id));
        }
        let degree_sum: usize = (0..tree.n_samples()).map(|n| tree.incident(n).len()).sum();
        assert_eq!(6, degree_sum);
    }

    #[test]
    fn single_point_has_empty_tree() {
        let graph = Graph::from_distance_matrix(&[vec![0.0_f32]]);
        let tree = prims_min_spanning_tree(&graph, 0).unwrap();
        assert_eq!(0, tree.n_edges());
        assert_eq!(0.0, tree.total_weight());
    }

    #[test]
    fn disconnected_graph_is_reported() {
        let inf = f64::INFINITY;
        let dist_matrix = vec![
            vec![0.0, 1.0, inf, inf],
            vec![1.0, 0.0, inf, inf],
            vec![inf, inf, 0.0, 2.0],
            vec![inf, inf, 2.0, 0.0],
        ];
        let graph = Graph::from_distance_matrix(&dist_matrix);
        let result = prims_min_spanning_tree(&graph, 3);
        assert_eq!(
            Err(ClusterError::DisconnectedGraph {
                reached: 2,
                n_samples: 4
            }),
            result.map(|tree| tree.n_edges())
        );
    }
}
