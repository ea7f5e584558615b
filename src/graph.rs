use crate::data_wrappers::Edge;
use num_traits::Float;

/// The complete weighted graph over the rows of a distance matrix. Edges are stored once in
/// an arena and each point's adjacency list holds the ids of its outgoing edges.
#[derive(Debug, Clone)]
pub(crate) struct Graph<T> {
    edges: Vec<Edge<T>>,
    adjacency: Vec<Vec<usize>>,
}

impl<T: Float> Graph<T> {
    /// Builds one edge record per ordered pair (i, j), i != j. Infinite distances are absent
    /// edges and get no record. The matrix is assumed to be validated already.
    pub(crate) fn from_distance_matrix(dist_matrix: &[Vec<T>]) -> Self {
        let n_samples = dist_matrix.len();
        let mut edges = Vec::with_capacity(n_samples * n_samples.saturating_sub(1));
        let mut adjacency = Vec::with_capacity(n_samples);

        for (source, row) in dist_matrix.iter().enumerate() {
            let mut outgoing = Vec::with_capacity(n_samples.saturating_sub(1));
            for (destination, &weight) in row.iter().enumerate() {
                if source == destination || weight.is_infinite() {
                    continue;
                }
                outgoing.push(edges.len());
                edges.push(Edge::new(source, destination, weight));
            }
            adjacency.push(outgoing);
        }
        Self { edges, adjacency }
    }

    pub(crate) fn n_samples(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn outgoing(&self, node: usize) -> impl Iterator<Item = (usize, &Edge<T>)> + '_ {
        self.adjacency[node]
            .iter()
            .map(move |&edge_id| (edge_id, &self.edges[edge_id]))
    }
}
