use crate::data_wrappers::Edge;
use num_traits::Float;

/// The result of maximum-spacing clustering: a partition of the points into clusters and the
/// spacing achieved between the two closest clusters. Built once, fully formed, and never
/// mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering<T> {
    pub(crate) clusters: Vec<Vec<usize>>,
    pub(crate) labels: Vec<usize>,
    pub(crate) cost: Option<T>,
    pub(crate) spanning_tree: Vec<Edge<T>>,
    pub(crate) cut_edges: Vec<Edge<T>>,
}

impl<T: Float> Clustering<T> {
    /// The clusters, each a list of point indices sorted ascending. Clusters are ordered by
    /// their smallest point index, so the first cluster always contains point 0. Together they
    /// contain every point exactly once.
    pub fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }

    /// The spacing of the clustering: the weight of the lightest spanning tree edge that was
    /// cut, which is the smallest distance between two points in different clusters.
    ///
    /// # Returns
    /// * `None` when only one cluster was requested, as no edge is cut and the spacing is not
    ///   defined.
    pub fn cost(&self) -> Option<T> {
        self.cost
    }

    /// The cluster number of every point, indexed by point. Cluster numbers index into
    /// `clusters()`.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// The number of clusters, k.
    pub fn n_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// The number of points clustered, n.
    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }

    /// The n - 1 edges of the minimum spanning tree, in the order Prim's algorithm added them.
    pub fn spanning_tree(&self) -> &[Edge<T>] {
        &self.spanning_tree
    }

    /// The total weight of the minimum spanning tree.
    pub fn spanning_tree_weight(&self) -> T {
        self.spanning_tree
            .iter()
            .map(|edge| edge.weight)
            .fold(T::zero(), std::ops::Add::add)
    }

    /// The k - 1 edges cut from the spanning tree, heaviest first.
    pub fn cut_edges(&self) -> &[Edge<T>] {
        &self.cut_edges
    }
}
