use crate::graph::Graph;
use crate::partition::{collect_clusters, PrunedForest};
use crate::prims::prims_min_spanning_tree;
use crate::validation::MatrixValidator;
use crate::{Center, ClusterError, ClusterParams, Clustering};
use num_traits::Float;

/// Maximum-spacing k-clustering over a distance matrix. Generic over floating point numeric
/// types.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxSpacing<'a, T> {
    dist_matrix: &'a [Vec<T>],
    params: ClusterParams,
}

impl<'a, T: Float> MaxSpacing<'a, T> {
    /// Creates an instance of the clustering model that will split the points into
    /// `n_clusters` clusters, using default values for all other parameters.
    ///
    /// # Parameters
    /// * `dist_matrix` - a reference to the square, symmetrical matrix of non-negative
    ///                   distances between the points. The diagonal is ignored. An infinite
    ///                   distance means the two points are not directly connected.
    /// * `n_clusters` - the number of clusters, k, between 1 and the number of points.
    ///
    /// # Returns
    /// * The clustering model instance.
    ///
    /// # Examples
    /// ```
    ///use max_spacing::MaxSpacing;
    ///
    ///let dist_matrix: Vec<Vec<f64>> = vec![
    ///    vec![0.0, 1.0, 3.0],
    ///    vec![1.0, 0.0, 2.0],
    ///    vec![3.0, 2.0, 0.0],
    ///];
    ///let clusterer = MaxSpacing::new(&dist_matrix, 2);
    /// ```
    pub fn new(dist_matrix: &'a [Vec<T>], n_clusters: usize) -> Self {
        Self::with_params(dist_matrix, ClusterParams::with_n_clusters(n_clusters))
    }

    /// Creates an instance of the clustering model using a custom parameter configuration.
    ///
    /// # Parameters
    /// * `dist_matrix` - a reference to the square, symmetrical distance matrix.
    /// * `params` - the parameter configuration.
    ///
    /// # Returns
    /// * The clustering model instance.
    ///
    /// # Examples
    /// ```
    ///use max_spacing::{ClusterParams, Labelling, MaxSpacing};
    ///
    ///let dist_matrix: Vec<Vec<f32>> = vec![
    ///    vec![0.0, 1.0, 3.0],
    ///    vec![1.0, 0.0, 2.0],
    ///    vec![3.0, 2.0, 0.0],
    ///];
    ///let params = ClusterParams::builder()
    ///    .n_clusters(2)
    ///    .start_node(2)
    ///    .labelling(Labelling::UnionFind)
    ///    .build();
    ///let clusterer = MaxSpacing::with_params(&dist_matrix, params);
    /// ```
    pub fn with_params(dist_matrix: &'a [Vec<T>], params: ClusterParams) -> Self {
        MaxSpacing {
            dist_matrix,
            params,
        }
    }

    /// Performs clustering on the distance matrix passed to the constructor. Every call runs
    /// the whole pipeline afresh: the complete graph is built, a minimum spanning tree is grown
    /// over it with Prim's algorithm, its k - 1 heaviest edges are cut and the remaining
    /// connected components become the clusters.
    ///
    /// Equal distances are resolved deterministically. Prim's algorithm takes the lightest
    /// candidate edge, ties going to the lowest (source, destination) pair; edges are cut
    /// heaviest first, with ties again going to the lowest (source, destination) pair.
    ///
    /// # Returns
    /// * A result that, if successful, contains the clusters and their spacing. An error is
    ///   returned if the distance matrix is empty, not square, not symmetrical or contains
    ///   negative or NaN distances, if the number of clusters or the start node is out of range,
    ///   or if infinite distances leave some points unreachable.
    ///
    /// # Examples
    /// ```
    ///use max_spacing::MaxSpacing;
    ///
    ///let dist_matrix: Vec<Vec<f64>> = vec![
    ///    vec![0.0, 1.0, 3.0],
    ///    vec![1.0, 0.0, 2.0],
    ///    vec![3.0, 2.0, 0.0],
    ///];
    ///let clusterer = MaxSpacing::new(&dist_matrix, 2);
    ///let clustering = clusterer.cluster().unwrap();
    ///assert_eq!(clustering.clusters(), &[vec![0, 1], vec![2]]);
    ///assert_eq!(clustering.cost(), Some(2.0));
    /// ```
    pub fn cluster(&self) -> Result<Clustering<T>, ClusterError> {
        let validator = MatrixValidator::new(self.dist_matrix, &self.params);
        validator.validate_input_data()?;

        let graph = Graph::from_distance_matrix(self.dist_matrix);
        log::debug!(
            "Built graph with {} points and {} directed edges",
            graph.n_samples(),
            graph.n_edges()
        );
        let spanning_tree = prims_min_spanning_tree(&graph, self.params.start_node)?;

        let n_clusters = self.params.n_clusters;
        let forest = PrunedForest::cut_heaviest(&spanning_tree, n_clusters - 1);
        let labels = forest.label_components(self.params.labelling);
        let clusters = collect_clusters(&labels, n_clusters);
        log::debug!(
            "Found {} clusters of sizes {:?}",
            clusters.len(),
            clusters.iter().map(Vec::len).collect::<Vec<_>>()
        );

        Ok(Clustering {
            clusters,
            labels,
            cost: forest.cost(),
            spanning_tree: spanning_tree.edges().copied().collect(),
            cut_edges: forest.cut_edges().to_vec(),
        })
    }

    /// Calculates the centers of the clusters just calculated.
    ///
    /// # Parameters
    /// * `center` - the type of center to calculate.
    /// * `clustering` - a reference to the result of a call to `MaxSpacing::cluster`.
    ///
    /// # Returns
    /// * A vector with the point index of each cluster's center, in cluster order. An error is
    ///   returned if the clustering was produced from a matrix of a different size.
    ///
    /// # Examples
    /// ```
    ///use max_spacing::{Center, MaxSpacing};
    ///
    ///let dist_matrix: Vec<Vec<f64>> = vec![
    ///    vec![0.0, 1.0, 2.0, 9.0],
    ///    vec![1.0, 0.0, 1.0, 8.0],
    ///    vec![2.0, 1.0, 0.0, 7.0],
    ///    vec![9.0, 8.0, 7.0, 0.0],
    ///];
    ///let clusterer = MaxSpacing::new(&dist_matrix, 2);
    ///let clustering = clusterer.cluster().unwrap();
    ///let medoids = clusterer.calc_centers(Center::Medoid, &clustering).unwrap();
    ///assert_eq!(medoids, vec![1, 3]);
    /// ```
    pub fn calc_centers(
        &self,
        center: Center,
        clustering: &Clustering<T>,
    ) -> Result<Vec<usize>, ClusterError> {
        if clustering.n_samples() != self.dist_matrix.len() {
            return Err(ClusterError::InvalidInput(String::from(
                "The clustering must come from a distance matrix of the same size.",
            )));
        }
        Ok(center.calc_centers(self.dist_matrix, clustering.clusters()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Labelling;

    #[test]
    fn unit_square() {
        let diag = 2.0_f64.sqrt();
        let dist_matrix = vec![
            vec![0.0, 1.0, 1.0, diag],
            vec![1.0, 0.0, diag, 1.0],
            vec![1.0, diag, 0.0, 1.0],
            vec![diag, 1.0, 1.0, 0.0],
        ];
        let clustering = MaxSpacing::new(&dist_matrix, 2).cluster().unwrap();
        assert_eq!(3.0, clustering.spanning_tree_weight());
        assert_eq!(&[vec![0, 2], vec![1, 3]], clustering.clusters());
        assert_eq!(&[0, 1, 0, 1], clustering.labels());
        assert_eq!(Some(1.0), clustering.cost());
    }

    #[test]
    fn collinear_points() {
        let dist_matrix = vec![
            vec![0.0, 1.0, 3.0],
            vec![1.0, 0.0, 2.0],
            vec![3.0, 2.0, 0.0],
        ];
        let clustering = MaxSpacing::new(&dist_matrix, 2).cluster().unwrap();
        assert_eq!(&[vec![0, 1], vec![2]], clustering.clusters());
        assert_eq!(Some(2.0), clustering.cost());
        let cut = clustering.cut_edges()[0];
        assert_eq!((1, 2, 2.0), (cut.source, cut.destination, cut.weight));
    }

    #[test]
    fn single_cluster_has_no_cost() {
        let dist_matrix = vec![vec![0.0, 4.0], vec![4.0, 0.0]];
        let clustering = MaxSpacing::new(&dist_matrix, 1).cluster().unwrap();
        assert_eq!(&[vec![0, 1]], clustering.clusters());
        assert_eq!(None, clustering.cost());
        assert!(clustering.cut_edges().is_empty());
    }

    #[test]
    fn labelling_strategies_agree() {
        let dist_matrix = vec![
            vec![0.0, 5.0, 1.0, 6.0],
            vec![5.0, 0.0, 4.0, 1.5],
            vec![1.0, 4.0, 0.0, 7.0],
            vec![6.0, 1.5, 7.0, 0.0],
        ];
        for n_clusters in 1..=4 {
            let bfs = ClusterParams::builder().n_clusters(n_clusters).build();
            let uf = ClusterParams::builder()
                .n_clusters(n_clusters)
                .labelling(Labelling::UnionFind)
                .build();
            assert_eq!(
                MaxSpacing::with_params(&dist_matrix, bfs).cluster(),
                MaxSpacing::with_params(&dist_matrix, uf).cluster()
            );
        }
    }

    #[test]
    fn errors_before_tree_work() {
        let dist_matrix = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let result = MaxSpacing::new(&dist_matrix, 3).cluster();
        assert!(matches!(result, Err(ClusterError::InvalidInput(..))));

        // An out of range k wins over an unreachable point
        let inf = f64::INFINITY;
        let disconnected = vec![vec![0.0, inf], vec![inf, 0.0]];
        for n_clusters in [0, 3] {
            let result = MaxSpacing::new(&disconnected, n_clusters).cluster();
            assert!(matches!(result, Err(ClusterError::InvalidInput(..))));
        }
    }

    #[test]
    fn centers_need_matching_clustering() {
        let small = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let clustering = MaxSpacing::new(&small, 1).cluster().unwrap();
        let large = vec![vec![0.0; 3]; 3];
        let result = MaxSpacing::new(&large, 1).calc_centers(Center::Medoid, &clustering);
        assert!(matches!(result, Err(ClusterError::InvalidInput(..))));
    }
}
