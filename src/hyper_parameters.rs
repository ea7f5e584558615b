// Defaults for parameters
const N_CLUSTERS_DEFAULT: usize = 2;
const START_NODE_DEFAULT: usize = 0;
const LABELLING_DEFAULT: Labelling = Labelling::BreadthFirst;

/// How the connected components of the pruned spanning forest are found. Both strategies
/// number clusters by their smallest point index, so they always give identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Labelling {
    /// Breadth-first traversal started from each unvisited point in ascending order.
    BreadthFirst,
    /// Disjoint-set forest built from the edges that survive pruning.
    UnionFind,
}

/// A wrapper around the parameters used in maximum-spacing clustering.
/// Only use if you want more than the number of clusters. Otherwise use `MaxSpacing::new()`
/// to instantiate the model with default parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterParams {
    pub(crate) n_clusters: usize,
    pub(crate) start_node: usize,
    pub(crate) labelling: Labelling,
}

/// Builder object to set custom parameters.
#[derive(Debug, Clone, Default)]
pub struct ClusterParamsBuilder {
    n_clusters: Option<usize>,
    start_node: Option<usize>,
    labelling: Option<Labelling>,
}

impl ClusterParams {
    pub(crate) fn with_n_clusters(n_clusters: usize) -> Self {
        Self::builder().n_clusters(n_clusters).build()
    }

    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> ClusterParamsBuilder {
        ClusterParamsBuilder::default()
    }
}

impl ClusterParamsBuilder {
    /// Sets the number of clusters, k. The k - 1 heaviest edges of the minimum spanning tree
    /// are removed to leave k connected components. Must lie between 1 and the number of
    /// points; this is checked when clustering. Defaults to 2.
    ///
    /// # Parameters
    /// * n_clusters - the number of clusters
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn n_clusters(mut self, n_clusters: usize) -> ClusterParamsBuilder {
        self.n_clusters = Some(n_clusters);
        self
    }

    /// Sets the point Prim's algorithm grows the spanning tree from. With distinct distances
    /// the tree, and therefore the clusters, do not depend on it; with tied distances it may
    /// select a different, equally minimal, tree. Defaults to 0.
    ///
    /// # Parameters
    /// * start_node - the row index of the starting point
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn start_node(mut self, start_node: usize) -> ClusterParamsBuilder {
        self.start_node = Some(start_node);
        self
    }

    /// Sets the strategy used to find connected components once edges have been cut.
    /// Defaults to breadth first search.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn labelling(mut self, labelling: Labelling) -> ClusterParamsBuilder {
        self.labelling = Some(labelling);
        self
    }

    /// Finishes the building of the parameter configuration.
    ///
    /// # Returns
    /// * The completed clustering parameter configuration.
    pub fn build(self) -> ClusterParams {
        ClusterParams {
            n_clusters: self.n_clusters.unwrap_or(N_CLUSTERS_DEFAULT),
            start_node: self.start_node.unwrap_or(START_NODE_DEFAULT),
            labelling: self.labelling.unwrap_or(LABELLING_DEFAULT),
        }
    }
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self::builder().build()
    }
}
