//! Maximum-spacing k-clustering in Rust. Generic over floating point numeric types.
//!
//! Given only the pairwise distances between n points, the algorithm splits them into k
//! clusters so that the spacing, the smallest distance between two points in different
//! clusters, is as large as possible. It works in three steps:
//!  1. The distance matrix is turned into a complete weighted graph;
//!  2. A minimum spanning tree of that graph is grown with Prim's algorithm; and
//!  3. The k - 1 heaviest edges of the tree are cut. The connected components that remain are
//!     the clusters, and the lightest edge cut is the spacing achieved.
//!
//! This is equivalent to stopping single-linkage agglomerative clustering when k clusters
//! remain. All results are deterministic: ties between equal distances are broken by point
//! index.
//!
//! # Examples
//! ```
//!use max_spacing::{pairwise_distances, MaxSpacing};
//!
//!let points: Vec<Vec<f64>> = vec![
//!    vec![1.5, 2.2],
//!    vec![1.0, 1.1],
//!    vec![1.2, 1.4],
//!    vec![3.7, 4.0],
//!    vec![3.9, 3.9],
//!    vec![10.0, 10.0],
//!];
//!let dist_matrix = pairwise_distances(&points).unwrap();
//!let clusterer = MaxSpacing::new(&dist_matrix, 3);
//!let clustering = clusterer.cluster().unwrap();
//!assert_eq!(clustering.labels(), &[0, 0, 0, 1, 1, 2]);
//!assert!(clustering.cost().unwrap() > 2.0);
//! ```
//!
//! # References
//! * [Kleinberg, J.; Tardos, É. Algorithm Design, section 4.7: Clustering.](https://www.pearson.com/en-us/subject-catalog/p/algorithm-design/P200000003259)

pub use crate::centers::Center;
pub use crate::clustering::Clustering;
pub use crate::data_wrappers::Edge;
pub use crate::distance::pairwise_distances;
pub use crate::error::ClusterError;
pub use crate::hyper_parameters::{ClusterParams, ClusterParamsBuilder, Labelling};
pub use crate::max_spacing::MaxSpacing;

mod centers;
mod clustering;
mod data_wrappers;
mod distance;
mod error;
mod graph;
mod hyper_parameters;
mod max_spacing;
mod partition;
mod prims;
mod union_find;
mod validation;
