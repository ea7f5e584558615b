use crate::data_wrappers::Edge;
use crate::prims::{undirected_id, SpanningTree};
use crate::union_find::UnionFind;
use crate::Labelling;
use num_traits::Float;
use std::collections::VecDeque;

/// The spanning tree after its heaviest edges have been cut. Cut edges are flagged by their
/// undirected id; the tree itself is left untouched.
pub(crate) struct PrunedForest<'a, T> {
    tree: &'a SpanningTree<T>,
    removed: Vec<bool>,
    cut_edges: Vec<Edge<T>>,
}

impl<'a, T: Float> PrunedForest<'a, T> {
    /// Cuts the `n_cuts` heaviest edges of the tree. Directed records are visited by
    /// descending weight, ties by ascending (source, destination), and a record whose
    /// undirected edge has already been cut through its mirror is skipped.
    pub(crate) fn cut_heaviest(tree: &'a SpanningTree<T>, n_cuts: usize) -> Self {
        let mut record_ids: Vec<usize> = (0..tree.records().len()).collect();
        record_ids.sort_by(|&a, &b| tree.record(a).descending_cmp(tree.record(b)));

        let mut removed = vec![false; tree.n_edges()];
        let mut cut_edges = Vec::with_capacity(n_cuts);
        let mut remaining = n_cuts;

        for record_id in record_ids {
            if remaining == 0 {
                break;
            }
            let edge_id = undirected_id(record_id);
            if removed[edge_id] {
                continue;
            }
            removed[edge_id] = true;
            remaining -= 1;
            let edge = *tree.record(record_id);
            log::trace!(
                "Cutting edge {} - {} of weight {}",
                edge.source,
                edge.destination,
                edge.weight.to_f64().unwrap_or(f64::NAN)
            );
            cut_edges.push(edge);
        }

        Self {
            tree,
            removed,
            cut_edges,
        }
    }

    /// The cut edges, heaviest first.
    pub(crate) fn cut_edges(&self) -> &[Edge<T>] {
        &self.cut_edges
    }

    /// Weight of the last, and so lightest, cut edge. `None` when nothing was cut.
    pub(crate) fn cost(&self) -> Option<T> {
        self.cut_edges.last().map(|edge| edge.weight)
    }

    fn is_removed(&self, record_id: usize) -> bool {
        self.removed[undirected_id(record_id)]
    }

    /// Labels every point with the number of its connected component. Components are
    /// numbered in order of their smallest point index.
    pub(crate) fn label_components(&self, labelling: Labelling) -> Vec<usize> {
        match labelling {
            Labelling::BreadthFirst => self.label_breadth_first(),
            Labelling::UnionFind => self.label_union_find(),
        }
    }

    fn label_breadth_first(&self) -> Vec<usize> {
        let n_samples = self.tree.n_samples();
        let mut labels: Vec<Option<usize>> = vec![None; n_samples];
        let mut next_label = 0;

        for root in 0..n_samples {
            if labels[root].is_some() {
                continue;
            }
            labels[root] = Some(next_label);
            let mut process_queue = VecDeque::from([root]);

            while let Some(node) = process_queue.pop_front() {
                for &record_id in self.tree.incident(node) {
                    if self.is_removed(record_id) {
                        continue;
                    }
                    let neighbour = self.tree.record(record_id).destination;
                    if labels[neighbour].is_none() {
                        labels[neighbour] = Some(next_label);
                        process_queue.push_back(neighbour);
                    }
                }
            }
            next_label += 1;
        }
        labels.into_iter().flatten().collect()
    }

    fn label_union_find(&self) -> Vec<usize> {
        let n_samples = self.tree.n_samples();
        let mut union_find = UnionFind::new(n_samples);
        for (edge_id, edge) in self.tree.edges().enumerate() {
            if !self.removed[edge_id] {
                union_find.union(edge.source, edge.destination);
            }
        }

        let mut root_labels: Vec<Option<usize>> = vec![None; n_samples];
        let mut next_label = 0;
        (0..n_samples)
            .map(|node| {
                let root = union_find.find(node);
                *root_labels[root].get_or_insert_with(|| {
                    next_label += 1;
                    next_label - 1
                })
            })
            .collect()
    }
}

/// Groups point indices by label. Each cluster comes out sorted ascending.
pub(crate) fn collect_clusters(labels: &[usize], n_clusters: usize) -> Vec<Vec<usize>> {
    let mut clusters = vec![Vec::new(); n_clusters];
    for (point, &label) in labels.iter().enumerate() {
        clusters[label].push(point);
    }
    clusters
}
