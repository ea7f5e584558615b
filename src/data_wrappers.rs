use num_traits::Float;
use std::cmp::Ordering;

/// A weighted edge between two points, identified by their row index in the distance matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<T> {
    pub source: usize,
    pub destination: usize,
    pub weight: T,
}

impl<T: Float> Edge<T> {
    pub(crate) fn new(source: usize, destination: usize, weight: T) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// The same edge seen from the other end.
    pub fn mirror(&self) -> Self {
        Self::new(self.destination, self.source, self.weight)
    }

    /// Ascending (weight, source, destination). NaN weights never reach here, they are
    /// rejected during validation.
    pub(crate) fn ascending_cmp(&self, other: &Self) -> Ordering {
        self.weight
            .partial_cmp(&other.weight)
            .unwrap_or(Ordering::Equal)
            .then(self.source.cmp(&other.source))
            .then(self.destination.cmp(&other.destination))
    }

    /// Descending weight, ties broken by ascending (source, destination).
    pub(crate) fn descending_cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then(self.source.cmp(&other.source))
            .then(self.destination.cmp(&other.destination))
    }
}

/// Priority queue entry for Prim's algorithm. `BinaryHeap` is a max heap, so the ordering
/// is reversed to pop the lightest candidate first.
pub(crate) struct Candidate<T> {
    pub(crate) edge_id: usize,
    pub(crate) edge: Edge<T>,
}

impl<T: Float> PartialEq for Candidate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Float> Eq for Candidate<T> {}

impl<T: Float> PartialOrd for Candidate<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Float> Ord for Candidate<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.edge.ascending_cmp(&self.edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn descending_breaks_ties_by_endpoints() {
        let mut edges = vec![
            Edge::new(1, 0, 1.0),
            Edge::new(0, 2, 3.0),
            Edge::new(0, 1, 1.0),
            Edge::new(2, 0, 3.0),
        ];
        edges.sort_by(|a, b| a.descending_cmp(b));
        let order: Vec<_> = edges.iter().map(|e| (e.source, e.destination)).collect();
        assert_eq!(order, vec![(0, 2), (2, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn heap_pops_lightest_then_lowest_indices() {
        let mut heap = BinaryHeap::new();
        for (edge_id, edge) in [
            Edge::new(2, 3, 0.5),
            Edge::new(0, 3, 0.5),
            Edge::new(0, 1, 2.0),
            Edge::new(0, 2, 0.5),
        ]
        .into_iter()
        .enumerate()
        {
            heap.push(Candidate { edge_id, edge });
        }
        let popped: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|c| c.edge_id)
            .collect();
        assert_eq!(popped, vec![3, 1, 0, 2]);
    }
}
