/// Disjoint-set forest over point indices, with union by size and path compression.
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    pub(crate) fn new(n_samples: usize) -> Self {
        let parent = (0..n_samples).collect();
        let size = vec![1; n_samples];

        UnionFind { parent, size }
    }

    pub(crate) fn union(&mut self, m: usize, n: usize) {
        let (mut m, mut n) = (self.find(m), self.find(n));
        if m == n {
            return;
        }
        if self.size[m] < self.size[n] {
            std::mem::swap(&mut m, &mut n);
        }
        self.parent[n] = m;
        self.size[m] += self.size[n];
    }

    pub(crate) fn find(&mut self, mut n: usize) -> usize {
        let mut root = n;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[n] != root {
            let next = self.parent[n];
            self.parent[n] = root;
            n = next;
        }
        root
    }
}
