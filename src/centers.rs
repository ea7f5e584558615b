use num_traits::Float;

/// Possible methodologies for calculating the center of clusters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Center {
    /// The member of a cluster with the smallest summed distance to all other members.
    /// Only distances are known, so the center is always an observed point, given as its
    /// row index in the distance matrix. Ties go to the smallest index.
    Medoid,
}

impl Center {
    pub(crate) fn calc_centers<T: Float>(
        &self,
        dist_matrix: &[Vec<T>],
        clusters: &[Vec<usize>],
    ) -> Vec<usize> {
        match self {
            Center::Medoid => clusters
                .iter()
                .filter_map(|cluster| Self::calc_medoid(dist_matrix, cluster))
                .collect(),
        }
    }

    fn calc_medoid<T: Float>(dist_matrix: &[Vec<T>], cluster: &[usize]) -> Option<usize> {
        let mut medoid = None;
        let mut min_dist_sum = T::infinity();
        for &candidate in cluster {
            let dist_sum = cluster
                .iter()
                .filter(|&&member| member != candidate)
                .map(|&member| dist_matrix[candidate][member])
                .fold(T::zero(), std::ops::Add::add);
            if medoid.is_none() || dist_sum < min_dist_sum {
                medoid = Some(candidate);
                min_dist_sum = dist_sum;
            }
        }
        medoid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medoid_minimises_summed_distance() {
        // Points on a line at 0, 1, 2, 10, 11
        let positions = [0.0_f64, 1.0, 2.0, 10.0, 11.0];
        let dist_matrix: Vec<Vec<f64>> = positions
            .iter()
            .map(|a| positions.iter().map(|b| (a - b).abs()).collect())
            .collect();
        let clusters = vec![vec![0, 1, 2], vec![3, 4]];
        let medoids = Center::Medoid.calc_centers(&dist_matrix, &clusters);
        assert_eq!(vec![1, 3], medoids);
    }

    #[test]
    fn singleton_is_its_own_medoid() {
        let dist_matrix = vec![vec![0.0_f32]];
        let medoids = Center::Medoid.calc_centers(&dist_matrix, &[vec![0]]);
        assert_eq!(vec![0], medoids);
    }
}
