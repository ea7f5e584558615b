use crate::{ClusterError, ClusterParams};
use num_traits::Float;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MatrixValidator<'a, T> {
    dist_matrix: &'a [Vec<T>],
    params: &'a ClusterParams,
}

impl<'a, T: Float> MatrixValidator<'a, T> {
    pub(crate) fn new(dist_matrix: &'a [Vec<T>], params: &'a ClusterParams) -> Self {
        Self {
            dist_matrix,
            params,
        }
    }

    pub(crate) fn validate_input_data(&self) -> Result<(), ClusterError> {
        if self.dist_matrix.is_empty() {
            return Err(ClusterError::InvalidInput(String::from(
                "The distance matrix provided is empty",
            )));
        }
        self.validate_square()?;
        self.validate_entries()?;
        self.validate_symmetry()?;
        self.validate_params()
    }

    fn validate_square(&self) -> Result<(), ClusterError> {
        let n = self.dist_matrix.len();
        for (row, distances) in self.dist_matrix.iter().enumerate() {
            if distances.len() != n {
                return Err(ClusterError::InvalidInput(format!(
                    "Distance matrix must be square: it has {n} rows, but row {row} has {} columns",
                    distances.len()
                )));
            }
        }
        Ok(())
    }

    fn validate_entries(&self) -> Result<(), ClusterError> {
        for (row, distances) in self.dist_matrix.iter().enumerate() {
            for (col, &dist) in distances.iter().enumerate() {
                if row == col {
                    if dist != T::zero() {
                        log::warn!("Ignoring non-zero self distance at ({row}, {row})");
                    }
                    continue;
                }
                if dist.is_nan() {
                    return Err(ClusterError::InvalidInput(format!(
                        "Distance at ({row}, {col}) is NaN"
                    )));
                }
                if dist < T::zero() {
                    return Err(ClusterError::InvalidInput(format!(
                        "Distance at ({row}, {col}) is negative"
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_symmetry(&self) -> Result<(), ClusterError> {
        let n = self.dist_matrix.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (self.dist_matrix[i][j], self.dist_matrix[j][i]);
                let is_symmetrical = if a.is_infinite() || b.is_infinite() {
                    a == b
                } else {
                    (a - b).abs() <= T::epsilon()
                };
                if !is_symmetrical {
                    return Err(ClusterError::InvalidInput(format!(
                        "Distance matrix must be symmetrical, but ({i}, {j}) and ({j}, {i}) differ"
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_params(&self) -> Result<(), ClusterError> {
        let n_samples = self.dist_matrix.len();
        let n_clusters = self.params.n_clusters;
        if n_clusters < 1 || n_clusters > n_samples {
            return Err(ClusterError::InvalidInput(format!(
                "Number of clusters ({n_clusters}) must be between 1 and the number of points \
                ({n_samples})"
            )));
        }
        let start_node = self.params.start_node;
        if start_node >= n_samples {
            return Err(ClusterError::InvalidInput(format!(
                "Start node ({start_node}) must be less than the number of points ({n_samples})"
            )));
        }
        Ok(())
    }
}
