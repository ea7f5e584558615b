use crate::ClusterError;
use num_traits::Float;

/// Calculates the Euclidean distance matrix between a collection of points, ready to be
/// clustered.
///
/// # Parameters
/// * `data` - the points, a collection of vectors of floating point numbers. The vectors must
///            all be of the same dimensionality and contain only finite values.
///
/// # Returns
/// * A square, symmetrical matrix of distances with zeros on the diagonal, or an error if the
///   data is empty, the dimensions are mismatched or a coordinate is not finite.
///
/// # Examples
/// ```
///use max_spacing::pairwise_distances;
///
///let points = vec![vec![0.0, 0.0], vec![3.0, 4.0]];
///let dist_matrix = pairwise_distances(&points).unwrap();
///assert_eq!(dist_matrix, vec![vec![0.0, 5.0], vec![5.0, 0.0]]);
/// ```
pub fn pairwise_distances<T: Float>(data: &[Vec<T>]) -> Result<Vec<Vec<T>>, ClusterError> {
    if data.is_empty() {
        return Err(ClusterError::InvalidInput(String::from(
            "The dataset provided is empty",
        )));
    }
    let dims_0th = data[0].len();
    for (n, datapoint) in data.iter().enumerate() {
        if datapoint.iter().any(|element| !element.is_finite()) {
            return Err(ClusterError::InvalidInput(format!(
                "{n}th vector contains non-finite element(s)"
            )));
        }
        let dims_nth = datapoint.len();
        if dims_nth != dims_0th {
            return Err(ClusterError::InvalidInput(format!(
                "0th data point has {dims_0th} dimensions, but {n}th has {dims_nth}"
            )));
        }
    }

    Ok(data
        .iter()
        .map(|a| data.iter().map(|b| euclidean_distance(a, b)).collect())
        .collect())
}

pub(crate) fn euclidean_distance<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (*x - *y) * (*x - *y))
        .fold(T::zero(), std::ops::Add::add)
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean() {
        assert_eq!(5.0, euclidean_distance(&[1.0, 1.0], &[4.0, 5.0]));
        assert_eq!(0.0_f32, euclidean_distance(&[2.0_f32], &[2.0]));
    }

    #[test]
    fn matrix_is_symmetrical() {
        let points = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 2.0]];
        let dist_matrix = pairwise_distances(&points).unwrap();
        for i in 0..3 {
            assert_eq!(0.0, dist_matrix[i][i]);
            for j in 0..3 {
                assert_eq!(dist_matrix[i][j], dist_matrix[j][i]);
            }
        }
        assert_eq!(5.0_f64.sqrt(), dist_matrix[1][2]);
    }

    #[test]
    fn rejects_bad_points() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(
            pairwise_distances(&empty),
            Err(ClusterError::InvalidInput(..))
        ));

        let mismatched = vec![vec![1.5, 2.2], vec![1.2]];
        assert!(matches!(
            pairwise_distances(&mismatched),
            Err(ClusterError::InvalidInput(..))
        ));

        let infinite = vec![vec![1.5, f64::INFINITY]];
        assert!(matches!(
            pairwise_distances(&infinite),
            Err(ClusterError::InvalidInput(..))
        ));
    }
}
