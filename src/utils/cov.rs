use crate::math::{Matrix, Point, Real, DIM};

/// Computes the covariance matrix of a set of points.
pub fn cov(pts: &[Point<Real>]) -> Matrix<Real> {
    center_cov(pts).1
}

/// Computes the centroid and the covariance matrix of a set of points.
///
/// The covariance entries are sums of centered second moments, accumulated
/// in input order. They are deliberately not divided by the point count:
/// eigenvectors are invariant under that scaling and it is the eigenvectors
/// the rest of the pipeline consumes.
///
/// Only the upper triangle is accumulated; the lower triangle is mirrored
/// from it afterwards, so `cov[(i, j)] == cov[(j, i)]` holds exactly rather
/// than up to the rounding drift two independent accumulations would cause.
///
/// # Panics
///
/// Panics if the input slice is empty.
pub fn center_cov(pts: &[Point<Real>]) -> (Point<Real>, Matrix<Real>) {
    let center = crate::utils::center(pts);
    let mut cov = Matrix::<Real>::zeros();

    for pt in pts {
        let cp = *pt - center;

        for i in 0..DIM {
            for j in i..DIM {
                cov[(i, j)] += cp[i] * cp[j];
            }
        }
    }

    for i in 1..DIM {
        for j in 0..i {
            cov[(i, j)] = cov[(j, i)];
        }
    }

    (center, cov)
}
