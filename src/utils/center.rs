use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// The center is the componentwise arithmetic mean of the points, all
/// weighted equally. Points are accumulated in input order so the rounding
/// of the result is reproducible across runs.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Example
///
/// ```
/// use obb3d::math::Point;
/// use obb3d::utils::center;
///
/// let points = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(&points);
/// assert!((c.x - 4.0 / 3.0).abs() < 1.0e-6);
/// assert!((c.y - 4.0 / 3.0).abs() < 1.0e-6);
/// assert!(c.z.abs() < 1.0e-6);
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom = 1.0 / (pts.len() as Real);

    let mut piter = pts.iter();
    let mut res = *piter.next().unwrap() * denom;

    for pt in piter {
        res += pt.coords * denom;
    }

    res
}
