//! Oriented bounding box computed from the principal axes of a point cloud.

use crate::bounding_volume::Aabb;
use crate::math::{Matrix, Point, Real, Vector};
use crate::utils;

/// An oriented bounding box aligned to a point cloud's principal axes.
///
/// The box is obtained by diagonalizing the covariance matrix of the cloud
/// and bounding the points in the resulting eigenvector frame. It is not
/// guaranteed to be the smallest enclosing OBB, though it is a pretty good
/// one for most purposes.
///
/// When the covariance matrix is degenerate (e.g. all points coincide), no
/// principal axes exist and the box silently degrades to the world-aligned
/// bounding box of the cloud; see [`Obb::is_axis_aligned`].
///
/// # Example
///
/// ```
/// use obb3d::bounding_volume::Obb;
/// use obb3d::na::Point3;
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.5),
///     Point3::new(2.0, 2.0, 1.0),
///     Point3::new(3.0, 1.0, 0.0),
/// ];
///
/// let obb = Obb::from_points(&points).unwrap();
/// assert!(points.iter().all(|pt| obb.contains_point(pt, 1.0e-6)));
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obb {
    /// The box orientation. Columns are the box axes expressed in world
    /// space (local→world); since the matrix is orthogonal, the
    /// world→local map is its transpose, never a general inversion.
    pub rotation: Matrix<Real>,
    /// The origin of the local frame: the point-cloud centroid, or the
    /// world origin for the axis-aligned fallback.
    pub origin: Point<Real>,
    /// The box bounds in the local (principal-axis) frame, relative to
    /// `origin`.
    pub local_aabb: Aabb,
    axis_aligned: bool,
}

impl Obb {
    /// The vertex indices of each edge of this `Obb`, taken from the
    /// `self.vertices()` array: bottom face, top face, then the four
    /// vertical edges.
    pub const EDGES_VERTEX_IDS: [(usize, usize); 12] = Aabb::EDGES_VERTEX_IDS;

    /// Computes the oriented bounding box of a point cloud.
    ///
    /// Returns `None` if and only if `pts` is empty. The computation is
    /// pure and one-shot: points are consumed in input order and nothing is
    /// retained across calls.
    pub fn from_points(pts: &[Point<Real>]) -> Option<Obb> {
        if pts.is_empty() {
            return None;
        }

        let (center, cov) = utils::center_cov(pts);

        let basis = match utils::symmetric_eigenvectors(&cov) {
            Some(basis) => basis,
            None => {
                log::debug!("degenerate covariance matrix; falling back to an axis-aligned box");
                return Some(Obb {
                    rotation: Matrix::identity(),
                    origin: Point::origin(),
                    local_aabb: Aabb::from_points(pts),
                    axis_aligned: true,
                });
            }
        };

        let mut rotation = Matrix::from_columns(&basis);
        if rotation.determinant() < 0.0 {
            rotation = -rotation;
        }

        let world_to_local = rotation.transpose();
        let mut mins = Point::from(world_to_local * (pts[0] - center));
        let mut maxs = mins;

        for pt in &pts[1..] {
            let local = Point::from(world_to_local * (*pt - center));
            mins = mins.inf(&local);
            maxs = maxs.sup(&local);
        }

        Some(Obb {
            rotation,
            origin: center,
            local_aabb: Aabb::new(mins, maxs),
            axis_aligned: false,
        })
    }

    /// The world-space center of the box.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.to_world(&self.local_aabb.center())
    }

    /// The extents (full edge lengths) of the box.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.local_aabb.extents()
    }

    /// The half-extents of the box.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.local_aabb.half_extents()
    }

    /// The volume of the box.
    #[inline]
    pub fn volume(&self) -> Real {
        self.local_aabb.volume()
    }

    /// `true` when no usable eigen basis existed and the box fell back to
    /// the world axes.
    ///
    /// The vertices of a fallback box are just the corners of the cloud's
    /// world-aligned bounding box, in the same canonical order.
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        self.axis_aligned
    }

    /// Maps a world-space point into the box's local frame.
    #[inline]
    pub fn to_local(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.rotation.transpose() * (*pt - self.origin))
    }

    /// Maps a local-frame point back to world space.
    #[inline]
    pub fn to_world(&self, pt: &Point<Real>) -> Point<Real> {
        self.origin + self.rotation * pt.coords
    }

    /// Checks whether the given world-space point lies inside the box,
    /// with tolerance `eps` along each local axis.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>, eps: Real) -> bool {
        self.local_aabb
            .loosened(eps)
            .contains_local_point(&self.to_local(pt))
    }

    /// Computes the eight world-space corners of the box.
    ///
    /// The corners are given in canonical order (bottom face of the local
    /// frame counter-clockwise, then top face counter-clockwise), matching
    /// the wiring in [`Obb::EDGES_VERTEX_IDS`].
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        self.local_aabb.vertices().map(|v| self.to_world(&v))
    }
}

/// Computes the eight world-space corners of the oriented bounding box of a
/// point cloud.
///
/// Returns an empty vector when `pts` is empty, and exactly eight corners
/// in canonical order otherwise. Consumers draw the wireframe by connecting
/// the corners with [`Obb::EDGES_VERTEX_IDS`].
///
/// # Example
///
/// ```
/// use obb3d::bounding_volume::obb_vertices;
/// use obb3d::na::Point3;
///
/// assert!(obb_vertices(&[]).is_empty());
/// assert_eq!(obb_vertices(&[Point3::origin()]).len(), 8);
/// ```
pub fn obb_vertices(pts: &[Point<Real>]) -> Vec<Point<Real>> {
    match Obb::from_points(pts) {
        Some(obb) => obb.vertices().to_vec(),
        None => Vec::new(),
    }
}
