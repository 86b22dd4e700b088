use approx::relative_eq;
use na::{Point3, Rotation3, Vector3};
use obb3d::bounding_volume::{obb_vertices, Aabb, Obb};

/// The eight corners of an origin-centered cuboid with the given
/// half-extents.
fn cuboid_corners(half_extents: Vector3<f64>) -> Vec<Point3<f64>> {
    Aabb::new(Point3::from(-half_extents), Point3::from(half_extents))
        .vertices()
        .to_vec()
}

fn rigid(pts: &[Point3<f64>], rot: &Rotation3<f64>, shift: &Vector3<f64>) -> Vec<Point3<f64>> {
    pts.iter().map(|pt| rot * *pt + *shift).collect()
}

fn random_cloud(rng: &mut oorandom::Rand32, n: usize) -> Vec<Point3<f64>> {
    let coord = |rng: &mut oorandom::Rand32| (rng.rand_float() * 10.0 - 5.0) as f64;
    (0..n)
        .map(|_| Point3::new(coord(rng), coord(rng), coord(rng)))
        .collect()
}

/// Set equality up to reordering, with a per-point distance tolerance.
fn matches_as_point_set(a: &[Point3<f64>], b: &[Point3<f64>], eps: f64) -> bool {
    a.len() == b.len() && a.iter().all(|pa| b.iter().any(|pb| (pa - pb).norm() <= eps))
}

#[test]
fn empty_input_yields_an_empty_result() {
    assert!(obb_vertices(&[]).is_empty());
    assert!(Obb::from_points(&[]).is_none());
}

#[test]
fn single_point_yields_a_degenerate_box() {
    let pt = Point3::new(1.5, -2.0, 3.25);
    let obb = Obb::from_points(&[pt]).unwrap();

    assert!(obb.is_axis_aligned());
    assert_eq!(obb.volume(), 0.0);

    for vtx in obb.vertices() {
        assert!((vtx - pt).norm() <= 1.0e-9);
    }

    assert_eq!(obb_vertices(&[pt]).len(), 8);
}

#[test]
fn coincident_points_fall_back_to_an_axis_aligned_box() {
    let pts = vec![Point3::new(0.5, 0.5, 0.5); 16];
    let obb = Obb::from_points(&pts).unwrap();

    assert!(obb.is_axis_aligned());
    assert_eq!(obb.volume(), 0.0);
    assert_eq!(obb.center(), pts[0]);
}

#[test]
fn rotation_columns_are_orthonormal() {
    let rot = Rotation3::from_euler_angles(0.3, -1.1, 0.7);
    let pts = rigid(
        &cuboid_corners(Vector3::new(0.5, 1.0, 1.5)),
        &rot,
        &Vector3::new(1.0, 2.0, 3.0),
    );

    let obb = Obb::from_points(&pts).unwrap();
    assert!(!obb.is_axis_aligned());

    for i in 0..3 {
        assert!((obb.rotation.column(i).norm() - 1.0).abs() <= 1.0e-6);

        for j in i + 1..3 {
            assert!(obb.rotation.column(i).dot(&obb.rotation.column(j)).abs() <= 1.0e-6);
        }
    }
}

#[test]
fn every_input_point_is_contained() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..10 {
        let pts = random_cloud(&mut rng, 32);
        let obb = Obb::from_points(&pts).unwrap();

        for pt in &pts {
            assert!(obb.contains_point(pt, 1.0e-4));
        }
    }
}

#[test]
fn axis_aligned_unit_cube_is_recovered() {
    let cube: Vec<_> = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
        .vertices()
        .to_vec();

    let obb = Obb::from_points(&cube).unwrap();

    assert!(relative_eq!(obb.volume(), 1.0, epsilon = 1.0e-6));
    assert!(matches_as_point_set(&obb.vertices(), &cube, 1.0e-6));
}

#[test]
fn rotated_and_translated_cuboid_is_recovered() {
    // Three distinct extents so the principal axes are unambiguous. (A
    // cube's corner cloud has an isotropic covariance matrix: its
    // orientation is invisible to PCA.)
    let corners = cuboid_corners(Vector3::new(0.5, 1.0, 1.5));
    let rot = Rotation3::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_4);
    let shift = Vector3::new(5.0, 5.0, 5.0);
    let pts = rigid(&corners, &rot, &shift);

    let obb = Obb::from_points(&pts).unwrap();
    assert!(!obb.is_axis_aligned());
    assert!(relative_eq!(obb.volume(), 6.0, epsilon = 1.0e-6));

    // The half-extents come back up to a permutation of the local axes.
    let mut half_extents: Vec<f64> = obb.half_extents().iter().copied().collect();
    half_extents.sort_by(|a, b| a.partial_cmp(b).unwrap());
    for (actual, expected) in half_extents.iter().zip([0.5, 1.0, 1.5]) {
        assert!((actual - expected).abs() <= 1.0e-6);
    }

    // Undoing the known rigid motion must recover the original corners.
    let inv = rot.inverse();
    let restored: Vec<_> = obb.vertices().iter().map(|vtx| inv * (*vtx - shift)).collect();
    assert!(matches_as_point_set(&restored, &corners, 1.0e-4));
}

#[test]
fn obb_is_covariant_under_rigid_motion() {
    let corners = cuboid_corners(Vector3::new(0.4, 0.9, 2.1));
    let base = Obb::from_points(&corners).unwrap();

    let rot = Rotation3::from_euler_angles(0.9, 0.2, -0.5);
    let shift = Vector3::new(-3.0, 0.25, 7.0);
    let moved = Obb::from_points(&rigid(&corners, &rot, &shift)).unwrap();

    assert!(relative_eq!(moved.volume(), base.volume(), epsilon = 1.0e-6));

    let expected: Vec<_> = base.vertices().iter().map(|vtx| rot * *vtx + shift).collect();
    assert!(matches_as_point_set(&moved.vertices(), &expected, 1.0e-4));
}

#[test]
fn pca_box_is_no_larger_than_the_aabb_on_an_elongated_cloud() {
    // A 1×1×5 cluster rotated 30° away from the world axes.
    let corners = cuboid_corners(Vector3::new(0.5, 0.5, 2.5));
    let rot = Rotation3::from_axis_angle(&Vector3::x_axis(), 30.0f64.to_radians());
    let pts = rigid(&corners, &rot, &Vector3::zeros());

    let obb = Obb::from_points(&pts).unwrap();
    let aabb = Aabb::from_points(&pts);

    assert!(obb.volume() <= aabb.volume() + 1.0e-9);
}

#[test]
fn identical_input_yields_identical_output() {
    let mut rng = oorandom::Rand32::new(7);
    let pts = random_cloud(&mut rng, 64);

    assert_eq!(obb_vertices(&pts), obb_vertices(&pts));
}

#[test]
fn edge_table_wires_a_closed_box() {
    assert_eq!(Obb::EDGES_VERTEX_IDS, Aabb::EDGES_VERTEX_IDS);

    let aabb = Aabb::new(Point3::new(-1.0, -2.0, -3.0), Point3::new(4.0, 5.0, 6.0));
    assert_eq!(aabb.half_extents(), Vector3::new(2.5, 3.5, 4.5));

    let vertices = aabb.vertices();
    let mut incidence = [0usize; 8];

    for (i, j) in Aabb::EDGES_VERTEX_IDS {
        incidence[i] += 1;
        incidence[j] += 1;

        // Adjacent vertices differ along exactly one axis.
        let diff = (vertices[i] - vertices[j]).map(|x| usize::from(x.abs() > 1.0e-12));
        assert_eq!(diff.x + diff.y + diff.z, 1);
    }

    // Each corner of a rectangular parallelepiped touches exactly 3 edges.
    assert!(incidence.iter().all(|&n| n == 3));
}
