use crate::math::{Matrix, Real, Vector, DIM};

/// Convergence threshold on the largest off-diagonal magnitude.
const JACOBI_EPSILON: Real = 1.0e-10;
/// Hard cap on the number of Jacobi rotations.
const JACOBI_MAX_ITERS: usize = 100;

/// Computes the eigenvectors of a symmetric 3×3 matrix with largest-pivot
/// Jacobi rotations.
///
/// Returns `None` when the matrix is structurally degenerate (every entry
/// below the convergence threshold): any basis would be arbitrary there and
/// the caller is expected to fall back to the world axes instead.
///
/// Reaching the iteration cap without convergence is not a failure: the
/// rotation accumulated so far is returned best-effort. The output always
/// goes through [`orthonormalize`], so small residual deviations from
/// orthonormality are repaired before the vectors are used as a basis.
pub fn symmetric_eigenvectors(m: &Matrix<Real>) -> Option<[Vector<Real>; 3]> {
    if m.amax() < JACOBI_EPSILON {
        return None;
    }

    let mut a = *m;
    let mut v = Matrix::<Real>::identity();
    let mut converged = false;

    for _ in 0..JACOBI_MAX_ITERS {
        // The largest off-diagonal element is the pivot.
        let mut max = 0.0;
        let (mut p, mut q) = (0, 1);

        for i in 0..DIM {
            for j in i + 1..DIM {
                if a[(i, j)].abs() > max {
                    max = a[(i, j)].abs();
                    p = i;
                    q = j;
                }
            }
        }

        if max < JACOBI_EPSILON {
            converged = true;
            break;
        }

        let phi = 0.5 * (2.0 * a[(p, q)]).atan2(a[(q, q)] - a[(p, p)]);
        let (s, c) = phi.sin_cos();

        // Similarity transform of `a` by the Givens rotation: rows p and q,
        // then columns p and q.
        for k in 0..DIM {
            let (apk, aqk) = (a[(p, k)], a[(q, k)]);
            a[(p, k)] = c * apk - s * aqk;
            a[(q, k)] = s * apk + c * aqk;
        }

        for k in 0..DIM {
            let (akp, akq) = (a[(k, p)], a[(k, q)]);
            a[(k, p)] = c * akp - s * akq;
            a[(k, q)] = s * akp + c * akq;
        }

        // Accumulate the rotation; the eigenvectors are the columns of `v`.
        for k in 0..DIM {
            let (vkp, vkq) = (v[(k, p)], v[(k, q)]);
            v[(k, p)] = c * vkp - s * vkq;
            v[(k, q)] = s * vkp + c * vkq;
        }
    }

    if !converged {
        log::trace!("Jacobi solver hit the iteration cap; using best-effort eigenvectors");
    }

    let x = v.column(0).normalize();
    let y = v.column(1).normalize();
    let z = v.column(2).normalize();

    Some(orthonormalize(&x, &y, &z))
}

/// Gram–Schmidt re-orthonormalization of three approximately orthonormal
/// vectors.
///
/// `x` is kept unchanged as the reference axis; the components of `y` along
/// `x`, and of `z` along `x` and the corrected `y`, are removed before
/// renormalization. The result is mutually orthogonal and unit length
/// within floating tolerance.
pub fn orthonormalize(
    x: &Vector<Real>,
    y: &Vector<Real>,
    z: &Vector<Real>,
) -> [Vector<Real>; 3] {
    let yy = (y - x * y.dot(x)).normalize();
    let zz = (z - x * z.dot(x) - &yy * z.dot(&yy)).normalize();

    [*x, yy, zz]
}
