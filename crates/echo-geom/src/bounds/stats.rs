// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Mat3, Vec2, Vec3};
use tracing::{debug, trace};

use crate::error::{GeomError, GeomResult};
use crate::types::obb::Obb;

/// Upper bound on Jacobi sweeps in [`jacobi_eigen`].
pub const JACOBI_MAX_ITERATIONS: usize = 50;

/// Off-diagonal entries at or below this are treated as already zero.
const JACOBI_ROTATION_THRESHOLD: f32 = 0.0001;

/// Arithmetic mean of the points.
pub fn centroid<'a, I>(points: I) -> GeomResult<Vec3>
where
    I: IntoIterator<Item = &'a Vec3>,
{
    let mut sum = Vec3::ZERO;
    let mut count = 0.0_f32;
    for p in points {
        sum += *p;
        count += 1.0;
    }
    if count == 0.0 {
        return Err(GeomError::EmptyPointSet);
    }
    Ok(sum.scale(1.0 / count))
}

/// Arithmetic mean of 2D points.
pub fn centroid_2d<'a, I>(points: I) -> GeomResult<Vec2>
where
    I: IntoIterator<Item = &'a Vec2>,
{
    let mut sum = Vec2::ZERO;
    let mut count = 0.0_f32;
    for p in points {
        sum += *p;
        count += 1.0;
    }
    if count == 0.0 {
        return Err(GeomError::EmptyPointSet);
    }
    Ok(sum.scale(1.0 / count))
}

/// Population covariance matrix of the points (symmetric, divided by `n`).
pub fn covariance(points: &[Vec3]) -> GeomResult<Mat3> {
    let c = centroid(points)?;
    let mut cov = Mat3::zero();
    let mut count = 0.0_f32;
    for p in points {
        let d = p.sub(&c).to_array();
        for (row, dr) in d.iter().enumerate() {
            for (col, dc) in d.iter().enumerate() {
                cov.set(row, col, cov.get(row, col) + dr * dc);
            }
        }
        count += 1.0;
    }
    Ok(cov.mul_scalar(1.0 / count))
}

/// Eigen-decomposition of a symmetric 3×3 matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SymmetricEigen {
    /// Eigenvalues, unsorted; `values[k]` pairs with `vectors[k]`.
    pub values: [f32; 3],
    /// Unit eigenvectors, mutually orthogonal.
    pub vectors: [Vec3; 3],
    /// Jacobi sweeps performed.
    pub iterations: usize,
}

/// Cosine/sine of the rotation that zeroes `a[p][q]`.
fn sym_schur2(a: &Mat3, p: usize, q: usize) -> (f32, f32) {
    let apq = a.get(p, q);
    if apq.abs() <= JACOBI_ROTATION_THRESHOLD {
        return (1.0, 0.0);
    }
    let r = (a.get(q, q) - a.get(p, p)) / (2.0 * apq);
    let t = if r >= 0.0 {
        1.0 / (r + r.mul_add(r, 1.0).sqrt())
    } else {
        -1.0 / (-r + r.mul_add(r, 1.0).sqrt())
    };
    let c = 1.0 / t.mul_add(t, 1.0).sqrt();
    (c, t * c)
}

fn off_diagonal_norm(a: &Mat3) -> f32 {
    let mut off = 0.0;
    for i in 0..3 {
        for j in 0..3 {
            if i != j {
                off += a.get(i, j) * a.get(i, j);
            }
        }
    }
    off
}

/// Cyclic Jacobi eigen-decomposition of a symmetric matrix.
///
/// Each sweep rotates away the largest off-diagonal entry. Stops after
/// [`JACOBI_MAX_ITERATIONS`] sweeps or, after the third, as soon as the
/// squared off-diagonal norm stops decreasing. The result is approximate
/// for ill-conditioned input and is meant for fitting bounding volumes.
pub fn jacobi_eigen(m: &Mat3) -> SymmetricEigen {
    debug_assert!(m.is_symmetric(), "jacobi_eigen requires a symmetric matrix");
    let mut a = *m;
    let mut v = Mat3::identity();
    let mut prev_off = f32::INFINITY;
    let mut iterations = JACOBI_MAX_ITERATIONS;
    let mut converged = false;

    for n in 0..JACOBI_MAX_ITERATIONS {
        let (mut p, mut q) = (0, 1);
        for i in 0..3 {
            for j in 0..3 {
                if i != j && a.get(i, j).abs() > a.get(p, q).abs() {
                    p = i;
                    q = j;
                }
            }
        }

        let (c, s) = sym_schur2(&a, p, q);
        let mut j = Mat3::identity();
        j.set(p, p, c);
        j.set(p, q, s);
        j.set(q, p, -s);
        j.set(q, q, c);

        v = v.multiply(&j);
        a = j.transpose().multiply(&a).multiply(&j);

        let off = off_diagonal_norm(&a);
        if n > 2 && off >= prev_off {
            iterations = n + 1;
            converged = true;
            trace!(iterations, off, "jacobi converged");
            break;
        }
        prev_off = off;
    }

    if !converged {
        debug!(
            iterations,
            off = off_diagonal_norm(&a),
            "jacobi stopped at iteration cap"
        );
    }

    SymmetricEigen {
        values: [a.get(0, 0), a.get(1, 1), a.get(2, 2)],
        vectors: [v.col(0), v.col(1), v.col(2)],
        iterations,
    }
}

/// Oriented box fitted to the points along their principal axes.
///
/// Axes are the covariance eigenvectors, re-orthonormalised into a
/// right-handed frame; extents come from projecting every point.
pub fn obb_from_points(points: &[Vec3]) -> GeomResult<Obb> {
    let cov = covariance(points)?;
    let eigen = jacobi_eigen(&cov);
    let (ax, ay, az) = Vec3::orthogonalize(&eigen.vectors[0], &eigen.vectors[1]);
    let axes = [ax, ay, az];

    let mut lo = [f32::INFINITY; 3];
    let mut hi = [f32::NEG_INFINITY; 3];
    for p in points {
        for ((axis, l), h) in axes.iter().zip(lo.iter_mut()).zip(hi.iter_mut()) {
            let d = p.dot(axis);
            *l = l.min(d);
            *h = h.max(d);
        }
    }

    let mut center = Vec3::ZERO;
    let mut half = [0.0_f32; 3];
    for (((axis, l), h), e) in axes.iter().zip(lo).zip(hi).zip(half.iter_mut()) {
        center = center.add(&axis.scale((l + h) * 0.5));
        *e = (h - l) * 0.5;
    }
    Ok(Obb::new(center, Vec3::from(half), axes))
}
