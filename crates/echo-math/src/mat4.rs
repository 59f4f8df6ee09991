// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{lerp, Mat3, Quat, Vec3, Vec4};

/// Row‑major 4×4 matrix in row‑vector convention.
///
/// - A point is transformed as `v' = v * M`; translation lives in the last
///   row (indices 12, 13, 14).
/// - `a.multiply(&b)` applies `a` first and `b` second, so chains read in the
///   order transforms are applied.
/// - Perspective terms are preserved; [`Mat4::transform_coord`] performs the
///   homogeneous divide, [`Mat4::transform_point`] does not.
///
/// # Examples
/// ```
/// use echo_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// - Uses `f32`; repeated multiplies and transforms will accumulate rounding.
/// - Rotation helpers are consistent with [`Quat`] conversions (`from_quat`).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    data: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // row 0
                0.0, 1.0, 0.0, 0.0, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Returns the all-zero matrix.
    pub const fn zero() -> Self {
        Self { data: [0.0; 16] }
    }

    /// Creates a matrix from row-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Builds a matrix from four rows.
    pub const fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        let [a, b, c, d] = r0.to_array();
        let [e, f, g, h] = r1.to_array();
        let [i, j, k, l] = r2.to_array();
        let [m, n, o, p] = r3.to_array();
        Self::new([a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p])
    }

    /// Returns the matrix as a row‑major array.
    pub const fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` exceeds 3.
    pub const fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * 4 + col]
    }

    /// Sets the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * 4 + col] = value;
    }

    /// Row `i` as a [`Vec4`].
    pub const fn row(&self, i: usize) -> Vec4 {
        Vec4::new(
            self.data[i * 4],
            self.data[i * 4 + 1],
            self.data[i * 4 + 2],
            self.data[i * 4 + 3],
        )
    }

    /// Column `i` as a [`Vec4`].
    pub const fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.data[i], self.data[4 + i], self.data[8 + i], self.data[12 + i])
    }

    /// Builds a translation matrix.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // row 0
                0.0, 1.0, 0.0, 0.0, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                tx, ty, tz, 1.0, // row 3 (translation)
            ],
        }
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // row 0
                0.0, sy, 0.0, 0.0, // row 1
                0.0, 0.0, sz, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Builds a rotation matrix from an axis and angle in radians.
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity rotation.
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self::from_quat(&Quat::from_axis_angle(axis, angle))
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Constructs a matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Builds a rotation matrix from Euler angles in radians.
    ///
    /// Applies `roll` about +Z first, then `pitch` about +X, then `yaw`
    /// about +Y: `R = R_z(roll) * R_x(pitch) * R_y(yaw)` in row-vector order.
    /// Matches [`Quat::from_euler_o2i`] with heading = yaw and bank = roll.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use echo_math::{Mat4, Vec3};
    /// // Yaw=90°: +Z maps to +X
    /// let r = Mat4::rotation_from_euler(FRAC_PI_2, 0.0, 0.0);
    /// let v = r.transform_direction(&Vec3::UNIT_Z);
    /// assert!((v.x() - 1.0).abs() < 1e-6);
    /// ```
    pub fn rotation_from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::rotation_z(roll)
            .multiply(&Self::rotation_x(pitch))
            .multiply(&Self::rotation_y(yaw))
    }

    /// Builds a transform whose rows are the given basis axes and origin.
    ///
    /// Maps object-space `+X/+Y/+Z` onto `x_axis/y_axis/z_axis` and the
    /// object origin onto `origin`.
    pub const fn from_axes(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3, origin: Vec3) -> Self {
        Self::from_rows(
            Vec4::from_vec3(x_axis, 0.0),
            Vec4::from_vec3(y_axis, 0.0),
            Vec4::from_vec3(z_axis, 0.0),
            Vec4::from_vec3(origin, 1.0),
        )
    }

    /// Returns the three basis rows (`x`, `y`, `z` axes) of the upper 3×3.
    pub const fn to_axes(&self) -> (Vec3, Vec3, Vec3) {
        (self.row(0).xyz(), self.row(1).xyz(), self.row(2).xyz())
    }

    /// Translation part (last row).
    pub const fn translation_part(&self) -> Vec3 {
        self.row(3).xyz()
    }

    /// Upper-left 3×3 block.
    pub const fn to_mat3(&self) -> Mat3 {
        Mat3::new([
            self.data[0],
            self.data[1],
            self.data[2],
            self.data[4],
            self.data[5],
            self.data[6],
            self.data[8],
            self.data[9],
            self.data[10],
        ])
    }

    fn look_at_axes(eye: &Vec3, x: Vec3, y: Vec3, z: Vec3) -> Self {
        Self::from_rows(
            Vec4::new(x.x(), y.x(), z.x(), 0.0),
            Vec4::new(x.y(), y.y(), z.y(), 0.0),
            Vec4::new(x.z(), y.z(), z.z(), 0.0),
            Vec4::new(-x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0),
        )
    }

    /// Left-handed view matrix looking from `eye` toward `target`.
    pub fn look_at_lh(eye: &Vec3, target: &Vec3, up: &Vec3) -> Self {
        let z = target.sub(eye).normalize();
        let x = up.cross(&z).normalize();
        let y = z.cross(&x);
        Self::look_at_axes(eye, x, y, z)
    }

    /// Right-handed view matrix looking from `eye` toward `target`.
    pub fn look_at_rh(eye: &Vec3, target: &Vec3, up: &Vec3) -> Self {
        let z = eye.sub(target).normalize();
        let x = up.cross(&z).normalize();
        let y = z.cross(&x);
        Self::look_at_axes(eye, x, y, z)
    }

    /// Left-handed perspective projection mapping view depth to `[0, 1]`.
    ///
    /// `fov_y` is the vertical field of view in radians; `aspect` is
    /// width / height.
    #[rustfmt::skip]
    pub fn perspective_fov_lh(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let ys = 1.0 / (fov_y * 0.5).tan();
        let xs = ys / aspect;
        let q = far / (far - near);
        Self::new([
            xs,  0.0, 0.0,        0.0,
            0.0, ys,  0.0,        0.0,
            0.0, 0.0, q,          1.0,
            0.0, 0.0, -near * q,  0.0,
        ])
    }

    /// Right-handed perspective projection mapping view depth to `[0, 1]`.
    #[rustfmt::skip]
    pub fn perspective_fov_rh(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let ys = 1.0 / (fov_y * 0.5).tan();
        let xs = ys / aspect;
        let q = far / (near - far);
        Self::new([
            xs,  0.0, 0.0,       0.0,
            0.0, ys,  0.0,       0.0,
            0.0, 0.0, q,         -1.0,
            0.0, 0.0, near * q,  0.0,
        ])
    }

    /// Left-handed orthographic projection centred on the view axis.
    #[rustfmt::skip]
    pub fn ortho_lh(width: f32, height: f32, near: f32, far: f32) -> Self {
        Self::new([
            2.0 / width, 0.0,          0.0,                 0.0,
            0.0,         2.0 / height, 0.0,                 0.0,
            0.0,         0.0,          1.0 / (far - near),  0.0,
            0.0,         0.0,          near / (near - far), 1.0,
        ])
    }

    /// Right-handed orthographic projection centred on the view axis.
    #[rustfmt::skip]
    pub fn ortho_rh(width: f32, height: f32, near: f32, far: f32) -> Self {
        Self::new([
            2.0 / width, 0.0,          0.0,                 0.0,
            0.0,         2.0 / height, 0.0,                 0.0,
            0.0,         0.0,          1.0 / (near - far),  0.0,
            0.0,         0.0,          near / (near - far), 1.0,
        ])
    }

    /// Left-handed orthographic projection of an arbitrary view rectangle.
    #[rustfmt::skip]
    pub fn ortho_off_center_lh(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self::new([
            2.0 / (right - left),            0.0,                             0.0,                 0.0,
            0.0,                             2.0 / (top - bottom),            0.0,                 0.0,
            0.0,                             0.0,                             1.0 / (far - near),  0.0,
            (left + right) / (left - right), (top + bottom) / (bottom - top), near / (near - far), 1.0,
        ])
    }

    /// Reflection through the plane `n·p + d = 0`.
    ///
    /// `normal` must be unit length.
    #[rustfmt::skip]
    pub fn reflection(normal: &Vec3, d: f32) -> Self {
        debug_assert!(normal.is_normalized(1e-3), "reflection requires a unit normal");
        let [a, b, c] = normal.to_array();
        Self::new([
            1.0 - 2.0 * a * a, -2.0 * b * a,      -2.0 * c * a,      0.0,
            -2.0 * a * b,      1.0 - 2.0 * b * b, -2.0 * c * b,      0.0,
            -2.0 * a * c,      -2.0 * b * c,      1.0 - 2.0 * c * c, 0.0,
            -2.0 * a * d,      -2.0 * b * d,      -2.0 * c * d,      1.0,
        ])
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// Row-vector semantics: the result applies `self` first, then `rhs`.
    ///
    /// # Examples
    /// ```
    /// use echo_math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.get(row, k) * rhs.get(k, col);
                }
                out[row * 4 + col] = sum;
            }
        }
        Self::new(out)
    }

    /// Element-wise sum.
    pub fn add(&self, rhs: &Self) -> Self {
        let mut out = self.data;
        for (o, r) in out.iter_mut().zip(rhs.data.iter()) {
            *o += r;
        }
        Self::new(out)
    }

    /// Element-wise difference.
    pub fn sub(&self, rhs: &Self) -> Self {
        let mut out = self.data;
        for (o, r) in out.iter_mut().zip(rhs.data.iter()) {
            *o -= r;
        }
        Self::new(out)
    }

    /// Multiplies every element by `s`.
    pub fn mul_scalar(&self, s: f32) -> Self {
        Self::new(self.data.map(|v| v * s))
    }

    /// Element-wise linear interpolation (`t` unclamped).
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mut out = self.data;
        for (o, b) in out.iter_mut().zip(other.data.iter()) {
            *o = lerp(*o, *b, t);
        }
        Self::new(out)
    }

    /// Transposed copy.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = self.get(row, col);
            }
        }
        Self::new(out)
    }

    fn cofactors(&self) -> [f32; 16] {
        let m = &self.data;
        let mut inv = [0.0; 16];
        inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
            + m[9] * m[7] * m[14]
            + m[13] * m[6] * m[11]
            - m[13] * m[7] * m[10];
        inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
            - m[8] * m[7] * m[14]
            - m[12] * m[6] * m[11]
            + m[12] * m[7] * m[10];
        inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
            + m[8] * m[7] * m[13]
            + m[12] * m[5] * m[11]
            - m[12] * m[7] * m[9];
        inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
            - m[8] * m[6] * m[13]
            - m[12] * m[5] * m[10]
            + m[12] * m[6] * m[9];
        inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14]
            - m[13] * m[2] * m[11]
            + m[13] * m[3] * m[10];
        inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14]
            + m[12] * m[2] * m[11]
            - m[12] * m[3] * m[10];
        inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13]
            - m[12] * m[1] * m[11]
            + m[12] * m[3] * m[9];
        inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13]
            + m[12] * m[1] * m[10]
            - m[12] * m[2] * m[9];
        inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14]
            + m[13] * m[2] * m[7]
            - m[13] * m[3] * m[6];
        inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14]
            - m[12] * m[2] * m[7]
            + m[12] * m[3] * m[6];
        inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13]
            + m[12] * m[1] * m[7]
            - m[12] * m[3] * m[5];
        inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13]
            - m[12] * m[1] * m[6]
            + m[12] * m[2] * m[5];
        inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10]
            - m[9] * m[2] * m[7]
            + m[9] * m[3] * m[6];
        inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10]
            + m[8] * m[2] * m[7]
            - m[8] * m[3] * m[6];
        inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9]
            - m[8] * m[1] * m[7]
            + m[8] * m[3] * m[5];
        inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9]
            + m[8] * m[1] * m[6]
            - m[8] * m[2] * m[5];
        inv
    }

    /// Determinant via cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let inv = self.cofactors();
        self.data[0] * inv[0] + self.data[1] * inv[4] + self.data[2] * inv[8] + self.data[3] * inv[12]
    }

    /// Inverse matrix, or `None` when the determinant is exactly zero.
    ///
    /// Near-singular matrices are inverted as-is; callers that need a
    /// conditioning guarantee must check [`Mat4::determinant`] themselves.
    pub fn try_inverse(&self) -> Option<Self> {
        let inv = self.cofactors();
        let det = self.data[0] * inv[0]
            + self.data[1] * inv[4]
            + self.data[2] * inv[8]
            + self.data[3] * inv[12];
        if det == 0.0 {
            return None;
        }
        let inv_det = 1.0 / det;
        Some(Self::new(inv.map(|v| v * inv_det)))
    }

    /// Re-orthonormalises the upper 3×3 rows (Gram–Schmidt), keeping
    /// translation and the projective column untouched.
    #[must_use]
    pub fn orthogonalize(&self) -> Self {
        let (x, y, _) = self.to_axes();
        let (nx, ny, nz) = Vec3::orthogonalize(&x, &y);
        let mut out = *self;
        for (row, axis) in [nx, ny, nz].iter().enumerate() {
            for col in 0..3 {
                out.set(row, col, axis.component(col));
            }
        }
        out
    }

    /// Transforms a homogeneous vector (`v * M`).
    pub fn transform_vec4(&self, v: &Vec4) -> Vec4 {
        let [x, y, z, w] = v.to_array();
        Vec4::new(
            x * self.get(0, 0) + y * self.get(1, 0) + z * self.get(2, 0) + w * self.get(3, 0),
            x * self.get(0, 1) + y * self.get(1, 1) + z * self.get(2, 1) + w * self.get(3, 1),
            x * self.get(0, 2) + y * self.get(1, 2) + z * self.get(2, 2) + w * self.get(3, 2),
            x * self.get(0, 3) + y * self.get(1, 3) + z * self.get(2, 3) + w * self.get(3, 3),
        )
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    ///
    /// Translation components are applied and the resulting vector is returned
    /// with `w` implicitly equal to `1`.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let x = point.component(0);
        let y = point.component(1);
        let z = point.component(2);

        let nx = x * self.get(0, 0) + y * self.get(1, 0) + z * self.get(2, 0) + self.get(3, 0);
        let ny = x * self.get(0, 1) + y * self.get(1, 1) + z * self.get(2, 1) + self.get(3, 1);
        let nz = x * self.get(0, 2) + y * self.get(1, 2) + z * self.get(2, 2) + self.get(3, 2);

        Vec3::new(nx, ny, nz)
    }

    /// Transforms a point with `w = 1` and divides by the resulting `w`.
    ///
    /// Returns `None` when the projected `w` is within `EPSILON` of zero
    /// (point on the projection plane).
    pub fn transform_coord(&self, point: &Vec3) -> Option<Vec3> {
        self.transform_vec4(&Vec4::from_vec3(*point, 1.0)).perspective_divide()
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    ///
    /// Only the rotational and scaling parts of the matrix affect the result.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let x = direction.component(0);
        let y = direction.component(1);
        let z = direction.component(2);

        let nx = x * self.get(0, 0) + y * self.get(1, 0) + z * self.get(2, 0);
        let ny = x * self.get(0, 1) + y * self.get(1, 1) + z * self.get(2, 1);
        let nz = x * self.get(0, 2) + y * self.get(1, 2) + z * self.get(2, 2);

        Vec3::new(nx, ny, nz)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<&Self> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Self> for Mat4 {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}

impl core::ops::Mul<Mat4> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Mat4) -> Self {
        rhs.transform_point(&self)
    }
}
