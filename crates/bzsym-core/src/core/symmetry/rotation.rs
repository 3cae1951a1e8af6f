use super::SymmetryError;
use nalgebra::{Matrix3, Vector3};

/// Largest distance from the nearest integer tolerated before rounding a Rodrigues matrix.
pub const ROUNDING_TOLERANCE: f64 = 1e-6;

/// A 3x3 integer matrix acting on momentum-grid indices.
///
/// Instances produced by [`RotationMatrix::from_axis_angle`] are checked to be exactly
/// integral; group-level validation (orthogonality, determinant) happens in
/// [`PointGroup`](super::PointGroup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationMatrix(Matrix3<i32>);

impl RotationMatrix {
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    pub fn from_matrix(matrix: Matrix3<i32>) -> Self {
        Self(matrix)
    }

    pub fn from_rows(rows: [[i32; 3]; 3]) -> Self {
        Self(Matrix3::from_fn(|r, c| rows[r][c]))
    }

    /// Builds the rotation by `angle_degrees` about `axis` with Rodrigues' formula
    /// `R = I + sin(θ)K + (1 - cos(θ))K²` and rounds it to integers.
    ///
    /// Fails with [`SymmetryError::NonIntegral`] when any entry is further than
    /// [`ROUNDING_TOLERANCE`] from an integer, i.e. when the requested rotation does not map
    /// the cubic lattice onto itself.
    pub fn from_axis_angle(angle_degrees: f64, axis: [f64; 3]) -> Result<Self, SymmetryError> {
        let raw_axis = Vector3::new(axis[0], axis[1], axis[2]);
        let norm = raw_axis.norm();
        if norm < f64::EPSILON {
            return Err(SymmetryError::ZeroAxis);
        }

        let u = raw_axis / norm;
        let theta = angle_degrees.to_radians();
        let k = u.cross_matrix();
        let exact = Matrix3::identity() + k * theta.sin() + (k * k) * (1.0 - theta.cos());

        let deviation = exact
            .iter()
            .map(|entry| (entry - entry.round()).abs())
            .fold(0.0f64, f64::max);
        if deviation > ROUNDING_TOLERANCE {
            return Err(SymmetryError::NonIntegral {
                angle: angle_degrees,
                axis,
                deviation,
            });
        }

        Ok(Self(exact.map(|entry| entry.round() as i32)))
    }

    pub fn matrix(&self) -> &Matrix3<i32> {
        &self.0
    }

    pub fn rows(&self) -> [[i32; 3]; 3] {
        let m = &self.0;
        [
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ]
    }

    pub fn determinant(&self) -> i32 {
        let m = &self.0;
        m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
            - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
            + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
    }

    pub fn is_orthogonal(&self) -> bool {
        self.0 * self.0.transpose() == Matrix3::identity()
    }

    /// Proper rotations have determinant +1; improper ones (inversion composed with a
    /// rotation) have -1.
    pub fn is_proper(&self) -> bool {
        self.determinant() == 1
    }

    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Returns `self · other`, i.e. `other` applied first.
    pub fn compose(&self, other: &Self) -> Self {
        Self(self.0 * other.0)
    }

    /// Composition with the inversion through the origin, `-R`.
    pub fn inverted(&self) -> Self {
        Self(-self.0)
    }

    pub fn apply(&self, v: &Vector3<i32>) -> Vector3<i32> {
        self.0 * v
    }
}
