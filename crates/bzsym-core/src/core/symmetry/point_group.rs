use super::{RotationMatrix, SymmetryError};
use crate::core::models::ibz::IbzPoint;
use once_cell::sync::Lazy;
use tracing::{debug, error};

/// Order of the full cubic point group `Oh`.
pub const OH_ORDER: usize = 48;

/// The 24 proper rotations of `O` as (angle in degrees, axis), in generation order.
const PROPER_GENERATORS: [(f64, [f64; 3]); 24] = [
    (0.0, [1.0, 0.0, 0.0]),
    // Half turns about the cube axes.
    (180.0, [1.0, 0.0, 0.0]),
    (180.0, [0.0, 1.0, 0.0]),
    (180.0, [0.0, 0.0, 1.0]),
    // Half turns about the face diagonals.
    (180.0, [1.0, 1.0, 0.0]),
    (180.0, [-1.0, 1.0, 0.0]),
    (180.0, [1.0, 0.0, 1.0]),
    (180.0, [1.0, 0.0, -1.0]),
    (180.0, [0.0, -1.0, -1.0]),
    (180.0, [0.0, -1.0, 1.0]),
    // Quarter turns; the negative axes give the three-quarter turns.
    (90.0, [1.0, 0.0, 0.0]),
    (90.0, [0.0, 1.0, 0.0]),
    (90.0, [0.0, 0.0, 1.0]),
    (90.0, [-1.0, 0.0, 0.0]),
    (90.0, [0.0, -1.0, 0.0]),
    (90.0, [0.0, 0.0, -1.0]),
    // Third turns about the body diagonals.
    (120.0, [1.0, 1.0, 1.0]),
    (120.0, [-1.0, 1.0, 1.0]),
    (120.0, [1.0, -1.0, 1.0]),
    (120.0, [1.0, 1.0, -1.0]),
    (120.0, [1.0, -1.0, -1.0]),
    (120.0, [-1.0, 1.0, -1.0]),
    (120.0, [-1.0, -1.0, 1.0]),
    (120.0, [-1.0, -1.0, -1.0]),
];

static OH_GROUP: Lazy<Result<PointGroup, SymmetryError>> = Lazy::new(|| {
    let group = PointGroup::generate_oh();
    match &group {
        Ok(g) => debug!("Generated cubic point group Oh with {} operations.", g.len()),
        Err(e) => error!("Cubic point group generation failed: {}", e),
    }
    group
});

/// An ordered, validated finite group of integer point operations.
#[derive(Debug, Clone, PartialEq)]
pub struct PointGroup {
    operations: Vec<RotationMatrix>,
}

impl PointGroup {
    /// The process-wide `Oh` group, generated on first use and immutable afterwards.
    ///
    /// A generation failure is permanent: every call returns the same error.
    pub fn oh() -> Result<&'static PointGroup, SymmetryError> {
        OH_GROUP.as_ref().map_err(Clone::clone)
    }

    /// Generates a fresh copy of `Oh`: the 24 proper rotations followed by their
    /// negations in the same relative order.
    pub fn generate_oh() -> Result<Self, SymmetryError> {
        let proper = PROPER_GENERATORS
            .iter()
            .map(|&(angle, axis)| RotationMatrix::from_axis_angle(angle, axis))
            .collect::<Result<Vec<_>, _>>()?;

        let mut operations = proper.clone();
        operations.extend(proper.iter().map(RotationMatrix::inverted));

        if operations.len() != OH_ORDER {
            return Err(SymmetryError::WrongOrder {
                expected: OH_ORDER,
                found: operations.len(),
            });
        }

        Self::from_operations(operations)
    }

    /// Validates that `operations` are orthogonal, unimodular, distinct and closed under
    /// composition, keeping their order.
    pub fn from_operations(operations: Vec<RotationMatrix>) -> Result<Self, SymmetryError> {
        for (index, op) in operations.iter().enumerate() {
            if !op.is_orthogonal() {
                return Err(SymmetryError::NotOrthogonal { index });
            }
            let determinant = op.determinant();
            if determinant.abs() != 1 {
                return Err(SymmetryError::InvalidDeterminant { index, determinant });
            }
            if operations[..index].contains(op) {
                return Err(SymmetryError::Duplicate { index });
            }
        }

        let group = Self { operations };
        if let Some((left, right)) = group.first_closure_violation() {
            return Err(SymmetryError::NotClosed { left, right });
        }
        Ok(group)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn operations(&self) -> &[RotationMatrix] {
        &self.operations
    }

    pub fn get(&self, index: usize) -> Option<&RotationMatrix> {
        self.operations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RotationMatrix> {
        self.operations.iter()
    }

    pub fn contains(&self, op: &RotationMatrix) -> bool {
        self.operations.contains(op)
    }

    pub fn is_closed(&self) -> bool {
        self.first_closure_violation().is_none()
    }

    pub fn proper_count(&self) -> usize {
        self.operations.iter().filter(|op| op.is_proper()).count()
    }

    /// Grid cells `(s · point) mod grid_size` for every operation `s`, in group order.
    ///
    /// Images may repeat when `point` lies on a symmetry element.
    pub fn images<'a>(
        &'a self,
        point: &'a IbzPoint,
        grid_size: usize,
    ) -> impl Iterator<Item = [usize; 3]> + 'a {
        let v = point.as_vector();
        self.operations
            .iter()
            .map(move |op| wrap_to_grid(&op.apply(&v), grid_size))
    }

    /// Distinct images of `point`, in order of first appearance.
    pub fn orbit(&self, point: &IbzPoint, grid_size: usize) -> Vec<[usize; 3]> {
        let mut orbit: Vec<[usize; 3]> = Vec::with_capacity(self.len());
        for cell in self.images(point, grid_size) {
            if !orbit.contains(&cell) {
                orbit.push(cell);
            }
        }
        orbit
    }

    fn first_closure_violation(&self) -> Option<(usize, usize)> {
        for (left, a) in self.operations.iter().enumerate() {
            for (right, b) in self.operations.iter().enumerate() {
                if !self.contains(&a.compose(b)) {
                    return Some((left, right));
                }
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a PointGroup {
    type Item = &'a RotationMatrix;
    type IntoIter = std::slice::Iter<'a, RotationMatrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[inline]
fn wrap_to_grid(v: &nalgebra::Vector3<i32>, grid_size: usize) -> [usize; 3] {
    let n = grid_size as i64;
    [
        (v.x as i64).rem_euclid(n) as usize,
        (v.y as i64).rem_euclid(n) as usize,
        (v.z as i64).rem_euclid(n) as usize,
    ]
}
