use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SymmetryError {
    #[error("Rotation axis must be a non-zero vector")]
    ZeroAxis,

    #[error(
        "Rotation by {angle} degrees about {axis:?} is not integral (max rounding deviation {deviation:.3e})"
    )]
    NonIntegral {
        angle: f64,
        axis: [f64; 3],
        deviation: f64,
    },

    #[error("Operation {index} is not orthogonal")]
    NotOrthogonal { index: usize },

    #[error("Operation {index} has determinant {determinant}, expected +1 or -1")]
    InvalidDeterminant { index: usize, determinant: i32 },

    #[error("Operation {index} duplicates an earlier operation")]
    Duplicate { index: usize },

    #[error("Point group has {found} operations, expected {expected}")]
    WrongOrder { expected: usize, found: usize },

    #[error("Product of operations {left} and {right} is not a member of the group")]
    NotClosed { left: usize, right: usize },
}
