//! Cubic crystallographic symmetry.
//!
//! [`PointGroup::oh`] hands out the lazily generated, immutable `Oh` group. Its element
//! order is fixed and significant: orbit expansion resolves collisions by iterating the
//! group in exactly this order.

mod error;
pub mod point_group;
pub mod rotation;

pub use error::SymmetryError;
pub use point_group::{OH_ORDER, PointGroup};
pub use rotation::RotationMatrix;
