use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A momentum-grid index `(kx, ky, kz)` in the irreducible wedge of the cubic zone,
/// conventionally `0 <= kz <= ky <= kx <= grid_size / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IbzPoint {
    pub kx: i32,
    pub ky: i32,
    pub kz: i32,
}

impl IbzPoint {
    pub const fn new(kx: i32, ky: i32, kz: i32) -> Self {
        Self { kx, ky, kz }
    }

    pub fn as_vector(&self) -> Vector3<i32> {
        Vector3::new(self.kx, self.ky, self.kz)
    }

    pub fn component(&self, axis: LatticeAxis) -> i32 {
        match axis {
            LatticeAxis::X => self.kx,
            LatticeAxis::Y => self.ky,
            LatticeAxis::Z => self.kz,
        }
    }

    pub fn max_component(&self) -> i32 {
        self.kx.max(self.ky).max(self.kz)
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        let d = (self.as_vector() - other.as_vector()).map(|c| c as f64);
        d.norm()
    }
}

impl From<[i32; 3]> for IbzPoint {
    fn from(k: [i32; 3]) -> Self {
        Self::new(k[0], k[1], k[2])
    }
}

impl From<IbzPoint> for [i32; 3] {
    fn from(p: IbzPoint) -> Self {
        [p.kx, p.ky, p.kz]
    }
}

/// One of the three cubic lattice directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatticeAxis {
    X,
    Y,
    Z,
}

impl LatticeAxis {
    pub const ALL: [LatticeAxis; 3] = [LatticeAxis::X, LatticeAxis::Y, LatticeAxis::Z];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            LatticeAxis::X => 0,
            LatticeAxis::Y => 1,
            LatticeAxis::Z => 2,
        }
    }
}

/// Largest component over all points; `None` for an empty slice.
pub fn max_component(points: &[IbzPoint]) -> Option<i32> {
    points.iter().map(IbzPoint::max_component).max()
}
