use super::ibz::IbzPoint;
use serde::Serialize;
use std::fmt;

/// High-symmetry points of the simple-cubic Brillouin zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SymmetryPointLabel {
    /// Zone center.
    Gamma,
    /// Face center.
    X,
    /// Edge center.
    M,
    /// Corner.
    R,
}

impl SymmetryPointLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gamma => "Γ",
            Self::X => "X",
            Self::M => "M",
            Self::R => "R",
        }
    }
}

impl fmt::Display for SymmetryPointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled position along the path, used for axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathTick {
    pub label: SymmetryPointLabel,
    pub index: usize,
    pub distance: f64,
}

/// A function sampled along the Γ-X-M-Γ-R-X-M-R path.
///
/// `distances`, `values` and `points` are index-aligned. Distances are cumulative
/// Euclidean arc length in units of `2π / a`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MomentumPath {
    pub(crate) grid_size: usize,
    pub(crate) inferred_grid_size: usize,
    pub(crate) distances: Vec<f64>,
    pub(crate) values: Vec<f64>,
    pub(crate) points: Vec<IbzPoint>,
    pub(crate) ticks: Vec<PathTick>,
}

impl MomentumPath {
    /// Grid size used to select the segments and normalize distances.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// `2 · max(component)` of the input wedge; differs from [`Self::grid_size`] when the
    /// caller supplied an explicit size that the wedge does not reach.
    pub fn inferred_grid_size(&self) -> usize {
        self.inferred_grid_size
    }

    pub fn has_grid_size_mismatch(&self) -> bool {
        self.grid_size != self.inferred_grid_size
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn points(&self) -> &[IbzPoint] {
        &self.points
    }

    pub fn ticks(&self) -> &[PathTick] {
        &self.ticks
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn tick_at(&self, index: usize) -> Option<&PathTick> {
        self.ticks.iter().find(|t| t.index == index)
    }
}
