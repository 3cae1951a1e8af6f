use super::correlator::Correlator;
use super::ibz::{IbzPoint, max_component};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error(
        "Dataset arrays are misaligned: {points} IBZ points, {diagonal} diagonal values, {off_diagonal} off-diagonal values"
    )]
    LengthMismatch {
        points: usize,
        diagonal: usize,
        off_diagonal: usize,
    },
}

/// One simulation's correlation data on the irreducible wedge.
///
/// `diagonal` and `off_diagonal` are aligned 1:1 with `points`.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationDataset {
    grid_size: Option<usize>,
    points: Vec<IbzPoint>,
    diagonal: Vec<f64>,
    off_diagonal: Vec<f64>,
}

impl CorrelationDataset {
    pub fn new(
        grid_size: Option<usize>,
        points: Vec<IbzPoint>,
        diagonal: Vec<f64>,
        off_diagonal: Vec<f64>,
    ) -> Result<Self, DatasetError> {
        if diagonal.len() != points.len() || off_diagonal.len() != points.len() {
            return Err(DatasetError::LengthMismatch {
                points: points.len(),
                diagonal: diagonal.len(),
                off_diagonal: off_diagonal.len(),
            });
        }
        Ok(Self {
            grid_size,
            points,
            diagonal,
            off_diagonal,
        })
    }

    /// The authoritative grid size recorded with the data, if any.
    pub fn grid_size(&self) -> Option<usize> {
        self.grid_size
    }

    /// `2 · max(component)`, the grid size implied by a wedge that reaches the zone boundary.
    pub fn inferred_grid_size(&self) -> usize {
        max_component(&self.points).map_or(0, |m| 2 * m.max(0) as usize)
    }

    pub fn points(&self) -> &[IbzPoint] {
        &self.points
    }

    pub fn diagonal(&self) -> &[f64] {
        &self.diagonal
    }

    pub fn off_diagonal(&self) -> &[f64] {
        &self.off_diagonal
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn combined(&self, correlator: Correlator) -> Vec<f64> {
        self.diagonal
            .iter()
            .zip(&self.off_diagonal)
            .map(|(&d, &o)| correlator.combine(d, o))
            .collect()
    }
}
