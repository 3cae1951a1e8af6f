use super::config::validate_grid_size;
use super::error::EngineError;
use crate::core::models::ibz::IbzPoint;
use crate::core::symmetry::PointGroup;
use tracing::{debug, instrument, trace};

/// Dense real values on the full periodic `grid_size³` momentum grid, row-major in
/// `(kx, ky, kz)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedGrid {
    grid_size: usize,
    values: Vec<f64>,
}

impl ExpandedGrid {
    pub fn zeros(grid_size: usize) -> Self {
        Self {
            grid_size,
            values: vec![0.0; grid_size * grid_size * grid_size],
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, cell: [usize; 3]) -> Option<f64> {
        self.index_of(cell).map(|i| self.values[i])
    }

    /// Every cell with its value, in storage order.
    pub fn cells(&self) -> impl Iterator<Item = ([usize; 3], f64)> + '_ {
        let n = self.grid_size;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| ([i / (n * n), (i / n) % n, i % n], v))
    }

    fn set(&mut self, cell: [usize; 3], value: f64) {
        if let Some(i) = self.index_of(cell) {
            self.values[i] = value;
        }
    }

    #[inline]
    fn index_of(&self, cell: [usize; 3]) -> Option<usize> {
        let n = self.grid_size;
        if cell.iter().any(|&c| c >= n) {
            return None;
        }
        Some((cell[0] * n + cell[1]) * n + cell[2])
    }
}

pub(crate) fn check_alignment(ibz: &[IbzPoint], func: &[f64]) -> Result<(), EngineError> {
    if ibz.len() != func.len() {
        return Err(EngineError::ShapeMismatch {
            ibz_len: ibz.len(),
            func_len: func.len(),
        });
    }
    Ok(())
}

/// Fills the full grid from IBZ samples by their symmetry orbits.
///
/// Cells are written for every IBZ point in input order and, for each point, every
/// operation in group order; a later write to the same cell replaces the earlier one.
/// Cells outside every orbit stay zero.
#[instrument(skip_all, name = "bz_expansion", fields(grid_size = grid_size, points = ibz.len()))]
pub fn expand(
    group: &PointGroup,
    grid_size: usize,
    ibz: &[IbzPoint],
    func: &[f64],
) -> Result<ExpandedGrid, EngineError> {
    check_alignment(ibz, func)?;
    validate_grid_size(grid_size)?;

    let mut grid = ExpandedGrid::zeros(grid_size);
    for (point, &value) in ibz.iter().zip(func) {
        for cell in group.images(point, grid_size) {
            grid.set(cell, value);
        }
        trace!(?point, value, "Expanded orbit.");
    }

    debug!(
        "Expanded {} IBZ samples onto a {}³ grid.",
        ibz.len(),
        grid_size
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oh() -> &'static PointGroup {
        PointGroup::oh().unwrap()
    }

    #[test]
    fn empty_ibz_leaves_grid_zeroed() {
        let grid = expand(oh(), 4, &[], &[]).unwrap();
        assert_eq!(grid.len(), 64);
        assert!(grid.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn misaligned_inputs_are_rejected() {
        let result = expand(oh(), 4, &[IbzPoint::new(0, 0, 0)], &[1.0, 2.0]);
        assert_eq!(
            result,
            Err(EngineError::ShapeMismatch {
                ibz_len: 1,
                func_len: 2
            })
        );
    }

    #[test]
    fn zero_grid_size_is_invalid() {
        let result = expand(oh(), 0, &[], &[]);
        assert!(matches!(result, Err(EngineError::InvalidArgument(_))));
    }

    #[test]
    fn axis_points_fill_their_orbits() {
        let ibz = [
            IbzPoint::new(0, 0, 0),
            IbzPoint::new(1, 0, 0),
            IbzPoint::new(2, 0, 0),
        ];
        let grid = expand(oh(), 4, &ibz, &[1.0, 2.0, 3.0]).unwrap();

        assert_eq!(grid.get([0, 0, 0]), Some(1.0));
        for cell in [[1, 0, 0], [3, 0, 0], [0, 1, 0], [0, 3, 0], [0, 0, 1], [0, 0, 3]] {
            assert_eq!(grid.get(cell), Some(2.0));
        }
        for cell in [[2, 0, 0], [0, 2, 0], [0, 0, 2]] {
            assert_eq!(grid.get(cell), Some(3.0));
        }
        let assigned = grid.values().iter().filter(|&&v| v != 0.0).count();
        assert_eq!(assigned, 10);
    }

    #[test]
    fn overlapping_orbits_keep_the_last_written_value() {
        let ibz = [IbzPoint::new(1, 0, 0), IbzPoint::new(0, 1, 0)];
        let grid = expand(oh(), 4, &ibz, &[5.0, 7.0]).unwrap();
        for cell in oh().orbit(&IbzPoint::new(1, 0, 0), 4) {
            assert_eq!(grid.get(cell), Some(7.0));
        }
    }

    #[test]
    fn full_wedge_covers_every_cell() {
        let n = 6;
        let half = (n / 2) as i32;
        let mut ibz = Vec::new();
        for kx in 0..=half {
            for ky in 0..=kx {
                for kz in 0..=ky {
                    ibz.push(IbzPoint::new(kx, ky, kz));
                }
            }
        }
        let func = vec![1.5; ibz.len()];
        let grid = expand(oh(), n, &ibz, &func).unwrap();
        assert!(grid.values().iter().all(|&v| v == 1.5));
    }

    #[test]
    fn cells_enumerates_row_major_coordinates() {
        let grid = ExpandedGrid::zeros(3);
        let cells: Vec<_> = grid.cells().map(|(c, _)| c).collect();
        assert_eq!(cells[0], [0, 0, 0]);
        assert_eq!(cells[1], [0, 0, 1]);
        assert_eq!(cells[3], [0, 1, 0]);
        assert_eq!(cells[9], [1, 0, 0]);
        assert_eq!(cells.len(), 27);
    }

    #[test]
    fn get_outside_grid_is_none() {
        let grid = ExpandedGrid::zeros(2);
        assert_eq!(grid.get([2, 0, 0]), None);
    }
}
