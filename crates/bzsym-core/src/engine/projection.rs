use super::config::{TransformConfig, TransformConfigBuilder, validate_axis};
use super::error::EngineError;
use super::expansion::{self, ExpandedGrid, check_alignment};
use super::progress::{Progress, ProgressReporter, Stage};
use crate::core::models::ibz::{IbzPoint, LatticeAxis};
use crate::core::models::profile::RealSpaceProfile;
use crate::core::symmetry::PointGroup;
use num_complex::Complex64;
use std::f64::consts::TAU;
use std::ops::Range;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// `Re[(1/N³) Σ_k exp(-i 2π k[axis] x / N) f(k)]` over the whole grid.
fn profile_at(grid: &ExpandedGrid, axis: LatticeAxis, x: i64) -> f64 {
    let n = grid.grid_size() as f64;
    let a = axis.index();
    let sum: Complex64 = grid
        .cells()
        .map(|(cell, value)| {
            let phase = -TAU * cell[a] as f64 * x as f64 / n;
            Complex64::from_polar(1.0, phase) * value
        })
        .sum();
    (sum / grid.len() as f64).re
}

/// Inverse-transforms an expanded grid onto the real-space distances in `distances`.
///
/// Each distance is an independent sequential sum, so the result does not depend on
/// how the distances are scheduled across threads.
#[instrument(skip_all, name = "inverse_fourier_projection", fields(axis = ?axis))]
pub fn project(
    grid: &ExpandedGrid,
    distances: Range<i64>,
    axis: LatticeAxis,
    reporter: &ProgressReporter,
) -> RealSpaceProfile {
    let sites: Vec<i64> = distances.collect();
    reporter.report(Progress::SitesStart {
        total: sites.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = sites.iter();

    #[cfg(feature = "parallel")]
    let iterator = sites.par_iter();

    let values: Vec<f64> = iterator
        .map(|&x| {
            let value = profile_at(grid, axis, x);
            reporter.report(Progress::SiteDone);
            value
        })
        .collect();

    reporter.report(Progress::SitesFinish);
    RealSpaceProfile::new(sites, values)
}

/// Expands `func` from the IBZ over `group` and inverse-transforms it along `axis` for
/// every distance in `[x_min, x_max)`.
///
/// Arguments are validated before anything is allocated: an axis outside `{0, 1, 2}` or
/// an empty distance range is an [`EngineError::InvalidArgument`], misaligned `ibz` and
/// `func` an [`EngineError::ShapeMismatch`].
#[allow(clippy::too_many_arguments)]
pub fn inverse_transform(
    group: &PointGroup,
    grid_size: usize,
    ibz: &[IbzPoint],
    func: &[f64],
    x_min: i64,
    x_max: i64,
    axis: usize,
    reporter: &ProgressReporter,
) -> Result<RealSpaceProfile, EngineError> {
    validate_axis(axis)?;
    check_alignment(ibz, func)?;
    let config = TransformConfigBuilder::new()
        .grid_size(grid_size)
        .x_min(x_min)
        .x_max(x_max)
        .axis(axis)
        .build()?;
    transform_with_config(group, ibz, func, &config, reporter)
}

pub(crate) fn transform_with_config(
    group: &PointGroup,
    ibz: &[IbzPoint],
    func: &[f64],
    config: &TransformConfig,
    reporter: &ProgressReporter,
) -> Result<RealSpaceProfile, EngineError> {
    reporter.report(Progress::StageStart {
        stage: Stage::Expansion,
    });
    let grid = expansion::expand(group, config.grid_size, ibz, func)?;
    reporter.report(Progress::StageFinish);

    reporter.report(Progress::StageStart {
        stage: Stage::Projection,
    });
    let profile = project(&grid, config.distances(), config.axis, reporter);
    reporter.report(Progress::StageFinish);

    info!(
        "Computed real-space profile at {} distances along {:?}.",
        profile.len(),
        config.axis
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn oh() -> &'static PointGroup {
        PointGroup::oh().unwrap()
    }

    fn full_wedge(grid_size: usize) -> Vec<IbzPoint> {
        let half = (grid_size / 2) as i32;
        let mut points = Vec::new();
        for kx in 0..=half {
            for ky in 0..=kx {
                for kz in 0..=ky {
                    points.push(IbzPoint::new(kx, ky, kz));
                }
            }
        }
        points
    }

    fn transform(
        grid_size: usize,
        ibz: &[IbzPoint],
        func: &[f64],
        x_min: i64,
        x_max: i64,
        axis: usize,
    ) -> Result<RealSpaceProfile, EngineError> {
        inverse_transform(
            oh(),
            grid_size,
            ibz,
            func,
            x_min,
            x_max,
            axis,
            &ProgressReporter::new(),
        )
    }

    #[test]
    fn uniform_function_gives_constant_at_origin() {
        for grid_size in [4, 6, 8, 12] {
            let ibz = full_wedge(grid_size);
            let func = vec![0.75; ibz.len()];
            let profile = transform(grid_size, &ibz, &func, 0, 3, 0).unwrap();
            assert!(f64_approx_equal(profile.values()[0], 0.75));
            assert!(profile.values()[1].abs() < 1e-9);
        }
    }

    #[test]
    fn axis_orbits_reproduce_reference_profile() {
        let ibz = [
            IbzPoint::new(0, 0, 0),
            IbzPoint::new(1, 0, 0),
            IbzPoint::new(2, 0, 0),
        ];
        let profile = transform(4, &ibz, &[1.0, 2.0, 3.0], 0, 4, 0).unwrap();

        assert_eq!(profile.sites(), &[0, 1, 2, 3]);
        let expected = [22.0 / 64.0, 12.0 / 64.0, 14.0 / 64.0, 12.0 / 64.0];
        for (value, want) in profile.values().iter().zip(expected) {
            assert!(f64_approx_equal(*value, want), "{} != {}", value, want);
        }
    }

    #[test]
    fn output_length_matches_distance_range() {
        let ibz = full_wedge(4);
        let func = vec![1.0; ibz.len()];
        let profile = transform(4, &ibz, &func, -3, 5, 1).unwrap();
        assert_eq!(profile.len(), 8);
        assert_eq!(profile.sites().first(), Some(&-3));
        assert_eq!(profile.sites().last(), Some(&4));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let ibz = full_wedge(6);
        let func: Vec<f64> = (0..ibz.len()).map(|i| (i as f64).sin()).collect();
        let first = transform(6, &ibz, &func, 0, 8, 2).unwrap();
        let second = transform(6, &ibz, &func, 0, 8, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_zero_profile() {
        let profile = transform(4, &[], &[], 0, 4, 0).unwrap();
        assert_eq!(profile.len(), 4);
        assert!(profile.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn axis_three_is_an_invalid_argument() {
        let result = transform(4, &[], &[], 0, 4, 3);
        assert!(matches!(result, Err(EngineError::InvalidArgument(_))));
    }

    #[test]
    fn axis_is_checked_before_shape() {
        let result = transform(4, &[IbzPoint::new(0, 0, 0)], &[], 0, 4, 7);
        assert!(matches!(result, Err(EngineError::InvalidArgument(_))));
    }

    #[test]
    fn misaligned_inputs_are_a_shape_mismatch() {
        let result = transform(4, &[IbzPoint::new(0, 0, 0)], &[], 0, 4, 0);
        assert_eq!(
            result,
            Err(EngineError::ShapeMismatch {
                ibz_len: 1,
                func_len: 0
            })
        );
    }

    #[test]
    fn profile_is_periodic_in_grid_size() {
        let ibz = full_wedge(4);
        let func: Vec<f64> = (0..ibz.len()).map(|i| 1.0 / (1.0 + i as f64)).collect();
        let profile = transform(4, &ibz, &func, 0, 8, 0).unwrap();
        for x in 0..4 {
            let a = profile.value_at(x).unwrap();
            let b = profile.value_at(x + 4).unwrap();
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn cubic_symmetry_makes_axes_equivalent() {
        let ibz = full_wedge(6);
        let func: Vec<f64> = (0..ibz.len()).map(|i| (i as f64 * 0.3).cos()).collect();
        let along_x = transform(6, &ibz, &func, 0, 6, 0).unwrap();
        let along_z = transform(6, &ibz, &func, 0, 6, 2).unwrap();
        for (a, b) in along_x.values().iter().zip(along_z.values()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn progress_reports_every_site() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let done = AtomicUsize::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::SiteDone = event {
                done.fetch_add(1, Ordering::SeqCst);
            }
        }));
        let ibz = full_wedge(4);
        let func = vec![1.0; ibz.len()];
        inverse_transform(oh(), 4, &ibz, &func, 0, 5, 0, &reporter).unwrap();
        drop(reporter);
        assert_eq!(done.into_inner(), 5);
    }
}
