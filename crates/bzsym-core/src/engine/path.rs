use super::config::{PathConfig, validate_grid_size};
use super::error::EngineError;
use super::expansion::check_alignment;
use crate::core::models::ibz::{IbzPoint, max_component};
use crate::core::models::path::{MomentumPath, PathTick, SymmetryPointLabel};
use std::f64::consts::TAU;
use tracing::{debug, instrument, warn};

type SegmentPredicate = fn(&IbzPoint, i32) -> bool;

/// One building block of the path. Trimming refers to the matched points in input order,
/// before any reversal.
struct PathSegment {
    name: &'static str,
    start: SymmetryPointLabel,
    matches: SegmentPredicate,
    reversed: bool,
    skip_first: bool,
    skip_last: bool,
}

fn on_gamma_x(k: &IbzPoint, _half: i32) -> bool {
    k.ky == 0 && k.kz == 0
}

fn on_x_m(k: &IbzPoint, half: i32) -> bool {
    k.kx == half && k.kz == 0
}

fn on_gamma_m(k: &IbzPoint, _half: i32) -> bool {
    k.kx == k.ky && k.kz == 0
}

fn on_gamma_r(k: &IbzPoint, _half: i32) -> bool {
    k.kx == k.ky && k.ky == k.kz
}

fn on_x_r(k: &IbzPoint, half: i32) -> bool {
    k.kx == half && k.kz == k.ky
}

fn on_m_r(k: &IbzPoint, half: i32) -> bool {
    k.ky == half && k.kx == half
}

const PATH_SEGMENTS: [PathSegment; 7] = [
    PathSegment {
        name: "Γ-X",
        start: SymmetryPointLabel::Gamma,
        matches: on_gamma_x,
        reversed: false,
        skip_first: false,
        skip_last: true,
    },
    PathSegment {
        name: "X-M",
        start: SymmetryPointLabel::X,
        matches: on_x_m,
        reversed: false,
        skip_first: false,
        skip_last: true,
    },
    PathSegment {
        name: "M-Γ",
        start: SymmetryPointLabel::M,
        matches: on_gamma_m,
        reversed: true,
        skip_first: true,
        skip_last: false,
    },
    PathSegment {
        name: "Γ-R",
        start: SymmetryPointLabel::Gamma,
        matches: on_gamma_r,
        reversed: false,
        skip_first: false,
        skip_last: true,
    },
    PathSegment {
        name: "R-X",
        start: SymmetryPointLabel::R,
        matches: on_x_r,
        reversed: true,
        skip_first: true,
        skip_last: false,
    },
    PathSegment {
        name: "X-M",
        start: SymmetryPointLabel::X,
        matches: on_x_m,
        reversed: false,
        skip_first: false,
        skip_last: true,
    },
    PathSegment {
        name: "M-R",
        start: SymmetryPointLabel::M,
        matches: on_m_r,
        reversed: false,
        skip_first: false,
        skip_last: false,
    },
];

const PATH_END: SymmetryPointLabel = SymmetryPointLabel::R;

fn append_segment(path: &mut Vec<usize>, matched: &[usize], segment: &PathSegment) {
    let start = usize::from(segment.skip_first).min(matched.len());
    let end = matched
        .len()
        .saturating_sub(usize::from(segment.skip_last))
        .max(start);
    let kept = &matched[start..end];
    if segment.reversed {
        path.extend(kept.iter().rev());
    } else {
        path.extend_from_slice(kept);
    }
}

fn resolve_grid_size(
    ibz: &[IbzPoint],
    config: &PathConfig,
) -> Result<(usize, usize), EngineError> {
    let inferred = max_component(ibz).map_or(0, |m| 2 * m.max(0) as usize);

    let grid_size = match config.grid_size {
        Some(explicit) => {
            validate_grid_size(explicit)?;
            if explicit != inferred {
                warn!(
                    "Explicit grid size {} differs from the size {} implied by the IBZ wedge; using {}.",
                    explicit, inferred, explicit
                );
            }
            explicit
        }
        None => inferred,
    };

    if grid_size == 0 {
        return Err(EngineError::MalformedBrillouinZone(
            "cannot determine the grid size: the IBZ does not extend beyond Γ".to_string(),
        ));
    }
    Ok((grid_size, inferred))
}

/// Samples `func` along Γ-X-M-Γ-R-X-M-R.
///
/// Points of each segment are taken in input order, so the wedge is expected to be
/// listed with every segment running outward from its lower-index end (the usual
/// `kx`-major ordering). Distances are cumulative Euclidean arc length scaled by
/// `2π / grid_size`.
#[instrument(skip_all, name = "high_symmetry_path", fields(points = ibz.len()))]
pub fn extract(
    ibz: &[IbzPoint],
    func: &[f64],
    config: &PathConfig,
) -> Result<MomentumPath, EngineError> {
    check_alignment(ibz, func)?;
    if ibz.is_empty() {
        return Err(EngineError::MalformedBrillouinZone(
            "the IBZ contains no points".to_string(),
        ));
    }

    let (grid_size, inferred_grid_size) = resolve_grid_size(ibz, config)?;
    let half = (grid_size / 2) as i32;

    let mut order: Vec<usize> = Vec::new();
    let mut tick_slots: Vec<(SymmetryPointLabel, usize)> = Vec::with_capacity(8);

    for segment in &PATH_SEGMENTS {
        let matched: Vec<usize> = ibz
            .iter()
            .enumerate()
            .filter(|(_, k)| (segment.matches)(k, half))
            .map(|(i, _)| i)
            .collect();
        if matched.is_empty() {
            return Err(EngineError::MalformedBrillouinZone(format!(
                "segment {} matched no IBZ points (grid size {})",
                segment.name, grid_size
            )));
        }
        tick_slots.push((segment.start, order.len()));
        append_segment(&mut order, &matched, segment);
    }
    tick_slots.push((PATH_END, order.len() - 1));

    let points: Vec<IbzPoint> = order.iter().map(|&i| ibz[i]).collect();
    let values: Vec<f64> = order.iter().map(|&i| func[i]).collect();

    let scale = TAU / grid_size as f64;
    let mut cumulative = 0.0;
    let distances: Vec<f64> = points
        .iter()
        .enumerate()
        .map(|(j, point)| {
            if j > 0 {
                cumulative += point.distance_to(&points[j - 1]);
            }
            cumulative * scale
        })
        .collect();

    let ticks = tick_slots
        .into_iter()
        .map(|(label, index)| {
            let index = index.min(distances.len() - 1);
            PathTick {
                label,
                index,
                distance: distances[index],
            }
        })
        .collect();

    debug!(
        "Assembled high-symmetry path of {} points on a {}³ grid.",
        points.len(),
        grid_size
    );

    Ok(MomentumPath {
        grid_size,
        inferred_grid_size,
        distances,
        values,
        points,
        ticks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
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

    fn indexed_values(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn path_visits_points_in_canonical_order() {
        let ibz = full_wedge(4);
        let func = indexed_values(ibz.len());
        let path = extract(&ibz, &func, &PathConfig::default()).unwrap();

        let expected: Vec<IbzPoint> = [
            [0, 0, 0],
            [1, 0, 0],
            [2, 0, 0],
            [2, 1, 0],
            [2, 2, 0],
            [1, 1, 0],
            [0, 0, 0],
            [1, 1, 1],
            [2, 2, 2],
            [2, 1, 1],
            [2, 0, 0],
            [2, 1, 0],
            [2, 2, 0],
            [2, 2, 1],
            [2, 2, 2],
        ]
        .into_iter()
        .map(IbzPoint::from)
        .collect();
        assert_eq!(path.points(), expected.as_slice());
        assert_eq!(path.grid_size(), 4);
    }

    #[test]
    fn values_stay_aligned_with_points() {
        let ibz = full_wedge(6);
        let func = indexed_values(ibz.len());
        let path = extract(&ibz, &func, &PathConfig::default()).unwrap();

        assert_eq!(path.values().len(), path.distances().len());
        for (point, value) in path.points().iter().zip(path.values()) {
            let position = ibz.iter().position(|p| p == point).unwrap();
            assert_eq!(*value, position as f64);
        }
    }

    #[test]
    fn path_length_is_seven_half_grids_plus_one() {
        for grid_size in [4, 6, 8, 12] {
            let ibz = full_wedge(grid_size);
            let func = vec![0.0; ibz.len()];
            let path = extract(&ibz, &func, &PathConfig::default()).unwrap();
            assert_eq!(path.len(), 7 * (grid_size / 2) + 1);
        }
    }

    #[test]
    fn distances_start_at_zero_and_never_decrease() {
        let ibz = full_wedge(8);
        let func = vec![1.0; ibz.len()];
        let path = extract(&ibz, &func, &PathConfig::default()).unwrap();
        assert_eq!(path.distances()[0], 0.0);
        assert!(path.distances().windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn total_arc_length_matches_segment_geometry() {
        let ibz = full_wedge(4);
        let func = vec![0.0; ibz.len()];
        let path = extract(&ibz, &func, &PathConfig::default()).unwrap();

        let raw = 8.0 + 4.0 * 2f64.sqrt() + 2.0 * 3f64.sqrt();
        let expected = raw / 4.0 * TAU;
        assert!(f64_approx_equal(*path.distances().last().unwrap(), expected));
    }

    #[test]
    fn ticks_mark_every_high_symmetry_point() {
        let ibz = full_wedge(4);
        let func = vec![0.0; ibz.len()];
        let path = extract(&ibz, &func, &PathConfig::default()).unwrap();

        let labels: Vec<&str> = path.ticks().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Γ", "X", "M", "Γ", "R", "X", "M", "R"]);
        let indices: Vec<usize> = path.ticks().iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 2, 4, 6, 8, 10, 12, 14]);
        for tick in path.ticks() {
            assert_eq!(tick.distance, path.distances()[tick.index]);
        }
    }

    #[test]
    fn explicit_grid_size_overrides_inference_and_flags_mismatch() {
        let ibz = full_wedge(4);
        let func = vec![0.0; ibz.len()];

        let matching = extract(&ibz, &func, &PathConfig::with_grid_size(4).unwrap()).unwrap();
        assert!(!matching.has_grid_size_mismatch());

        let result = extract(&ibz, &func, &PathConfig::with_grid_size(8).unwrap());
        assert!(matches!(
            result,
            Err(EngineError::MalformedBrillouinZone(_))
        ));
    }

    #[test]
    fn sparse_wedge_uses_explicit_grid_size() {
        let ibz = full_wedge(4);
        let func = vec![0.0; ibz.len()];
        let config = PathConfig { grid_size: Some(5) };
        let path = extract(&ibz, &func, &config).unwrap();
        assert_eq!(path.grid_size(), 5);
        assert_eq!(path.inferred_grid_size(), 4);
        assert!(path.has_grid_size_mismatch());
    }

    #[test]
    fn missing_segment_is_reported_as_malformed() {
        let ibz: Vec<IbzPoint> = full_wedge(4)
            .into_iter()
            .filter(|k| !(k.kx == k.ky && k.ky == k.kz))
            .collect();
        let func = vec![0.0; ibz.len()];
        let err = extract(&ibz, &func, &PathConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::MalformedBrillouinZone(ref m) if m.contains("Γ-R")));
    }

    #[test]
    fn empty_ibz_is_malformed() {
        let result = extract(&[], &[], &PathConfig::default());
        assert!(matches!(
            result,
            Err(EngineError::MalformedBrillouinZone(_))
        ));
    }

    #[test]
    fn gamma_only_wedge_has_no_grid_size() {
        let result = extract(&[IbzPoint::new(0, 0, 0)], &[1.0], &PathConfig::default());
        assert!(matches!(
            result,
            Err(EngineError::MalformedBrillouinZone(_))
        ));
    }

    #[test]
    fn misaligned_inputs_are_a_shape_mismatch() {
        let ibz = full_wedge(4);
        let result = extract(&ibz, &[0.0], &PathConfig::default());
        assert!(matches!(result, Err(EngineError::ShapeMismatch { .. })));
    }

    #[test]
    fn append_segment_reverses_after_trimming() {
        let segment = &PATH_SEGMENTS[2];
        let mut path = Vec::new();
        append_segment(&mut path, &[10, 11, 12], segment);
        assert_eq!(path, vec![12, 11]);
    }
}
