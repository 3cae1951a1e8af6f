use crate::core::models::correlator::Correlator;
use crate::core::models::dataset::CorrelationDataset;
use crate::core::models::profile::RealSpaceProfile;
use crate::core::symmetry::PointGroup;
use crate::engine::config::TransformConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::projection;
use tracing::{info, instrument, warn};

/// Computes the real-space profile of `correlator` for `dataset`.
#[instrument(skip_all, name = "real_space_workflow", fields(correlator = %correlator))]
pub fn run(
    dataset: &CorrelationDataset,
    correlator: Correlator,
    config: &TransformConfig,
    reporter: &ProgressReporter,
) -> Result<RealSpaceProfile, EngineError> {
    let group = PointGroup::oh()?;

    if let Some(recorded) = dataset.grid_size()
        && recorded != config.grid_size
    {
        warn!(
            "Dataset records grid size {} but the transform uses {}.",
            recorded, config.grid_size
        );
        reporter.report(Progress::Note(format!(
            "grid size {} overrides the dataset's {}",
            config.grid_size, recorded
        )));
    }

    info!(
        "Transforming {} IBZ samples ({} correlator) onto distances {:?}.",
        dataset.len(),
        correlator,
        config.distances()
    );

    let func = dataset.combined(correlator);
    projection::transform_with_config(group, dataset.points(), &func, config, reporter)
}
