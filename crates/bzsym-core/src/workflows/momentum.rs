use crate::core::models::correlator::Correlator;
use crate::core::models::dataset::CorrelationDataset;
use crate::core::models::path::MomentumPath;
use crate::engine::config::PathConfig;
use crate::engine::error::EngineError;
use crate::engine::path;
use crate::engine::progress::{Progress, ProgressReporter, Stage};
use tracing::{info, instrument};

/// Samples `correlator` along the high-symmetry path.
///
/// An explicit `config.grid_size` wins; otherwise the dataset's recorded grid size is used,
/// and only when neither is available is the size inferred from the wedge.
#[instrument(skip_all, name = "momentum_workflow", fields(correlator = %correlator))]
pub fn run(
    dataset: &CorrelationDataset,
    correlator: Correlator,
    config: &PathConfig,
    reporter: &ProgressReporter,
) -> Result<MomentumPath, EngineError> {
    let effective = PathConfig {
        grid_size: config.grid_size.or(dataset.grid_size()),
    };

    reporter.report(Progress::StageStart {
        stage: Stage::PathExtraction,
    });
    let func = dataset.combined(correlator);
    let momentum_path = path::extract(dataset.points(), &func, &effective)?;
    reporter.report(Progress::StageFinish);

    if momentum_path.has_grid_size_mismatch() {
        reporter.report(Progress::Note(format!(
            "IBZ wedge implies grid size {}, using {}",
            momentum_path.inferred_grid_size(),
            momentum_path.grid_size()
        )));
    }

    info!(
        "Extracted {} path points for the {} correlator.",
        momentum_path.len(),
        correlator
    );
    Ok(momentum_path)
}
