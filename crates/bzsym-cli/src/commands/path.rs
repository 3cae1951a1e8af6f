use super::open_output;
use crate::cli::PathArgs;
use crate::config::PartialConfig;
use crate::data::load_dataset;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use bzsym::{core::models::path::MomentumPath, engine::progress::ProgressReporter, workflows};
use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};

#[derive(Serialize)]
struct PathRow {
    distance: f64,
    value: f64,
    kx: i32,
    ky: i32,
    kz: i32,
    label: Option<&'static str>,
}

pub fn run(args: PathArgs) -> Result<()> {
    let partial = PartialConfig::load(args.dataset.config.as_deref())?;
    let correlator = partial.resolve_correlator(&args.dataset)?;
    let config = partial.merge_path(&args.dataset)?;
    let dataset = load_dataset(&args.dataset.input, config.grid_size)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the momentum-path workflow...");
    let path = workflows::momentum::run(&dataset, correlator, &config, &reporter)?;
    if path.has_grid_size_mismatch() {
        warn!(
            "Grid size {} does not match the {} implied by the IBZ.",
            path.grid_size(),
            path.inferred_grid_size()
        );
    }

    write_path(&path, open_output(args.dataset.output.as_deref())?)?;
    info!("Wrote {} path points.", path.len());
    Ok(())
}

pub(crate) fn write_path<W: Write>(path: &MomentumPath, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (index, ((distance, value), point)) in path
        .distances()
        .iter()
        .zip(path.values())
        .zip(path.points())
        .enumerate()
    {
        wtr.serialize(PathRow {
            distance: *distance,
            value: *value,
            kx: point.kx,
            ky: point.ky,
            kz: point.kz,
            label: path.tick_at(index).map(|t| t.label.as_str()),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
