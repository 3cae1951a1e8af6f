use super::open_output;
use crate::cli::ProfileArgs;
use crate::config::PartialConfig;
use crate::data::load_dataset;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use bzsym::{
    core::models::profile::RealSpaceProfile, engine::progress::ProgressReporter, workflows,
};
use serde::Serialize;
use std::io::Write;
use tracing::info;

#[derive(Serialize)]
struct ProfileRow {
    x: i64,
    value: f64,
}

pub fn run(args: ProfileArgs) -> Result<()> {
    let partial = PartialConfig::load(args.dataset.config.as_deref())?;
    let correlator = partial.resolve_correlator(&args.dataset)?;
    let grid_size = partial.explicit_grid_size(&args.dataset);
    let dataset = load_dataset(&args.dataset.input, grid_size)?;

    info!("Merging configuration from file and CLI arguments...");
    let config = partial.merge_profile(&args, &dataset)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the real-space workflow...");
    let profile = workflows::real_space::run(&dataset, correlator, &config, &reporter)?;

    write_profile(&profile, open_output(args.dataset.output.as_deref())?)?;
    info!("Wrote {} profile values.", profile.len());
    Ok(())
}

pub(crate) fn write_profile<W: Write>(profile: &RealSpaceProfile, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (x, value) in profile.iter() {
        wtr.serialize(ProfileRow { x, value })?;
    }
    wtr.flush()?;
    Ok(())
}
