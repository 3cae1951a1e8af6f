use crate::error::{CliError, Result};
use bzsym::core::models::dataset::CorrelationDataset;
use bzsym::core::models::ibz::IbzPoint;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// One row of the input table.
#[derive(Debug, Deserialize)]
struct SampleRecord {
    kx: i32,
    ky: i32,
    kz: i32,
    diag: f64,
    offd: f64,
}

/// Reads IBZ samples from a CSV with header `kx,ky,kz,diag,offd`.
///
/// Rows keep their file order, which decides which sample wins where orbits overlap.
pub fn load_dataset(path: &Path, grid_size: Option<usize>) -> Result<CorrelationDataset> {
    info!("Loading IBZ samples from {:?}", path);
    let file = std::fs::File::open(path)?;
    read_dataset(file, grid_size).map_err(|e| match e {
        CliError::Csv(source) => CliError::FileParsing {
            path: path.to_path_buf(),
            source: source.into(),
        },
        other => other,
    })
}

pub fn read_dataset<R: Read>(reader: R, grid_size: Option<usize>) -> Result<CorrelationDataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut points = Vec::new();
    let mut diagonal = Vec::new();
    let mut off_diagonal = Vec::new();
    for record in csv_reader.deserialize() {
        let row: SampleRecord = record?;
        points.push(IbzPoint::new(row.kx, row.ky, row.kz));
        diagonal.push(row.diag);
        off_diagonal.push(row.offd);
    }

    debug!("Read {} IBZ samples.", points.len());
    Ok(CorrelationDataset::new(
        grid_size,
        points,
        diagonal,
        off_diagonal,
    )?)
}
