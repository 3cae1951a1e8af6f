pub mod group;
pub mod path;
pub mod profile;

use crate::error::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Opens `path` for writing, or stdout when no path is given.
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            info!("Writing results to {:?}", p);
            Ok(Box::new(BufWriter::new(File::create(p)?)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
