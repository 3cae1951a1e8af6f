pub mod correlator;
pub mod dataset;
pub mod ibz;
pub mod path;
pub mod profile;
