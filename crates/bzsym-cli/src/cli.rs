use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "bzsym contributors",
    version,
    about = "bzsym - symmetry expansion, real-space profiles and high-symmetry paths for correlation data on a cubic Brillouin zone.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand IBZ data over Oh and inverse-transform it onto real-space distances.
    Profile(ProfileArgs),
    /// Sample the data along the Γ-X-M-Γ-R-X-M-R high-symmetry path.
    Path(PathArgs),
    /// Print the 48 operations of the cubic point group Oh.
    Group,
}

/// Options shared by every command that reads a dataset.
#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// Path to the input CSV with columns kx,ky,kz,diag,offd.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path for the output CSV. Written to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Correlator to analyse (diag, offd, orbital, spin, exchange).
    #[arg(long, value_name = "NAME")]
    pub correlator: Option<String>,

    /// Linear size of the momentum grid. Inferred from the IBZ when not given anywhere.
    #[arg(short = 'n', long, value_name = "INT")]
    pub grid_size: Option<usize>,
}

/// Arguments for the `profile` subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Lattice direction of the profile (0 = x, 1 = y, 2 = z).
    #[arg(short, long, value_name = "AXIS")]
    pub axis: Option<usize>,

    /// First real-space distance (inclusive).
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub x_min: Option<i64>,

    /// Last real-space distance (exclusive).
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub x_max: Option<i64>,
}

/// Arguments for the `path` subcommand.
#[derive(Args, Debug)]
pub struct PathArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}
