mod defaults;

use crate::cli::{DatasetArgs, ProfileArgs};
use crate::error::{CliError, Result};
use bzsym::core::models::correlator::Correlator;
use bzsym::core::models::dataset::CorrelationDataset;
use bzsym::engine::config::{PathConfig, TransformConfig, TransformConfigBuilder};
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialProfileConfig {
    axis: Option<usize>,
    #[serde(rename = "x-min")]
    x_min: Option<i64>,
    #[serde(rename = "x-max")]
    x_max: Option<i64>,
}

/// Settings read from the optional TOML file. Every key may be omitted.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    #[serde(rename = "grid-size")]
    grid_size: Option<usize>,
    correlator: Option<String>,
    profile: Option<PartialProfileConfig>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads `path` when given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Correlator named on the command line, in the file, or the built-in default.
    pub fn resolve_correlator(&self, args: &DatasetArgs) -> Result<Correlator> {
        let defaults = DefaultsConfig::default();
        let name = args
            .correlator
            .as_deref()
            .or(self.correlator.as_deref())
            .unwrap_or(&defaults.correlator);
        Ok(name.parse::<Correlator>()?)
    }

    /// Explicit grid size from the command line or the file, if either gives one.
    pub fn explicit_grid_size(&self, args: &DatasetArgs) -> Option<usize> {
        args.grid_size.or(self.grid_size)
    }

    pub fn merge_profile(
        self,
        args: &ProfileArgs,
        dataset: &CorrelationDataset,
    ) -> Result<TransformConfig> {
        let defaults = DefaultsConfig::default();
        let profile = self.profile.unwrap_or_default();

        let grid_size = match args.dataset.grid_size.or(self.grid_size) {
            Some(n) => n,
            None => {
                let inferred = dataset.inferred_grid_size();
                info!("No grid size given; using {} inferred from the IBZ.", inferred);
                inferred
            }
        };

        let config = TransformConfigBuilder::new()
            .grid_size(grid_size)
            .x_min(args.x_min.or(profile.x_min).unwrap_or(defaults.x_min))
            .x_max(args.x_max.or(profile.x_max).unwrap_or(defaults.x_max))
            .axis(args.axis.or(profile.axis).unwrap_or(defaults.axis))
            .build()?;
        debug!("Resolved transform configuration: {:?}", config);
        Ok(config)
    }

    pub fn merge_path(&self, args: &DatasetArgs) -> Result<PathConfig> {
        let config = match self.explicit_grid_size(args) {
            Some(n) => PathConfig::with_grid_size(n)?,
            None => PathConfig::default(),
        };
        debug!("Resolved path configuration: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use bzsym::core::models::ibz::{IbzPoint, LatticeAxis};
    use clap::Parser;
    use once_cell::sync::Lazy;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    static TEST_DIR: Lazy<TempDir> = Lazy::new(|| tempdir().expect("Failed to create temp dir"));

    fn write_config_file(name: &str, content: &str) -> PathBuf {
        let file_path = TEST_DIR.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn profile_args(extra: &[&str]) -> ProfileArgs {
        let mut argv = vec!["bzsym", "profile", "-i", "data.csv"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Profile(args) => args,
            _ => unreachable!(),
        }
    }

    fn dataset() -> CorrelationDataset {
        CorrelationDataset::new(
            None,
            vec![IbzPoint::new(0, 0, 0), IbzPoint::new(3, 0, 0)],
            vec![1.0, 2.0],
            vec![0.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let args = profile_args(&[]);
        let partial = PartialConfig::default();
        assert_eq!(
            partial.resolve_correlator(&args.dataset).unwrap(),
            Correlator::OrbitalCharge
        );
        let config = partial.merge_profile(&args, &dataset()).unwrap();
        assert_eq!(config.grid_size, 6);
        assert_eq!(config.axis, LatticeAxis::X);
        assert_eq!(config.distances(), 0..16);
    }

    #[test]
    fn file_values_override_defaults() {
        let path = write_config_file(
            "file_values.toml",
            r#"
            grid-size = 8
            correlator = "spin"

            [profile]
            axis = 1
            x-min = -2
            x-max = 6
            "#,
        );
        let args = profile_args(&[]);
        let partial = PartialConfig::from_file(&path).unwrap();
        assert_eq!(
            partial.resolve_correlator(&args.dataset).unwrap(),
            Correlator::SpinCharge
        );
        let config = partial.merge_profile(&args, &dataset()).unwrap();
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.axis, LatticeAxis::Y);
        assert_eq!(config.distances(), -2..6);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let path = write_config_file(
            "cli_override.toml",
            "grid-size = 8\ncorrelator = \"spin\"\n[profile]\naxis = 1\nx-max = 6\n",
        );
        let args = profile_args(&["--grid-size", "10", "--correlator", "exchange", "-a", "2"]);
        let partial = PartialConfig::from_file(&path).unwrap();
        assert_eq!(
            partial.resolve_correlator(&args.dataset).unwrap(),
            Correlator::SpinExchange
        );
        let config = partial.merge_profile(&args, &dataset()).unwrap();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.axis, LatticeAxis::Z);
        assert_eq!(config.x_max, 6);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let path = write_config_file("unknown.toml", "grid_size = 4\n");
        assert!(matches!(
            PartialConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn unknown_correlator_is_an_argument_error() {
        let args = profile_args(&["--correlator", "density"]);
        let result = PartialConfig::default().resolve_correlator(&args.dataset);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn invalid_axis_is_a_config_error() {
        let args = profile_args(&["--axis", "3"]);
        let result = PartialConfig::default().merge_profile(&args, &dataset());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn path_config_takes_explicit_grid_size() {
        let args = profile_args(&["-n", "12"]);
        let config = PartialConfig::default().merge_path(&args.dataset).unwrap();
        assert_eq!(config.grid_size, Some(12));

        let args = profile_args(&[]);
        let config = PartialConfig::default().merge_path(&args.dataset).unwrap();
        assert_eq!(config.grid_size, None);
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let path = TEST_DIR.path().join("does_not_exist.toml");
        assert!(matches!(
            PartialConfig::load(Some(&path)),
            Err(CliError::Io(_))
        ));
    }
}
