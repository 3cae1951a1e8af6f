use crate::core::models::ibz::LatticeAxis;
use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Parameters of the expansion + inverse Fourier transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    pub grid_size: usize,
    pub x_min: i64,
    pub x_max: i64,
    pub axis: LatticeAxis,
}

impl TransformConfig {
    /// Real-space distances `[x_min, x_max)`.
    pub fn distances(&self) -> Range<i64> {
        self.x_min..self.x_max
    }

    pub fn num_distances(&self) -> usize {
        (self.x_max - self.x_min) as usize
    }
}

#[derive(Default)]
pub struct TransformConfigBuilder {
    grid_size: Option<usize>,
    x_min: Option<i64>,
    x_max: Option<i64>,
    axis: Option<usize>,
}

impl TransformConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid_size(mut self, n: usize) -> Self {
        self.grid_size = Some(n);
        self
    }
    pub fn x_min(mut self, x: i64) -> Self {
        self.x_min = Some(x);
        self
    }
    pub fn x_max(mut self, x: i64) -> Self {
        self.x_max = Some(x);
        self
    }
    pub fn axis(mut self, axis: usize) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn build(self) -> Result<TransformConfig, ConfigError> {
        let grid_size = self
            .grid_size
            .ok_or(ConfigError::MissingParameter("grid_size"))?;
        let x_min = self.x_min.ok_or(ConfigError::MissingParameter("x_min"))?;
        let x_max = self.x_max.ok_or(ConfigError::MissingParameter("x_max"))?;
        let axis_index = self.axis.ok_or(ConfigError::MissingParameter("axis"))?;

        let axis = validate_axis(axis_index)?;
        validate_grid_size(grid_size)?;
        if x_min >= x_max {
            return Err(ConfigError::InvalidParameter {
                name: "x_max",
                reason: format!("x_min ({}) must be less than x_max ({})", x_min, x_max),
            });
        }

        Ok(TransformConfig {
            grid_size,
            x_min,
            x_max,
            axis,
        })
    }
}

/// Parameters of the high-symmetry path extraction.
///
/// When `grid_size` is `None` it is inferred as `2 · max(component)` of the wedge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathConfig {
    pub grid_size: Option<usize>,
}

impl PathConfig {
    pub fn with_grid_size(grid_size: usize) -> Result<Self, ConfigError> {
        validate_grid_size(grid_size)?;
        Ok(Self {
            grid_size: Some(grid_size),
        })
    }
}

pub(crate) fn validate_axis(axis: usize) -> Result<LatticeAxis, ConfigError> {
    LatticeAxis::from_index(axis).ok_or_else(|| ConfigError::InvalidParameter {
        name: "axis",
        reason: format!("expected 0, 1 or 2, got {}", axis),
    })
}

pub(crate) fn validate_grid_size(grid_size: usize) -> Result<(), ConfigError> {
    if grid_size == 0 {
        return Err(ConfigError::InvalidParameter {
            name: "grid_size",
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}
