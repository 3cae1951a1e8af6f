//! # Workflows Module
//!
//! High-level entry points that take a [`CorrelationDataset`](crate::core::models::dataset::CorrelationDataset),
//! combine its correlators and run the engine with a validated configuration.
//!
//! - [`real_space`] - symmetry expansion followed by the inverse Fourier projection
//! - [`momentum`] - the correlator sampled along the Γ-X-M-Γ-R-X-M-R path

pub mod momentum;
pub mod real_space;
