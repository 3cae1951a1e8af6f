//! # Core Module
//!
//! Fundamental building blocks shared by the engine and the workflows.
//!
//! - **Symmetry** ([`symmetry`]) - Integer rotation matrices and the 48-element cubic
//!   point group `Oh`, generated from Rodrigues rotations plus inversion.
//! - **Data Models** ([`models`]) - IBZ momentum points, correlation datasets, correlator
//!   combinations and the numeric results produced by the engine.

pub mod models;
pub mod symmetry;
