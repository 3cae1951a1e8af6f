//! # bzsym Core Library
//!
//! Symmetry expansion and inverse Fourier projection of lattice correlation data defined
//! on the irreducible wedge of a cubic Brillouin zone.
//!
//! ## Architecture
//!
//! The crate follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`IbzPoint`, `CorrelationDataset`,
//!   `RealSpaceProfile`, `MomentumPath`) and the cubic point group `Oh`, built once and
//!   shared read-only for the lifetime of the process.
//!
//! - **[`engine`]: The Algorithms.** Orbit expansion of IBZ samples onto the full periodic
//!   momentum grid, the inverse Fourier projection along a lattice direction, and the
//!   Γ-X-M-Γ-R-X-M-R high-symmetry path extraction. Every call owns its own buffers.
//!
//! - **[`workflows`]: The Public API.** Ties a dataset, a correlator choice and a validated
//!   configuration together and runs the engine, reporting progress along the way.
//!
//! The library performs no I/O; loading data and presenting results belongs to callers.

pub mod core;
pub mod engine;
pub mod workflows;
