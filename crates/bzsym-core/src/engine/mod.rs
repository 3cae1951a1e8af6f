//! # Engine Module
//!
//! The algorithmic layer: symmetry expansion of IBZ samples onto the full periodic
//! momentum grid, inverse Fourier projection onto a lattice direction, and extraction of
//! the cubic high-symmetry path.
//!
//! - **Configuration** ([`config`]) - Validated parameters for the transform and the path
//! - **Expansion** ([`expansion`]) - Orbit filling of the dense `grid_size³` grid
//! - **Projection** ([`projection`]) - Real-space profile along one axis
//! - **Path** ([`path`]) - Γ-X-M-Γ-R-X-M-R segment selection and arc length
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine error taxonomy
//!
//! All operations are pure and synchronous. Buffers are allocated per call, so independent
//! calls may run concurrently; the only shared state is the read-only point group.

pub mod config;
pub mod error;
pub mod expansion;
pub mod path;
pub mod progress;
pub mod projection;
