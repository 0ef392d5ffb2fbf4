//! Transient 1D heat conduction in a rod, solved with an implicit
//! finite-volume scheme.
//!
//! Space is discretized into uniform cells with one unknown temperature per
//! cell; time advances with backward Euler, so every step assembles a
//! tridiagonal system and solves it with the Thomas algorithm. Any time step
//! is stable, the cost is one O(n) solve per step.
//!
//! # Architecture
//!
//! ```text
//! Input ──► Mesh + MaterialField + 2x BoundaryCondition
//!                        │
//!                        ▼
//!    assemble() ──► TridiagonalSystem ──► ThomasSolver
//!         ▲                                    │
//!         └─────────── Simulation ◄────────────┘
//!                         │
//!                   SnapshotSink (ResultsWriter, ...)
//! ```
//!
//! The per-step data flow is strictly sequential: the assembler reads the
//! committed field of the previous step, the solver writes the next field
//! into a second buffer, and the buffers swap on commit.

pub mod assembly;
pub mod boundary;
pub mod errors;
pub mod input;
pub mod material;
pub mod mesh;
pub mod solver;
pub mod stepper;
pub mod system;
pub mod timing;
pub mod writer;

pub use assembly::assemble;
pub use boundary::{BoundaryCondition, Side};
pub use errors::Heat1dError;
pub use input::{Input, MaterialProps, RawBoundary};
pub use material::MaterialField;
pub use mesh::Mesh;
pub use solver::ThomasSolver;
pub use stepper::{Simulation, SnapshotSink};
pub use system::TridiagonalSystem;
pub use timing::RunTimes;
pub use writer::{ResultsWriter, SnapshotRecord, write_mesh, write_time_log};
