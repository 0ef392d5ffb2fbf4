use anyhow::{Context, Result};
use log::debug;
use std::mem;
use std::time::Instant;

use crate::assembly::assemble;
use crate::boundary::{BoundaryCondition, Side};
use crate::errors::Heat1dError;
use crate::input::Input;
use crate::material::MaterialField;
use crate::mesh::Mesh;
use crate::solver::ThomasSolver;
use crate::system::TridiagonalSystem;
use crate::timing::RunTimes;

/// Receives one temperature snapshot per emitted step.
///
/// Implemented by the results writer and, in tests, by in-memory collectors.
/// `record` is called once for the initial condition (step 0) and once per
/// committed step that survives decimation.
pub trait SnapshotSink {
    fn record(&mut self, step: u64, t: f64, u: &[f64]) -> Result<()>;
}

/// One transient conduction run.
///
/// Owns the grid, the material properties, both boundary conditions, the two
/// temperature buffers, and the scratch system/solver pair, and drives the
/// strictly sequential backward-Euler loop: assemble from the committed
/// field, solve into the spare buffer, swap, advance time. The field of step
/// `s` is therefore exactly the input of step `s + 1`, and the assembler can
/// never observe a half-written field.
#[derive(Debug)]
pub struct Simulation {
    mesh: Mesh,
    props: MaterialField,
    left: BoundaryCondition,
    right: BoundaryCondition,
    /// Time step [s].
    dt: f64,
    /// Number of steps to run.
    nstep: u64,
    /// Keep one snapshot every this many steps; step 0 is always kept.
    write_every: u64,
    /// Committed field of the latest step.
    u: Vec<f64>,
    /// Solver output buffer for the step in flight.
    u_next: Vec<f64>,
    system: TridiagonalSystem,
    solver: ThomasSolver,
    /// Elapsed simulated time [s].
    t: f64,
    /// Committed step count.
    step: u64,
    times: RunTimes,
}

impl Simulation {
    /// Build a run from its parts; `initial` is broadcast to every cell.
    ///
    /// Everything the loop relies on is validated here, so a constructed
    /// simulation cannot fail on malformed parameters later.
    pub fn new(
        mesh: Mesh,
        props: MaterialField,
        left: BoundaryCondition,
        right: BoundaryCondition,
        initial: f64,
        dt: f64,
        nstep: u64,
    ) -> Result<Self, Heat1dError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(Heat1dError::NonPositive {
                name: "dt",
                value: dt,
            });
        }
        if !initial.is_finite() {
            return Err(Heat1dError::NonFinite {
                name: "initial temperature",
                value: initial,
            });
        }
        let n = mesh.n_cells();
        if props.n_cells() != n {
            return Err(Heat1dError::ShapeMismatch {
                what: "material properties",
                expected: n,
                got: props.n_cells(),
            });
        }

        Ok(Self {
            u: vec![initial; n],
            u_next: vec![initial; n],
            system: TridiagonalSystem::new(n),
            solver: ThomasSolver::new(n),
            mesh,
            props,
            left,
            right,
            dt,
            nstep,
            write_every: 1,
            t: 0.0,
            step: 0,
            times: RunTimes::default(),
        })
    }

    /// Build a run straight from a decoded case file.
    pub fn from_input(input: &Input) -> Result<Self, Heat1dError> {
        let mesh = Mesh::uniform(input.length, input.ndiv)?;
        let props =
            MaterialField::uniform(input.ndiv, input.prop.k, input.prop.ro, input.prop.cp)?;
        let left = input.lbc.resolve(Side::Left)?;
        let right = input.rbc.resolve(Side::Right)?;
        Simulation::new(mesh, props, left, right, input.initialt, input.dt, input.nstep)?
            .with_write_every(input.write_every_steps)
    }

    /// Keep only every `every`-th snapshot (step 0 is always kept).
    pub fn with_write_every(mut self, every: u64) -> Result<Self, Heat1dError> {
        if every == 0 {
            return Err(Heat1dError::InvalidWriteInterval { every });
        }
        self.write_every = every;
        Ok(self)
    }

    /// Replace the broadcast initial condition with a per-cell field.
    pub fn with_initial_field(mut self, field: &[f64]) -> Result<Self, Heat1dError> {
        if field.len() != self.u.len() {
            return Err(Heat1dError::ShapeMismatch {
                what: "initial temperature field",
                expected: self.u.len(),
                got: field.len(),
            });
        }
        for &value in field {
            if !value.is_finite() {
                return Err(Heat1dError::NonFinite {
                    name: "initial temperature",
                    value,
                });
            }
        }
        self.u.copy_from_slice(field);
        Ok(self)
    }

    /// Run the configured number of steps, emitting snapshots to `sink`.
    ///
    /// The current field goes out first (step 0 for a fresh run), then every
    /// committed step that lands on the decimation interval. Any solver or
    /// sink failure aborts the run immediately with the step attached.
    pub fn run(&mut self, sink: &mut dyn SnapshotSink) -> Result<()> {
        debug!(
            "running {} steps of dt = {} s over {} cells",
            self.nstep.saturating_sub(self.step),
            self.dt,
            self.mesh.n_cells()
        );
        let loop_start = Instant::now();

        sink.record(self.step, self.t, &self.u)
            .with_context(|| format!("failed to record snapshot at step {}", self.step))?;

        while self.step < self.nstep {
            self.advance()?;
            if self.step % self.write_every == 0 {
                sink.record(self.step, self.t, &self.u)
                    .with_context(|| format!("failed to record snapshot at step {}", self.step))?;
            }
        }

        self.times.time_loop += loop_start.elapsed().as_secs_f64();
        Ok(())
    }

    /// Advance one backward-Euler step and commit the result.
    pub fn advance(&mut self) -> Result<()> {
        let started = Instant::now();
        assemble(
            &mut self.system,
            &self.mesh,
            &self.props,
            &self.left,
            &self.right,
            &self.u,
            self.dt,
        );
        self.times.assembly += started.elapsed().as_secs_f64();

        let started = Instant::now();
        self.solver
            .solve_into(&self.system, &mut self.u_next)
            .with_context(|| format!("time step {}", self.step + 1))?;
        self.times.solver += started.elapsed().as_secs_f64();

        // Commit: the solver output becomes the field the next assembly
        // reads, the old field becomes the spare output buffer.
        mem::swap(&mut self.u, &mut self.u_next);
        self.step += 1;
        self.t += self.dt;
        Ok(())
    }

    /// Committed cell temperatures.
    pub fn temperatures(&self) -> &[f64] {
        &self.u
    }

    /// Elapsed simulated time [s].
    pub fn current_time(&self) -> f64 {
        self.t
    }

    /// Number of committed steps.
    pub fn steps_taken(&self) -> u64 {
        self.step
    }

    /// Grid the run was built on.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Accumulated phase timings.
    pub fn times(&self) -> &RunTimes {
        &self.times
    }
}
