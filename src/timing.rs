use log::info;
use serde::Serialize;

/// Wall-clock totals for the phases of a run, in seconds.
///
/// Owned by the simulation and threaded through it explicitly; nothing here
/// is process-wide. `time_loop` covers the whole stepping loop, `assembly`
/// and `solver` the two phases inside each step.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RunTimes {
    /// Whole time-stepping loop [s].
    pub time_loop: f64,
    /// Coefficient assembly, accumulated over all steps [s].
    pub assembly: f64,
    /// Tridiagonal solves, accumulated over all steps [s].
    pub solver: f64,
}

impl RunTimes {
    /// Log the totals at info level.
    pub fn log_summary(&self) {
        info!(
            "time loop {:.3} s (assembly {:.3} s, solver {:.3} s)",
            self.time_loop, self.assembly, self.solver
        );
    }
}
