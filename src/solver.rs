use crate::errors::Heat1dError;
use crate::system::TridiagonalSystem;

/// TDMA (Thomas algorithm) solver for the assembled tridiagonal systems.
///
/// The forward sweep runs on scratch copies of the super-diagonal and
/// right-hand side, so a solve never mutates the caller's system: the same
/// system can be solved twice or kept around for diagnostics. Scratch buffers
/// are allocated once and reused across steps.
///
/// No pivoting. The assembled systems are strictly diagonally dominant for
/// physical inputs (the diagonal carries the transient term on top of the
/// neighbor couplings), where the plain recurrence is stable. A vanishing
/// pivot indicates malformed input and is reported as an error.
#[derive(Debug, Clone)]
pub struct ThomasSolver {
    /// Scratch copy of the super-diagonal, normalized during the sweep.
    upper: Vec<f64>,
    /// Scratch copy of the right-hand side.
    rhs: Vec<f64>,
}

impl ThomasSolver {
    /// Solver with scratch capacity for `neq` equations.
    pub fn new(neq: usize) -> Self {
        Self {
            upper: vec![0.0; neq],
            rhs: vec![0.0; neq],
        }
    }

    /// Solve `system` and write the solution into `x`.
    ///
    /// Forward elimination normalizes each row by the running pivot, then
    /// back substitution walks the rows in reverse. A single equation
    /// reduces to `x[0] = rhs[0] / diag[0]`, the base of the recurrence.
    pub fn solve_into(
        &mut self,
        system: &TridiagonalSystem,
        x: &mut [f64],
    ) -> Result<(), Heat1dError> {
        let neq = system.neq();
        debug_assert_eq!(x.len(), neq);
        if neq == 0 {
            return Ok(());
        }

        self.upper.resize(neq, 0.0);
        self.rhs.resize(neq, 0.0);
        for (i, row) in system.rows.iter().enumerate() {
            self.upper[i] = row[2];
        }
        self.rhs.copy_from_slice(&system.rhs);

        let pivot = system.rows[0][1];
        if !is_usable_pivot(pivot) {
            return Err(Heat1dError::DegeneratePivot { row: 0 });
        }
        self.upper[0] /= pivot;
        self.rhs[0] /= pivot;

        if neq == 1 {
            x[0] = self.rhs[0];
            return Ok(());
        }

        // Forward sweep. The last row keeps its own expression below because
        // it has no super-diagonal entry to normalize.
        for i in 1..neq - 1 {
            let [lower, diag, _] = system.rows[i];
            let denom = diag - self.upper[i - 1] * lower;
            if !is_usable_pivot(denom) {
                return Err(Heat1dError::DegeneratePivot { row: i });
            }
            self.upper[i] /= denom;
            self.rhs[i] = (self.rhs[i] - self.rhs[i - 1] * lower) / denom;
        }

        let last = neq - 1;
        let [lower, diag, _] = system.rows[last];
        let denom = diag - self.upper[last - 1] * lower;
        if !is_usable_pivot(denom) {
            return Err(Heat1dError::DegeneratePivot { row: last });
        }
        self.rhs[last] = (self.rhs[last] - self.rhs[last - 1] * lower) / denom;

        // Back substitution.
        x[last] = self.rhs[last];
        for i in (0..last).rev() {
            x[i] = self.rhs[i] - self.upper[i] * x[i + 1];
        }
        Ok(())
    }
}

fn is_usable_pivot(denom: f64) -> bool {
    denom != 0.0 && denom.is_finite()
}
