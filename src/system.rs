/// Tridiagonal system of one implicit step.
///
/// Row `i` stores the `[sub, diag, super]` coefficients of the discretized
/// equation for cell `i`: the sub entry couples to cell `i-1`, the super
/// entry to cell `i+1`, and both are zero where the cell touches a domain
/// boundary. The assembler overwrites every entry each step, so both buffers
/// are allocated once and reused for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem {
    /// Coefficient rows `[sub, diag, super]`.
    pub rows: Vec<[f64; 3]>,
    /// Right-hand side, one entry per row.
    pub rhs: Vec<f64>,
}

impl TridiagonalSystem {
    /// Zeroed system with `neq` equations.
    pub fn new(neq: usize) -> Self {
        Self {
            rows: vec![[0.0; 3]; neq],
            rhs: vec![0.0; neq],
        }
    }

    /// Number of equations (one per cell).
    pub fn neq(&self) -> usize {
        self.rows.len()
    }
}
