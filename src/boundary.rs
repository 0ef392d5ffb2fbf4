use std::fmt;

/// Boundary condition applied at one end of the rod.
///
/// Exactly one condition is attached to each end and stays fixed for the
/// whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCondition {
    /// Fixed temperature at the boundary face.
    Dirichlet { temperature: f64 },
    /// Fixed heat flux through the boundary face [W/m^2], positive leaving
    /// the domain.
    Neumann { heat_flux: f64 },
    /// Convective exchange with a fluid at `t_fluid`, film coefficient `h`
    /// [W/(m^2*K)].
    Convective { h: f64, t_fluid: f64 },
}

impl BoundaryCondition {
    /// Linearized source contribution `(sp, su)` of this condition to the
    /// boundary cell, such that the cell equation gains `-sp` on the diagonal
    /// and `su` on the right-hand side.
    ///
    /// `k_boundary` is the boundary cell's conductivity and `dx` the cell
    /// width; both enter the coupling between the face value and the cell
    /// unknown.
    pub fn linearized(&self, k_boundary: f64, dx: f64) -> (f64, f64) {
        match *self {
            BoundaryCondition::Dirichlet { temperature } => {
                // Face held at `temperature` through a half-cell conductance
                // of 2k/dx.
                let sp = -2.0 * k_boundary / dx;
                (sp, -sp * temperature)
            }
            BoundaryCondition::Neumann { heat_flux } => (0.0, -heat_flux),
            BoundaryCondition::Convective { h, t_fluid } => {
                // Film resistance 1/h in series with the conduction term
                // 2*dx/k; the coefficient saturates at k/(2*dx) for large h.
                let tmp = h / (1.0 + h * 2.0 * dx / k_boundary);
                (-tmp, tmp * t_fluid)
            }
        }
    }
}

/// Which end of the rod a boundary condition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}
