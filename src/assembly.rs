use crate::boundary::BoundaryCondition;
use crate::material::MaterialField;
use crate::mesh::Mesh;
use crate::system::TridiagonalSystem;

/// Populate the tridiagonal system for one backward-Euler step.
///
/// Implicit finite-volume discretization of the heat equation: the diffusion
/// terms are evaluated at the new time level, so every step costs one solve
/// but any `dt` is stable. Face conductivity between two cells is the
/// arithmetic mean of their conductivities; boundary conditions enter the two
/// end rows as linearized sources `(sp, su)`.
///
/// `u_old` is the committed field of the previous step. Only `system` is
/// written.
pub fn assemble(
    system: &mut TridiagonalSystem,
    mesh: &Mesh,
    props: &MaterialField,
    left: &BoundaryCondition,
    right: &BoundaryCondition,
    u_old: &[f64],
    dt: f64,
) {
    let n = mesh.n_cells();
    debug_assert_eq!(system.neq(), n);
    debug_assert_eq!(props.n_cells(), n);
    debug_assert_eq!(u_old.len(), n);

    let dx = mesh.dx();
    let k = props.conductivity();
    let ro = props.density();
    let cp = props.specific_heat();

    // Interior cells: transient term plus mean-conductivity coupling to both
    // neighbors. The diagonal carries the transient term on top of
    // |aW| + |aE|, so the system stays strictly diagonally dominant.
    for i in 1..n - 1 {
        let ap0 = ro[i] * cp[i] * dx / dt;
        let aw = 0.5 * (k[i - 1] + k[i]) / dx;
        let ae = 0.5 * (k[i] + k[i + 1]) / dx;
        system.rows[i] = [-aw, ap0 + aw + ae, -ae];
        system.rhs[i] = ap0 * u_old[i];
    }

    // Left boundary cell: eastern neighbor only, face handled by the source.
    {
        let ap0 = ro[0] * cp[0] * dx / dt;
        let ae = 0.5 * (k[0] + k[1]) / dx;
        let (sp, su) = left.linearized(k[0], dx);
        system.rows[0] = [0.0, ap0 + ae - sp, -ae];
        system.rhs[0] = su + ap0 * u_old[0];
    }

    // Right boundary cell, mirror of the left.
    {
        let last = n - 1;
        let ap0 = ro[last] * cp[last] * dx / dt;
        let aw = 0.5 * (k[last - 1] + k[last]) / dx;
        let (sp, su) = right.linearized(k[last], dx);
        system.rows[last] = [-aw, ap0 + aw - sp, 0.0];
        system.rhs[last] = su + ap0 * u_old[last];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Regression matrix for a 10-cell rod with a fixed-temperature left end
    /// and a convective right end, assembled from a zero field.
    ///
    /// With k=2, ro=2, cp=0.5, dx=0.1 and dt=1 the transient term is 0.1 and
    /// every face coefficient is 20, which makes the expected coefficients
    /// easy to audit by hand.
    #[test]
    fn test_assembly_dirichlet_convective_rod() {
        let mesh = Mesh::uniform(1.0, 10).unwrap();
        let props = MaterialField::uniform(10, 2.0, 2.0, 0.5).unwrap();
        let left = BoundaryCondition::Dirichlet { temperature: 10.0 };
        let right = BoundaryCondition::Convective {
            h: 1.0,
            t_fluid: 30.0,
        };
        let u = vec![0.0; 10];
        let mut system = TridiagonalSystem::new(10);

        assemble(&mut system, &mesh, &props, &left, &right, &u, 1.0);

        assert_relative_eq!(system.rhs[0], 400.0, max_relative = 1e-12);
        for i in 1..9 {
            assert_eq!(system.rhs[i], 0.0, "rhs[{i}] should be zero");
        }
        assert_relative_eq!(system.rhs[9], 27.272727272727273, max_relative = 1e-12);

        let row0 = system.rows[0];
        assert_eq!(row0[0], 0.0);
        assert_relative_eq!(row0[1], 60.1, max_relative = 1e-12);
        assert_relative_eq!(row0[2], -20.0, max_relative = 1e-12);

        for i in 1..9 {
            let row = system.rows[i];
            assert_relative_eq!(row[0], -20.0, max_relative = 1e-12);
            assert_relative_eq!(row[1], 40.1, max_relative = 1e-12);
            assert_relative_eq!(row[2], -20.0, max_relative = 1e-12);
        }

        let row9 = system.rows[9];
        assert_relative_eq!(row9[0], -20.0, max_relative = 1e-12);
        assert_relative_eq!(row9[1], 21.00909090909091, max_relative = 1e-12);
        assert_eq!(row9[2], 0.0);
    }

    /// The previous field only enters through the transient RHS term.
    #[test]
    fn test_assembly_rhs_tracks_previous_field() {
        let mesh = Mesh::uniform(1.0, 5).unwrap();
        let props = MaterialField::uniform(5, 1.0, 2.0, 3.0).unwrap();
        let left = BoundaryCondition::Dirichlet { temperature: 10.0 };
        let right = BoundaryCondition::Dirichlet { temperature: 20.0 };
        let mut system = TridiagonalSystem::new(5);

        let u = vec![15.0; 5];
        assemble(&mut system, &mesh, &props, &left, &right, &u, 1.0);
        let rows_before = system.rows.clone();

        // ap0 = 2*3*0.2/1 = 1.2 for every cell
        assert_relative_eq!(system.rhs[2], 1.2 * 15.0, max_relative = 1e-12);

        let warmer = vec![25.0; 5];
        assemble(&mut system, &mesh, &props, &left, &right, &warmer, 1.0);
        assert_relative_eq!(system.rhs[2], 1.2 * 25.0, max_relative = 1e-12);
        // Coefficients do not depend on the field.
        assert_eq!(system.rows, rows_before);
    }

    /// A zero-flux (adiabatic) end leaves the diagonal without any boundary
    /// contribution: the cell only couples inward.
    #[test]
    fn test_assembly_adiabatic_end() {
        let mesh = Mesh::uniform(1.0, 4).unwrap();
        let props = MaterialField::uniform(4, 1.0, 1.0, 1.0).unwrap();
        let left = BoundaryCondition::Neumann { heat_flux: 0.0 };
        let right = BoundaryCondition::Dirichlet { temperature: 0.0 };
        let u = vec![5.0; 4];
        let mut system = TridiagonalSystem::new(4);

        assemble(&mut system, &mesh, &props, &left, &right, &u, 0.5);

        // dx = 0.25: ap0 = 0.25/0.5 = 0.5, ae = 1/0.25 = 4.
        let row0 = system.rows[0];
        assert_eq!(row0[0], 0.0);
        assert_relative_eq!(row0[1], 0.5 + 4.0, max_relative = 1e-12);
        assert_relative_eq!(row0[2], -4.0, max_relative = 1e-12);
        assert_relative_eq!(system.rhs[0], 0.5 * 5.0, max_relative = 1e-12);
    }
}
