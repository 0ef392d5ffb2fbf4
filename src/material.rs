use crate::errors::Heat1dError;

/// Per-cell material properties of the rod.
///
/// Stored as one value per cell; current setups assign a uniform material,
/// but the assembly already reads per-cell values. Values only move through
/// the explicit setters and never during time stepping.
#[derive(Debug, Clone)]
pub struct MaterialField {
    /// Thermal conductivity [W/(m*K)].
    conductivity: Vec<f64>,
    /// Density [kg/m^3].
    density: Vec<f64>,
    /// Specific heat capacity [J/(kg*K)].
    specific_heat: Vec<f64>,
}

impl MaterialField {
    /// Uniform material over `n_cells` cells.
    ///
    /// All three properties must be positive and finite; a zero conductivity
    /// or capacity would make the assembled system lose diagonal dominance.
    pub fn uniform(
        n_cells: usize,
        conductivity: f64,
        density: f64,
        specific_heat: f64,
    ) -> Result<Self, Heat1dError> {
        check_property("k", conductivity)?;
        check_property("ro", density)?;
        check_property("cp", specific_heat)?;
        Ok(Self {
            conductivity: vec![conductivity; n_cells],
            density: vec![density; n_cells],
            specific_heat: vec![specific_heat; n_cells],
        })
    }

    /// Number of cells covered.
    pub fn n_cells(&self) -> usize {
        self.conductivity.len()
    }

    /// Thermal conductivity per cell [W/(m*K)].
    pub fn conductivity(&self) -> &[f64] {
        &self.conductivity
    }

    /// Density per cell [kg/m^3].
    pub fn density(&self) -> &[f64] {
        &self.density
    }

    /// Specific heat capacity per cell [J/(kg*K)].
    pub fn specific_heat(&self) -> &[f64] {
        &self.specific_heat
    }

    /// Broadcast a new conductivity to every cell.
    pub fn set_conductivity(&mut self, value: f64) -> Result<(), Heat1dError> {
        check_property("k", value)?;
        self.conductivity.fill(value);
        Ok(())
    }

    /// Broadcast a new density to every cell.
    pub fn set_density(&mut self, value: f64) -> Result<(), Heat1dError> {
        check_property("ro", value)?;
        self.density.fill(value);
        Ok(())
    }

    /// Broadcast a new specific heat to every cell.
    pub fn set_specific_heat(&mut self, value: f64) -> Result<(), Heat1dError> {
        check_property("cp", value)?;
        self.specific_heat.fill(value);
        Ok(())
    }
}

fn check_property(name: &'static str, value: f64) -> Result<(), Heat1dError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Heat1dError::InvalidProperty { name, value })
    }
}
