use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::boundary::{BoundaryCondition, Side};
use crate::errors::Heat1dError;

/// One simulation case as read from a JSON case file.
///
/// Field names match the on-disk schema:
///
/// ```json
/// {
///     "length": 1.0,
///     "ndiv": 5,
///     "dt": 1.0,
///     "nstep": 100,
///     "lbc": { "type": 1, "params": { "value": 10.0 } },
///     "rbc": { "type": 3, "params": { "value": 30.0, "h": 1.0 } },
///     "initialt": 15.0,
///     "prop": { "k": 1.0, "ro": 2.0, "cp": 3.0 }
/// }
/// ```
///
/// The boundary blocks keep the numeric `type` tag of the file format;
/// [`RawBoundary::resolve`] turns them into typed values and is where unknown
/// tags and missing parameters are rejected, before any stepping starts.
#[derive(Debug, Clone, Deserialize)]
pub struct Input {
    /// Rod length [m].
    pub length: f64,
    /// Number of finite-volume cells.
    pub ndiv: usize,
    /// Time step [s].
    pub dt: f64,
    /// Number of steps to run.
    pub nstep: u64,
    /// Left-end boundary condition.
    pub lbc: RawBoundary,
    /// Right-end boundary condition.
    pub rbc: RawBoundary,
    /// Uniform initial temperature.
    pub initialt: f64,
    /// Uniform material properties.
    pub prop: MaterialProps,
    /// Keep one snapshot every this many steps (default 1, step 0 is always
    /// kept).
    #[serde(default = "default_write_every")]
    pub write_every_steps: u64,
}

fn default_write_every() -> u64 {
    1
}

impl Input {
    /// Read and decode a case file.
    pub fn load(path: &Path) -> Result<Self, Heat1dError> {
        let file = File::open(path).map_err(|source| Heat1dError::CaseFileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| Heat1dError::MalformedCaseFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Uniform material properties block of the case file.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MaterialProps {
    /// Thermal conductivity [W/(m*K)].
    pub k: f64,
    /// Density [kg/m^3].
    pub ro: f64,
    /// Specific heat capacity [J/(kg*K)].
    pub cp: f64,
}

/// Boundary block as stored in the case file: a numeric kind tag plus a
/// parameter bag. 1 = fixed temperature, 2 = fixed flux, 3 = convective.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawBoundary {
    #[serde(rename = "type")]
    pub kind: i64,
    #[serde(default)]
    pub params: RawBoundaryParams,
}

/// Parameter bag of a boundary block; which entries are required depends on
/// the kind tag.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawBoundaryParams {
    pub value: Option<f64>,
    pub h: Option<f64>,
}

impl RawBoundary {
    /// Convert the raw block into a typed condition.
    ///
    /// Unknown tags and missing parameters fail here so that a bad boundary
    /// block can never reach assembly.
    pub fn resolve(&self, side: Side) -> Result<BoundaryCondition, Heat1dError> {
        let kind = self.kind;
        let require = |param: &'static str, value: Option<f64>| {
            value.ok_or(Heat1dError::MissingBoundaryParam { side, kind, param })
        };
        match kind {
            1 => Ok(BoundaryCondition::Dirichlet {
                temperature: require("value", self.params.value)?,
            }),
            2 => Ok(BoundaryCondition::Neumann {
                heat_flux: require("value", self.params.value)?,
            }),
            3 => Ok(BoundaryCondition::Convective {
                h: require("h", self.params.h)?,
                t_fluid: require("value", self.params.value)?,
            }),
            _ => Err(Heat1dError::UnknownBoundaryKind { side, kind }),
        }
    }
}
