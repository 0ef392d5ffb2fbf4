use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::mesh::Mesh;
use crate::stepper::SnapshotSink;
use crate::timing::RunTimes;

/// Results file name, written next to the case file.
pub const RESULTS_FILE: &str = "results.json";
/// Mesh file name, written next to the case file.
pub const MESH_FILE: &str = "mesh.json";
/// Phase-timing file name, written next to the case file.
pub const TIME_LOG_FILE: &str = "time_log.json";

/// One results record: committed step index, elapsed time, cell temperatures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub istep: u64,
    pub t: f64,
    pub u: Vec<f64>,
}

/// Buffers every emitted snapshot and writes them out as one JSON array.
///
/// Snapshots are one f64 per cell and runs are bounded by `nstep`, so the
/// whole history fits in memory and the file is written in a single pass
/// when the run is over.
#[derive(Debug)]
pub struct ResultsWriter {
    path: PathBuf,
    records: Vec<SnapshotRecord>,
}

impl ResultsWriter {
    /// Writer that will save to `path` once finished.
    pub fn create(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Number of buffered records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Buffered records, in emission order.
    pub fn records(&self) -> &[SnapshotRecord] {
        &self.records
    }

    /// Flush the buffered records to disk.
    pub fn finish(self) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("failed to create results file {}", self.path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.records)
            .with_context(|| format!("failed to write results to {}", self.path.display()))?;
        Ok(())
    }
}

impl SnapshotSink for ResultsWriter {
    fn record(&mut self, step: u64, t: f64, u: &[f64]) -> Result<()> {
        self.records.push(SnapshotRecord {
            istep: step,
            t,
            u: u.to_vec(),
        });
        Ok(())
    }
}

/// Write the grid geometry consumed by post-processing tools: the 1-based
/// node pair of each cell and the node coordinates.
pub fn write_mesh(path: &Path, mesh: &Mesh) -> Result<()> {
    #[derive(Serialize)]
    struct MeshFile<'a> {
        cell_nodes: &'a [[usize; 2]],
        x: &'a [f64],
    }

    let file = File::create(path)
        .with_context(|| format!("failed to create mesh file {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(
        writer,
        &MeshFile {
            cell_nodes: mesh.cell_nodes(),
            x: mesh.node_x(),
        },
    )
    .with_context(|| format!("failed to write mesh to {}", path.display()))?;
    Ok(())
}

/// Write the accumulated phase timings.
pub fn write_time_log(path: &Path, times: &RunTimes) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create time log {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, times)
        .with_context(|| format!("failed to write time log to {}", path.display()))?;
    Ok(())
}
