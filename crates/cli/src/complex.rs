use anyhow::{bail, Context, Result};
use homcycle::api::{BoundaryMapWriter, BoundaryMatrix, CellId, ReduceCfg};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Cell complex as read from JSON. Cell `i` gets id `i`; boundary rows are cell ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexFile {
    #[serde(default = "default_kind")]
    pub kind: String,
    pub cells: Vec<CellSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellSpec {
    pub dim: usize,
    #[serde(default)]
    pub boundary: Vec<(u64, i64)>,
}

fn default_kind() -> String {
    "abstract".to_string()
}

impl ComplexFile {
    pub fn read(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn top_dimension(&self) -> usize {
        self.cells.iter().map(|c| c.dim).max().unwrap_or(0)
    }

    /// Boundary matrix with every coefficient checked against the insertion rules.
    pub fn to_matrix(&self, cfg: ReduceCfg) -> Result<BoundaryMatrix> {
        let top = self.top_dimension();
        let mut counts = vec![0usize; top + 1];
        for c in &self.cells {
            counts[c.dim] += 1;
        }
        let mut m = BoundaryMatrix::new(top, &counts)?.with_cfg(cfg);
        for (i, cell) in self.cells.iter().enumerate() {
            let id = m.add_cell(cell.dim);
            if id != CellId(i as u64) {
                bail!("cell {i} was assigned id {id}");
            }
            for &(row, value) in &cell.boundary {
                m.try_add_boundary_coef(id, CellId(row), value)
                    .with_context(|| format!("boundary of cell {i}"))?;
            }
        }
        tracing::debug!(cells = m.len(), top, "matrix built");
        Ok(m)
    }

    /// Boundary-map chunk in cell order.
    pub fn to_chunk(&self) -> Vec<u8> {
        let mut w = BoundaryMapWriter::new(self.kind.clone());
        for cell in &self.cells {
            let rows: Vec<u64> = cell.boundary.iter().map(|&(r, _)| r).collect();
            let coefs: Vec<i64> = cell.boundary.iter().map(|&(_, v)| v).collect();
            w.push_cell(cell.dim as u64, &rows, &coefs);
        }
        w.to_bytes()
    }
}
