//! `Matrix`: boundary matrix handle for the simplicial-complex builder.

use crate::common::{map_matrix_err, non_negative};
use homcycle::api::{BoundaryMatrix, CellId};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pyclass(module = "homcycle_native")]
pub struct Matrix {
    inner: BoundaryMatrix,
}

#[pymethods]
impl Matrix {
    #[new]
    fn new(top_dimension: i64, num_cells: Vec<i64>) -> PyResult<Self> {
        let top = non_negative("top_dimension", top_dimension)?;
        let counts = num_cells
            .into_iter()
            .map(|n| non_negative("cell count", n))
            .collect::<PyResult<Vec<_>>>()?;
        let inner = BoundaryMatrix::new(top, &counts).map_err(map_matrix_err)?;
        Ok(Self { inner })
    }

    fn add_cell(&mut self, dimension: i64) -> PyResult<u64> {
        let d = non_negative("dimension", dimension)?;
        if d > self.inner.top_dimension() {
            return Err(PyValueError::new_err(format!(
                "dimension {d} exceeds top dimension {}",
                self.inner.top_dimension()
            )));
        }
        Ok(self.inner.add_cell(d).0)
    }

    fn add_boundary_coef(&mut self, col: u64, row: u64, value: i64) -> PyResult<()> {
        self.inner
            .try_add_boundary_coef(CellId(col), CellId(row), value)
            .map_err(map_matrix_err)
    }

    /// `(0, 0)` if the reduction succeeds, else `(|pivot|, cell)`.
    fn check(&mut self) -> PyResult<(u64, u64)> {
        let (status, cell) = self.inner.check().map_err(map_matrix_err)?;
        Ok((status, cell.0))
    }

    /// Dense boundary column of `col` (debugging only).
    fn column(&self, col: u64) -> PyResult<Vec<i64>> {
        let dense = self
            .inner
            .column_vector(CellId(col))
            .map_err(map_matrix_err)?;
        Ok(dense.iter().copied().collect())
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}
