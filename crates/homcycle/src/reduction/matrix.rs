//! Per-dimension boundary matrix and the twist reduction.

use nalgebra::{DMatrix, DVector};

use super::column::SparseColumn;
use super::types::{CellId, MatrixError, Obstruction, PersistencePair, ReduceCfg};

/// Sparse integer boundary matrix split by dimension.
///
/// Invariants:
/// - `index[id]` is `(dimension, local index)`; ids grow with insertion order.
/// - `cells[d][local]` inverts `index` for every dimension.
/// - Each column only references rows of the dimension directly below it.
#[derive(Clone, Debug)]
pub struct BoundaryMatrix {
    top_dimension: usize,
    columns: Vec<Vec<SparseColumn>>,
    cells: Vec<Vec<CellId>>,
    index: Vec<(usize, usize)>,
    pairs: Vec<PersistencePair>,
    cfg: ReduceCfg,
}

impl BoundaryMatrix {
    /// Empty matrix for cells of dimension `0..=top_dimension`.
    ///
    /// `num_cells[d]` only pre-sizes storage for dimension `d`.
    pub fn new(top_dimension: usize, num_cells: &[usize]) -> Result<Self, MatrixError> {
        if num_cells.len() != top_dimension + 1 {
            return Err(MatrixError::CountsMismatch {
                top_dimension,
                counts: num_cells.len(),
            });
        }
        let total = num_cells.iter().sum();
        Ok(Self {
            top_dimension,
            columns: num_cells.iter().map(|&n| Vec::with_capacity(n)).collect(),
            cells: num_cells.iter().map(|&n| Vec::with_capacity(n)).collect(),
            index: Vec::with_capacity(total),
            pairs: Vec::new(),
            cfg: ReduceCfg::default(),
        })
    }

    pub fn with_cfg(mut self, cfg: ReduceCfg) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn top_dimension(&self) -> usize {
        self.top_dimension
    }

    /// Number of cells registered in dimension `d`.
    pub fn num_cells(&self, d: usize) -> usize {
        self.cells.get(d).map_or(0, Vec::len)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// `(dimension, local index)` of a cell.
    pub fn locate(&self, cell: CellId) -> Option<(usize, usize)> {
        usize::try_from(cell.0)
            .ok()
            .and_then(|i| self.index.get(i).copied())
    }

    pub fn dimension_of(&self, cell: CellId) -> Option<usize> {
        self.locate(cell).map(|(d, _)| d)
    }

    /// Cell at `local` in dimension `d`.
    pub fn cell(&self, d: usize, local: usize) -> Option<CellId> {
        self.cells.get(d).and_then(|c| c.get(local)).copied()
    }

    /// Stored (possibly reduced) column of a cell.
    pub fn column(&self, cell: CellId) -> Option<&SparseColumn> {
        let (d, l) = self.locate(cell)?;
        self.columns[d].get(l)
    }

    /// Pairs found by the reductions run so far.
    pub fn pairs(&self) -> &[PersistencePair] {
        &self.pairs
    }

    /// Register a new cell with an empty boundary.
    ///
    /// Panics if `dimension > top_dimension`.
    pub fn add_cell(&mut self, dimension: usize) -> CellId {
        assert!(
            dimension <= self.top_dimension,
            "dimension {dimension} exceeds top dimension {}",
            self.top_dimension
        );
        let local = self.columns[dimension].len();
        // A simplex of dimension d has d+1 facets; other cells grow the vec.
        self.columns[dimension].push(SparseColumn::with_capacity(dimension + 1));
        let id = CellId(self.index.len() as u64);
        self.index.push((dimension, local));
        self.cells[dimension].push(id);
        id
    }

    /// Set the coefficient of `row` in the boundary of `col`.
    ///
    /// Panics on unknown cells or `dim(col) != dim(row) + 1`; birth order and
    /// row order are only checked in debug builds.
    pub fn add_boundary_coef(&mut self, col: CellId, row: CellId, value: i64) {
        let (dc, lc) = self.locate(col).expect("column cell registered");
        let (dr, lr) = self.locate(row).expect("row cell registered");
        assert!(
            dc == dr + 1,
            "cell {row} (dim {dr}) is not a facet dimension of cell {col} (dim {dc})"
        );
        debug_assert!(row < col, "boundary cell {row} born after cell {col}");
        self.columns[dc][lc].set(lr, value);
    }

    /// Checked variant of [`Self::add_boundary_coef`] for external input.
    pub fn try_add_boundary_coef(
        &mut self,
        col: CellId,
        row: CellId,
        value: i64,
    ) -> Result<(), MatrixError> {
        let (dc, lc) = self
            .locate(col)
            .ok_or(MatrixError::UnknownCell { cell: col })?;
        let (dr, lr) = self
            .locate(row)
            .ok_or(MatrixError::UnknownCell { cell: row })?;
        if dc != dr + 1 {
            return Err(MatrixError::DimensionMismatch { col, row });
        }
        if row >= col {
            return Err(MatrixError::RowNotOlder { col, row });
        }
        let column = &mut self.columns[dc][lc];
        if column.low().is_some_and(|last| last >= lr) {
            return Err(MatrixError::RowOutOfOrder { col, row });
        }
        column.set(lr, value);
        Ok(())
    }

    /// Twist reduction of dimension `d`, columns in birth order.
    ///
    /// Returns the first non-unit pivot that no earlier column owns, or
    /// `CoefficientOverflow` if a column add leaves the `i64` range.
    pub fn reduce(&mut self, d: usize) -> Result<Option<Obstruction>, MatrixError> {
        if d == 0 || d > self.top_dimension {
            return Ok(None);
        }
        let _span = tracing::debug_span!("reduce", dimension = d).entered();
        self.pairs.retain(|p| p.dimension != d);
        let (lower, upper) = self.columns.split_at_mut(d);
        let faces = &mut lower[d - 1];
        let cols = &mut upper[0];
        // pivot row -> pivot column (local index in dimension d)
        let mut pivots: Vec<Option<usize>> = vec![None; faces.len()];
        let mut steps = 0usize;
        let mut dead = 0usize;
        for j in 0..cols.len() {
            let (done, rest) = cols.split_at_mut(j);
            let col = &mut rest[0];
            while let Some(low) = col.low() {
                let Some(k) = pivots[low] else {
                    break;
                };
                if !col.reduce_step(&done[k]) {
                    let cell = self.cells[d][j];
                    tracing::debug!(cell = cell.0, steps, "coefficient overflow");
                    return Err(MatrixError::CoefficientOverflow { cell });
                }
                steps += 1;
            }
            let (Some(low), Some(value)) = (col.low(), col.low_value()) else {
                dead += 1;
                continue;
            };
            if value.unsigned_abs() != 1 {
                let obstruction = Obstruction {
                    coefficient: value.unsigned_abs(),
                    cell: self.cells[d][j],
                };
                tracing::debug!(
                    coefficient = obstruction.coefficient,
                    cell = obstruction.cell.0,
                    "non-unit pivot"
                );
                return Ok(Some(obstruction));
            }
            col.adjust_sign();
            pivots[low] = Some(j);
            if self.cfg.use_twist {
                faces[low].die();
            }
            self.pairs.push(PersistencePair {
                dimension: d,
                birth: self.cells[d - 1][low],
                death: self.cells[d][j],
            });
        }
        tracing::debug!(columns = cols.len(), steps, dead, "reduced");
        Ok(None)
    }

    /// Reduce every dimension from the top down to 1, stopping at the first obstruction.
    pub fn reduce_all(&mut self) -> Result<Option<Obstruction>, MatrixError> {
        for d in (1..=self.top_dimension).rev() {
            if let Some(obstruction) = self.reduce(d)? {
                return Ok(Some(obstruction));
            }
        }
        Ok(None)
    }

    /// Host status pair: `(0, CellId(0))` on success, else `(|coefficient|, cell)`.
    pub fn check(&mut self) -> Result<(u64, CellId), MatrixError> {
        Ok(self.reduce_all()?.map_or((0, CellId(0)), |o| o.status()))
    }

    /// Dense column of `cell`, one entry per cell of the dimension below.
    pub fn column_vector(&self, cell: CellId) -> Result<DVector<i64>, MatrixError> {
        let (d, l) = self.locate(cell).ok_or(MatrixError::UnknownCell { cell })?;
        if d == 0 {
            return Ok(DVector::zeros(0));
        }
        Ok(self.columns[d][l].vectorize(self.columns[d - 1].len()))
    }

    /// Dense `∂_d` (rows: (d-1)-cells, columns: d-cells) of the current state.
    pub fn dense_boundary(&self, d: usize) -> DMatrix<i64> {
        let ncols = self.num_cells(d);
        let nrows = if d == 0 { 0 } else { self.num_cells(d - 1) };
        let mut m = DMatrix::zeros(nrows, ncols);
        if d == 0 || d > self.top_dimension {
            return m;
        }
        for (j, col) in self.columns[d].iter().enumerate() {
            for &(r, v) in col.entries() {
                m[(r, j)] = v;
            }
        }
        m
    }
}
