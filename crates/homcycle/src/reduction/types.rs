//! Identifiers, outcomes, and errors for the boundary-matrix reduction.

use std::fmt;

/// Cell identifier in birth order across the whole complex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub u64);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-unit pivot found during reduction (torsion witness).
///
/// `coefficient` is the absolute pivot value (always > 1); `cell` owns the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstruction {
    pub coefficient: u64,
    pub cell: CellId,
}

impl Obstruction {
    /// Host-facing status pair `(|coefficient|, cell)`.
    pub fn status(&self) -> (u64, CellId) {
        (self.coefficient, self.cell)
    }
}

/// Persistence pair: `birth` is the (d-1)-cell at the pivot row, `death` the d-cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersistencePair {
    pub dimension: usize,
    pub birth: CellId,
    pub death: CellId,
}

/// Reduction configuration.
#[derive(Clone, Copy, Debug)]
pub struct ReduceCfg {
    /// Clear the column of the cell paired by each new pivot (twist).
    /// For boundary matrices with ∂²=0, pairs and obstructions do not depend
    /// on this; keep configurable only for ablations and benches.
    pub use_twist: bool,
}

impl Default for ReduceCfg {
    fn default() -> Self {
        Self { use_twist: true }
    }
}

/// Errors surfaced by matrix construction, the checked coefficient API, and
/// reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// `num_cells` must list one count per dimension `0..=top_dimension`.
    CountsMismatch { top_dimension: usize, counts: usize },
    /// Dimension above the matrix's top dimension.
    DimensionOutOfRange { dimension: usize, top_dimension: usize },
    /// Cell id was never handed out by `add_cell`.
    UnknownCell { cell: CellId },
    /// `dim(col)` must equal `dim(row) + 1`.
    DimensionMismatch { col: CellId, row: CellId },
    /// The row cell must be born before the column cell.
    RowNotOlder { col: CellId, row: CellId },
    /// Rows of one column must arrive in increasing order.
    RowOutOfOrder { col: CellId, row: CellId },
    /// Reducing the column of `cell` produced a coefficient outside `i64`.
    CoefficientOverflow { cell: CellId },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountsMismatch {
                top_dimension,
                counts,
            } => write!(
                f,
                "expected {} per-dimension cell counts for top dimension {top_dimension}, got {counts}",
                top_dimension + 1
            ),
            Self::DimensionOutOfRange {
                dimension,
                top_dimension,
            } => write!(
                f,
                "dimension {dimension} exceeds top dimension {top_dimension}"
            ),
            Self::UnknownCell { cell } => write!(f, "unknown cell {cell}"),
            Self::DimensionMismatch { col, row } => write!(
                f,
                "cell {row} is not a codimension-1 face of cell {col}"
            ),
            Self::RowNotOlder { col, row } => {
                write!(f, "boundary cell {row} is not born before cell {col}")
            }
            Self::RowOutOfOrder { col, row } => write!(
                f,
                "boundary cell {row} of cell {col} is not in increasing order"
            ),
            Self::CoefficientOverflow { cell } => {
                write!(f, "coefficient overflow while reducing cell {cell}")
            }
        }
    }
}

impl std::error::Error for MatrixError {}
