//! Integer boundary-matrix reduction (twist algorithm).
//!
//! Purpose
//! - Store the boundary of every cell as a sparse integer column, grouped by
//!   dimension, and reduce each dimension left to right.
//! - Report the first pivot that is not ±1 as an `Obstruction`: integer
//!   reduction diverges from field reduction for that complex.
//!
//! Notes
//! - Dimensions are reduced from the top down so that each new pivot can clear
//!   the column of the cell it pairs with (twist). Cleared columns are never
//!   reduced.
//! - Column states within one pass: alive → dead (reduced to zero or cleared)
//!   or alive → pivot. Neither terminal state changes again.
//! - Coefficients are exact `i64`; a column add that would leave that range
//!   stops the reduction with `MatrixError::CoefficientOverflow`.
//! - Preconditions on insertion order are asserted, not reported; use
//!   `BoundaryMatrix::try_add_boundary_coef` when coefficients come from
//!   untrusted input.

mod column;
mod matrix;
mod types;

pub use column::SparseColumn;
pub use matrix::BoundaryMatrix;
pub use types::{CellId, MatrixError, Obstruction, PersistencePair, ReduceCfg};
