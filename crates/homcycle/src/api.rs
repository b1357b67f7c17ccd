//! Host-facing API.
//!
//! Adapters (Python binding, CLI) should only need what is re-exported here.
//!
//! - Matrix side: `BoundaryMatrix::{new, add_cell, add_boundary_coef, check, column_vector}`.
//! - Cycle side: [`search`] over a boundary-map chunk.

use std::fmt;

pub use crate::chunk::{decode_boundary_edges, BoundaryMapWriter, DecodeCfg, DecodeError, EdgeTriple};
pub use crate::cycle::CycleGraph;
pub use crate::reduction::{
    BoundaryMatrix, CellId, MatrixError, Obstruction, PersistencePair, ReduceCfg,
};

/// Failure of [`search`]. "No loop" is not an error; it is `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The chunk is malformed or too short.
    Decode(DecodeError),
    /// The birth cell is not a 1-cell of the chunk.
    NotAnEdge { birth: CellId },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "malformed boundary map: {err}"),
            Self::NotAnEdge { birth } => write!(f, "cell {birth} is not a 1-cell"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::NotAnEdge { .. } => None,
        }
    }
}

impl From<DecodeError> for SearchError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

/// Shortest loop through 1-cell `birth` in a boundary-map chunk.
///
/// Returns the cell ids of the loop, birth edge first, or `Ok(None)` if the
/// birth edge closes no loop among cells `0..=birth`.
pub fn search(bytes: &[u8], birth: u64) -> Result<Option<Vec<CellId>>, SearchError> {
    search_with_cfg(bytes, birth, DecodeCfg::default())
}

/// [`search`] with explicit decoder limits.
pub fn search_with_cfg(
    bytes: &[u8],
    birth: u64,
    cfg: DecodeCfg,
) -> Result<Option<Vec<CellId>>, SearchError> {
    let _span = tracing::debug_span!("search", birth).entered();
    let edges = decode_boundary_edges(bytes, birth, cfg)?;
    let birth = CellId(birth);
    let graph = CycleGraph::new(&edges, birth).ok_or(SearchError::NotAnEdge { birth })?;
    Ok(graph.search_shortest_loop())
}
