//! Integer persistent-homology reduction and optimal one-cycle search.
//!
//! Two independent paths share only the cell id space:
//! - `reduction`: sparse integer boundary matrix with the twist reduction,
//!   reporting a torsion witness when a pivot is not a unit.
//! - `chunk` + `cycle`: a streaming decoder for MessagePack boundary-map
//!   chunks feeding a BFS that extracts the shortest loop through a birth edge.
//!
//! API Policy
//! - The stable entry points live in `api`; module internals may change.
//! - Bindings (`crates/homcycle-py`) and the CLI are thin adapters over `api`.

pub mod api;
pub mod chunk;
pub mod cycle;
pub mod reduction;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use reduction::{BoundaryMatrix, CellId, Obstruction, ReduceCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{search, search_with_cfg, SearchError};
    pub use crate::chunk::{
        decode_boundary_edges, BoundaryMapWriter, DecodeCfg, DecodeError, EdgeTriple,
    };
    pub use crate::cycle::CycleGraph;
    pub use crate::reduction::{
        BoundaryMatrix, CellId, MatrixError, Obstruction, PersistencePair, ReduceCfg, SparseColumn,
    };
}
