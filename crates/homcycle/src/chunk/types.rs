//! Decoded edges, decoder configuration, and decode errors.

use std::fmt;

use crate::reduction::CellId;

/// Boundary of a 1-cell: `edge_id` joins vertex `begin` to vertex `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeTriple {
    pub edge_id: CellId,
    pub begin: u64,
    pub end: u64,
}

/// Decoder configuration.
#[derive(Clone, Copy, Debug)]
pub struct DecodeCfg {
    /// Largest cell array length accepted from the chunk header.
    pub max_cells: u64,
}

impl Default for DecodeCfg {
    fn default() -> Self {
        Self {
            max_cells: u64::from(u32::MAX),
        }
    }
}

/// Malformed or incomplete boundary-map chunk. Offsets are byte positions of
/// the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    UnexpectedEof { offset: usize },
    /// 0xc1 is never used by MessagePack.
    ReservedMarker { offset: usize },
    UnexpectedType {
        offset: usize,
        expected: &'static str,
        context: &'static str,
    },
    NegativeInteger { offset: usize },
    /// A cell entry must be `[dimension, boundary, sign]`.
    CellArity { cell: u64, len: u64 },
    /// A 1-cell boundary must be `[begin, end]`.
    BoundaryArity { cell: u64, len: u64 },
    TooManyCells { len: u64, max: u64 },
    /// No top-level `"map"` entry.
    MissingMap,
    /// The cell array ended before reaching the requested cell.
    Incomplete { cells: u64, needed: u64 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof { offset } => write!(f, "unexpected end of input at byte {offset}"),
            Self::ReservedMarker { offset } => write!(f, "reserved marker 0xc1 at byte {offset}"),
            Self::UnexpectedType {
                offset,
                expected,
                context,
            } => write!(f, "expected {expected} for {context} at byte {offset}"),
            Self::NegativeInteger { offset } => {
                write!(f, "negative integer where an index is required at byte {offset}")
            }
            Self::CellArity { cell, len } => {
                write!(f, "cell {cell} has {len} fields, expected 3")
            }
            Self::BoundaryArity { cell, len } => {
                write!(f, "1-cell {cell} has {len} boundary vertices, expected 2")
            }
            Self::TooManyCells { len, max } => {
                write!(f, "cell array of length {len} exceeds limit {max}")
            }
            Self::MissingMap => write!(f, "no boundary map in chunk"),
            Self::Incomplete { cells, needed } => {
                write!(f, "boundary map has {cells} cells, need at least {needed}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
