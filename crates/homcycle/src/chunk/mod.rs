//! Boundary-map chunks: MessagePack wire format, streaming decoder, writer.
//!
//! Wire format
//! - Root map; only the value under key `"map"` is read, other entries are skipped.
//! - `"map"` holds one `[dimension, boundary, sign]` array per cell in birth order.
//! - For `dimension == 1` the boundary is exactly `[begin_vertex, end_vertex]`.
//!
//! The decoder stops as soon as the requested cell was read, so chunks may be
//! longer than needed. It never builds a value tree; skipped subtrees cost a
//! counter, not stack frames.

mod decoder;
mod lexer;
mod types;
mod writer;

pub use decoder::{decode_boundary_edges, StreamDecoder};
pub use types::{DecodeCfg, DecodeError, EdgeTriple};
pub use writer::BoundaryMapWriter;
