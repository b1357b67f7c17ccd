//! Optimal one-cycle through a birth edge.
//!
//! Purpose
//! - Given the 1-cells decoded from a boundary-map chunk and the edge whose
//!   addition created a 1-dimensional class, find the shortest loop (by edge
//!   count) that closes through that edge.
//!
//! Notes
//! - Plain BFS from the birth edge's `begin` to its `end` with the birth edge
//!   itself removed from the graph. First arrival at a vertex is final.
//! - No loop is an ordinary outcome (`None`), not an error.

mod graph;

pub use graph::CycleGraph;

#[cfg(test)]
mod tests;
