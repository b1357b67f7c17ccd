//! Incidence graph over decoded 1-cells and the BFS loop search.

use std::collections::{HashMap, VecDeque};

use crate::chunk::EdgeTriple;
use crate::reduction::CellId;

/// Directed traversal of an edge: `from → to` along cell `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Step {
    from: u64,
    to: u64,
    id: CellId,
}

/// Undirected multigraph of 1-cells plus the distinguished birth edge.
///
/// Adjacency lists keep insertion (decode) order, which fixes tie-breaking
/// between equally short loops.
#[derive(Clone, Debug)]
pub struct CycleGraph {
    birth: CellId,
    begin: u64,
    end: u64,
    adj: HashMap<u64, Vec<Step>>,
}

impl CycleGraph {
    /// Split `edges` into the birth edge and the undirected adjacency of the rest.
    ///
    /// Returns `None` if no edge carries id `birth`.
    pub fn new(edges: &[EdgeTriple], birth: CellId) -> Option<Self> {
        let birth_edge = edges.iter().find(|e| e.edge_id == birth)?;
        let mut adj: HashMap<u64, Vec<Step>> = HashMap::new();
        for e in edges.iter().filter(|e| e.edge_id != birth) {
            adj.entry(e.begin).or_default().push(Step {
                from: e.begin,
                to: e.end,
                id: e.edge_id,
            });
            adj.entry(e.end).or_default().push(Step {
                from: e.end,
                to: e.begin,
                id: e.edge_id,
            });
        }
        Some(Self {
            birth,
            begin: birth_edge.begin,
            end: birth_edge.end,
            adj,
        })
    }

    pub fn birth(&self) -> CellId {
        self.birth
    }

    /// `(begin, end)` of the birth edge.
    pub fn birth_endpoints(&self) -> (u64, u64) {
        (self.begin, self.end)
    }

    /// Number of vertices touched by non-birth edges.
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Shortest loop (by edge count) through the birth edge.
    ///
    /// The loop starts with the birth edge (`end → begin`) followed by the
    /// path edges from `begin` back to `end`. `None` if `begin` and `end` are
    /// not connected without the birth edge.
    pub fn search_shortest_loop(&self) -> Option<Vec<CellId>> {
        let mut visited: HashMap<u64, Step> = HashMap::new();
        let mut queue = VecDeque::new();
        queue.push_back(Step {
            from: self.end,
            to: self.begin,
            id: self.birth,
        });
        while let Some(step) = queue.pop_front() {
            if visited.contains_key(&step.to) {
                continue;
            }
            visited.insert(step.to, step);
            if step.to == self.end {
                let path = self.reconstruct(&visited);
                tracing::debug!(birth = self.birth.0, len = path.len(), "loop found");
                return Some(path);
            }
            if let Some(out) = self.adj.get(&step.to) {
                queue.extend(out.iter().copied());
            }
        }
        tracing::debug!(birth = self.birth.0, visited = visited.len(), "no loop");
        None
    }

    /// Walk `visited` back from `end` until the seed closes the loop.
    fn reconstruct(&self, visited: &HashMap<u64, Step>) -> Vec<CellId> {
        let mut ids = Vec::new();
        let mut v = self.end;
        loop {
            let step = visited[&v];
            ids.push(step.id);
            v = step.from;
            if v == self.end {
                break;
            }
        }
        ids.reverse();
        ids
    }
}
