use super::*;
use crate::chunk::EdgeTriple;
use crate::reduction::CellId;

fn edges(list: &[(u64, u64, u64)]) -> Vec<EdgeTriple> {
    list.iter()
        .map(|&(id, begin, end)| EdgeTriple {
            edge_id: CellId(id),
            begin,
            end,
        })
        .collect()
}

fn ids(list: &[u64]) -> Vec<CellId> {
    list.iter().copied().map(CellId).collect()
}

#[test]
fn square_loop_closes_through_birth_edge() {
    let es = edges(&[(4, 0, 1), (5, 1, 2), (6, 2, 3), (7, 3, 0)]);
    let g = CycleGraph::new(&es, CellId(7)).unwrap();
    assert_eq!(g.birth_endpoints(), (3, 0));
    assert_eq!(g.num_vertices(), 4);
    assert_eq!(g.search_shortest_loop(), Some(ids(&[7, 6, 5, 4])));
}

#[test]
fn picks_shorter_of_two_loops() {
    // Birth edge 10: 0-1. Long way 0-2-3-1, short way 0-4-1.
    let es = edges(&[
        (5, 0, 2),
        (6, 2, 3),
        (7, 3, 1),
        (8, 0, 4),
        (9, 4, 1),
        (10, 0, 1),
    ]);
    let g = CycleGraph::new(&es, CellId(10)).unwrap();
    assert_eq!(g.search_shortest_loop(), Some(ids(&[10, 8, 9])));
}

#[test]
fn ties_follow_decode_order() {
    // Two 3-loops through birth edge 9 (0-1): via vertex 2 (edges 6, 5) and
    // via vertex 3 (edges 8, 7). Vertex 0 lists edge 6 before edge 8.
    let es = edges(&[(5, 1, 2), (6, 2, 0), (7, 1, 3), (8, 3, 0), (9, 0, 1)]);
    let g = CycleGraph::new(&es, CellId(9)).unwrap();
    assert_eq!(g.search_shortest_loop(), Some(ids(&[9, 6, 5])));
}

#[test]
fn disconnected_endpoints_have_no_loop() {
    let es = edges(&[(3, 0, 1), (4, 1, 2), (5, 2, 3)]);
    let g = CycleGraph::new(&es, CellId(5)).unwrap();
    assert_eq!(g.search_shortest_loop(), None);
}

#[test]
fn parallel_edge_forms_two_edge_loop() {
    let es = edges(&[(2, 0, 1), (3, 1, 0)]);
    let g = CycleGraph::new(&es, CellId(3)).unwrap();
    assert_eq!(g.search_shortest_loop(), Some(ids(&[3, 2])));
}

#[test]
fn self_loop_birth_edge_is_its_own_cycle() {
    let es = edges(&[(1, 0, 0)]);
    let g = CycleGraph::new(&es, CellId(1)).unwrap();
    assert_eq!(g.search_shortest_loop(), Some(ids(&[1])));
}

#[test]
fn missing_birth_edge_yields_no_graph() {
    let es = edges(&[(3, 0, 1)]);
    assert!(CycleGraph::new(&es, CellId(4)).is_none());
}
