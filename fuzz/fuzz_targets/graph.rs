#![no_main]

use adjgraph::{Distance, Graph, VertexId};
use libfuzzer_sys::fuzz_target;

// First byte sizes the graph, every following triple is (from, to, weight). Endpoints may be
// out of range and weights negative, so both rejection paths are exercised too.
fuzz_target!(|data: &[u8]| {
    let Some((&size, rest)) = data.split_first() else {
        return;
    };
    let vertex_count = usize::from(size % 64);
    let mut graph = Graph::new(vertex_count);

    for chunk in rest.chunks_exact(3) {
        let before = graph.clone();
        let weight = i64::from(chunk[2] as i8);
        if graph
            .add_edge(usize::from(chunk[0] % 72), usize::from(chunk[1] % 72), weight)
            .is_err()
        {
            assert_eq!(graph, before);
        }
    }

    let dfs = graph.depth_first_search();
    let bfs = graph.breadth_first_search();
    assert_eq!(dfs.order().len(), vertex_count);
    assert_eq!(bfs.order().len(), vertex_count);

    let labeling = graph.topological_labeling();
    assert!(labeling.order().len() <= vertex_count);

    if vertex_count > 0 {
        let paths = graph.shortest_paths(VertexId::new(0)).unwrap();
        for vertex in graph.vertex_ids() {
            if let Some(path) = paths.path_to(vertex) {
                assert_eq!(path.first(), Some(&VertexId::new(0)));
                assert!(paths.distance(vertex).is_some_and(Distance::is_finite));
            }
        }
    }
});
