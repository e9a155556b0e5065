use crate::graph::{DeBruijnGraph, Vertex, remaining_path_length};

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Creates a blocked mask from a list of vertices.
///
/// # Example
///
/// For a (2, 2) graph, `mk_blocked(graph, &[0, 3])` blocks `00` and `11`.
pub fn mk_blocked(graph: &DeBruijnGraph, vertices: &[Vertex]) -> Vec<bool> {
    let mut blocked = vec![false; graph.vertex_count()];
    for &v in vertices {
        assert!(
            v < graph.vertex_count(),
            "Vertex {} out of range for {} vertices",
            v,
            graph.vertex_count()
        );
        blocked[v] = true;
    }
    blocked
}

/// Size of the smallest blocked set that leaves no path longer than `bound` edges,
/// found by enumerating all subsets.
///
/// At the moment, this only supports up to 16 vertices.
pub fn brute_force_minimum(graph: &DeBruijnGraph, bound: usize) -> usize {
    let n = graph.vertex_count();
    assert!(n <= 16);
    let mut best = n;
    for subset in 0u32..(1u32 << n) {
        let size = subset.count_ones() as usize;
        if size >= best {
            continue;
        }
        let blocked: Vec<bool> = (0..n).map(|v| (subset >> v) & 1 == 1).collect();
        if remaining_path_length(graph, &blocked).is_some_and(|length| length <= bound) {
            best = size;
        }
    }
    best
}

/// Normalize a family of vertex classes: each class sorted, classes sorted by
/// their smallest element.
pub fn sorted_classes(classes: &[Vec<Vertex>]) -> Vec<Vec<Vertex>> {
    let mut result: Vec<Vec<Vertex>> = classes
        .iter()
        .map(|class| {
            let mut class = class.clone();
            class.sort();
            class
        })
        .collect();
    result.sort();
    result
}
