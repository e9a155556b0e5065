use crate::cycles::{BoundedCycleState, BoundedCycles, CycleConfig, cycle_constraints};
use crate::graph::{DeBruijnGraph, Vertex};
use crate::model::{LinearExpr, Model, Sense};
use crate::test_utils::{init_logger, mk_blocked};
use cancel_this::Cancellable;
use computation_process::Stateful;
use std::collections::BTreeSet;

fn enumerate(config: CycleConfig) -> Cancellable<Vec<Vec<Vertex>>> {
    let initial = BoundedCycleState::from(&config);
    BoundedCycles::configure(config, initial).collect()
}

/// All simple cycles with at most `bound` vertices, found by extending every simple path
/// that starts in its minimum vertex.
fn naive_cycles(graph: &DeBruijnGraph, bound: usize, blocked: &[bool]) -> BTreeSet<Vec<Vertex>> {
    fn extend(
        graph: &DeBruijnGraph,
        bound: usize,
        blocked: &[bool],
        path: &mut Vec<Vertex>,
        result: &mut BTreeSet<Vec<Vertex>>,
    ) {
        let last = path[path.len() - 1];
        for next in graph.successors(last) {
            if next == path[0] {
                result.insert(path.clone());
            } else if next > path[0] && !blocked[next] && !path.contains(&next) && path.len() < bound {
                path.push(next);
                extend(graph, bound, blocked, path, result);
                path.pop();
            }
        }
    }

    let mut result = BTreeSet::new();
    for start in graph.vertices().filter(|v| !blocked[*v]) {
        extend(graph, bound, blocked, &mut vec![start], &mut result);
    }
    result
}

#[test]
fn test_cycles_order_2() -> Cancellable<()> {
    init_logger();
    let graph = DeBruijnGraph::new(2, 2).unwrap();
    let cycles = enumerate(CycleConfig::new(graph, 2))?;
    assert_eq!(cycles, vec![vec![0], vec![1, 2], vec![3]]);

    let cycles = enumerate(CycleConfig::new(graph, 1))?;
    assert_eq!(cycles, vec![vec![0], vec![3]]);

    let cycles = enumerate(CycleConfig::new(graph, 0))?;
    assert!(cycles.is_empty());
    Ok(())
}

#[test]
fn test_cycle_constraints_order_2() -> Cancellable<()> {
    init_logger();
    let graph = DeBruijnGraph::new(2, 2).unwrap();
    let mut model = Model::new();
    let ds = model.add_binaries("DS", graph.vertex_count());

    let constraints = cycle_constraints(CycleConfig::new(graph, 2), &ds)
        .collect::<Cancellable<Vec<_>>>()?;

    let expected = vec![
        LinearExpr::sum([ds[0]]).at_least(1.0),
        LinearExpr::sum([ds[1], ds[2]]).at_least(1.0),
        LinearExpr::sum([ds[3]]).at_least(1.0),
    ];
    assert_eq!(constraints, expected);
    assert!(constraints.iter().all(|it| it.sense == Sense::AtLeast));
    Ok(())
}

#[test]
fn test_cycles_match_naive_enumeration() -> Cancellable<()> {
    init_logger();
    for &(b, k, bound) in &[(2, 3, 5), (2, 4, 6), (3, 2, 4), (2, 3, 8), (4, 1, 3)] {
        let graph = DeBruijnGraph::new(b, k).unwrap();
        let cycles = enumerate(CycleConfig::new(graph, bound))?;
        let unique: BTreeSet<Vec<Vertex>> = cycles.iter().cloned().collect();
        assert_eq!(unique.len(), cycles.len(), "A cycle was reported twice");
        let blocked = mk_blocked(&graph, &[]);
        assert_eq!(unique, naive_cycles(&graph, bound, &blocked));
        for cycle in &cycles {
            assert!(cycle.len() <= bound);
            assert_eq!(cycle.iter().min(), cycle.first());
        }
    }
    Ok(())
}

#[test]
fn test_cycles_of_restricted_graph() -> Cancellable<()> {
    init_logger();
    let graph = DeBruijnGraph::new(2, 3).unwrap();
    let blocked = mk_blocked(&graph, &[0, 2, 5, 7]);
    let cycles = enumerate(CycleConfig::new(graph, 8).restricted(blocked.clone()))?;
    assert_eq!(cycles, vec![vec![1, 3, 6, 4]]);
    assert_eq!(
        cycles.into_iter().collect::<BTreeSet<_>>(),
        naive_cycles(&graph, 8, &blocked)
    );
    Ok(())
}
