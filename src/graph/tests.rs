use crate::error::DecyclingError;
use crate::graph::{DeBruijnGraph, InducedSubgraph, remaining_path_length};
use crate::test_utils::{init_logger, mk_blocked};

const SHAPES: &[(usize, usize)] = &[(2, 1), (2, 3), (2, 5), (3, 2), (3, 3), (4, 2), (5, 1)];

#[test]
fn test_encode_decode_round_trip() {
    init_logger();
    for &(b, k) in SHAPES {
        let graph = DeBruijnGraph::new(b, k).unwrap();
        for v in graph.vertices() {
            let kmer = graph.encode(v);
            assert_eq!(kmer.chars().count(), k);
            assert!(kmer.chars().all(|c| c.to_digit(b as u32).is_some()));
            assert_eq!(graph.decode(&kmer).unwrap(), v);
        }
    }
}

#[test]
fn test_encode_most_significant_first() {
    let graph = DeBruijnGraph::new(3, 3).unwrap();
    assert_eq!(graph.encode(0), "000");
    assert_eq!(graph.encode(5), "012");
    assert_eq!(graph.encode(26), "222");
    assert_eq!(graph.digits(5), vec![0, 1, 2]);
    assert_eq!(graph.from_digits([0, 1, 2]), 5);
}

#[test]
fn test_decode_errors() {
    let graph = DeBruijnGraph::new(2, 3).unwrap();
    assert!(matches!(
        graph.decode("0120"),
        Err(DecyclingError::LengthMismatch {
            expected: 3,
            found: 4
        })
    ));
    assert!(matches!(
        graph.decode("021"),
        Err(DecyclingError::InvalidSymbol {
            symbol: '2',
            position: 1,
            ..
        })
    ));
    assert!(matches!(
        graph.decode("0x1"),
        Err(DecyclingError::InvalidSymbol { symbol: 'x', .. })
    ));
}

#[test]
fn test_invalid_parameters() {
    assert!(matches!(
        DeBruijnGraph::new(1, 3),
        Err(DecyclingError::InvalidParameters(_))
    ));
    assert!(matches!(
        DeBruijnGraph::new(2, 0),
        Err(DecyclingError::InvalidParameters(_))
    ));
    assert!(matches!(
        DeBruijnGraph::new(37, 2),
        Err(DecyclingError::InvalidParameters(_))
    ));
    assert!(matches!(
        DeBruijnGraph::new(2, 200),
        Err(DecyclingError::InvalidParameters(_))
    ));
}

#[test]
fn test_successors_and_predecessors_are_consistent() {
    for &(b, k) in SHAPES {
        let graph = DeBruijnGraph::new(b, k).unwrap();
        for x in graph.vertices() {
            let successors: Vec<_> = graph.successors(x).collect();
            let predecessors: Vec<_> = graph.predecessors(x).collect();
            assert_eq!(successors.len(), b);
            assert_eq!(predecessors.len(), b);
            for &y in &successors {
                assert!(y < graph.vertex_count());
                assert!(graph.predecessors(y).any(|it| it == x));
            }
            for &u in &predecessors {
                assert!(u < graph.vertex_count());
                assert!(graph.successors(u).any(|it| it == x));
            }
        }
    }
}

#[test]
fn test_neighbors_follow_kmer_shift() {
    let graph = DeBruijnGraph::new(3, 2).unwrap();
    let v = graph.decode("12").unwrap();
    let successors: Vec<_> = graph.successors(v).map(|it| graph.encode(it)).collect();
    assert_eq!(successors, vec!["20", "21", "22"]);
    let predecessors: Vec<_> = graph.predecessors(v).map(|it| graph.encode(it)).collect();
    assert_eq!(predecessors, vec!["01", "11", "21"]);
}

#[test]
fn test_rotations() {
    let graph = DeBruijnGraph::new(2, 3).unwrap();
    let v = graph.decode("011").unwrap();
    assert_eq!(graph.encode(graph.rotate(v)), "110");
    assert_eq!(graph.encode(graph.rotate_complement(v)), "111");
    assert!(graph.successors(v).any(|it| it == graph.rotate(v)));
}

#[test]
fn test_remaining_path_length() {
    init_logger();
    let graph = DeBruijnGraph::new(2, 2).unwrap();
    // Nothing blocked: self-loops remain.
    assert_eq!(remaining_path_length(&graph, &mk_blocked(&graph, &[])), None);
    // Blocking 00, 11 and 01 leaves the single vertex 10.
    assert_eq!(
        remaining_path_length(&graph, &mk_blocked(&graph, &[0, 1, 3])),
        Some(0)
    );
    // Blocking 00, 11 and 10 leaves 01 alone as well.
    assert_eq!(
        remaining_path_length(&graph, &mk_blocked(&graph, &[0, 2, 3])),
        Some(0)
    );
    // Everything blocked.
    assert_eq!(
        remaining_path_length(&graph, &mk_blocked(&graph, &[0, 1, 2, 3])),
        Some(0)
    );

    let graph = DeBruijnGraph::new(2, 3).unwrap();
    // Blocking 000, 111, 010, 101 leaves 001 -> 011 -> 110 -> 100 -> 001 cyclic.
    assert_eq!(
        remaining_path_length(&graph, &mk_blocked(&graph, &[0, 2, 5, 7])),
        None
    );
    // Blocking 000, 001, 101, 111 leaves 010 -> 100 and 011 -> 110 -> 100.
    assert_eq!(
        remaining_path_length(&graph, &mk_blocked(&graph, &[0, 1, 5, 7])),
        Some(2)
    );
}

#[test]
fn test_extract_cycles_and_longest_path() {
    init_logger();
    let graph = DeBruijnGraph::new(2, 3).unwrap();
    let blocked = mk_blocked(&graph, &[0, 2, 5, 7]);
    let induced = InducedSubgraph::new(&graph, &blocked);
    let peeling = induced.peel();
    assert!(!peeling.is_acyclic());
    assert_eq!(induced.longest_path(&peeling), None);

    let cycles = induced.extract_cycles(&peeling, 3).unwrap();
    assert_eq!(cycles, vec![vec![1, 3, 6, 4]]);
    for cycle in &cycles {
        for (i, v) in cycle.iter().enumerate() {
            let next = cycle[(i + 1) % cycle.len()];
            assert!(induced.successors(*v).any(|it| it == next));
        }
    }

    let blocked = mk_blocked(&graph, &[0, 1, 5, 7]);
    let induced = InducedSubgraph::new(&graph, &blocked);
    let peeling = induced.peel();
    assert!(peeling.is_acyclic());
    assert_eq!(induced.longest_path(&peeling).unwrap(), vec![3, 6, 4]);
}
