use crate::decycling::{DecyclingConfig, DecyclingModel, DecyclingSolution, PartitionSource};
use crate::error::DecyclingError;
use crate::graph::DeBruijnGraph;
use crate::model::SolveStatus;
use crate::oracle::OracleStats;
use crate::solver::GoodLpSolver;
use crate::symmetry::Complementer;
use crate::test_utils::{brute_force_minimum, init_logger};

fn solve(config: DecyclingConfig) -> DecyclingSolution {
    let model = DecyclingModel::build(config).unwrap();
    model.solve(&mut GoodLpSolver::default()).unwrap()
}

#[test]
fn test_minimum_matches_brute_force() {
    init_logger();
    for (b, k, bound) in [(2, 3, 2), (2, 2, 0), (2, 2, 1), (2, 3, 1), (2, 3, 4), (3, 2, 2)] {
        let graph = DeBruijnGraph::new(b, k).unwrap();
        let solution = solve(DecyclingConfig::new(b, k, bound));
        assert_eq!(solution.status, SolveStatus::Optimal);
        assert_eq!(
            solution.blocked.len(),
            brute_force_minimum(&graph, bound),
            "({}, {}, {})",
            b,
            k,
            bound
        );
        assert!(
            solution
                .longest_remaining_path
                .is_some_and(|length| length <= bound)
        );
        assert_eq!(solution.selected_classes, None);
        assert!(solution.oracle.accepted >= 1);
    }
}

#[test]
fn test_oracle_only_cycles() {
    init_logger();
    let graph = DeBruijnGraph::new(2, 3).unwrap();
    let config = DecyclingConfig::new(2, 3, 2).with_cycle_bound(0);
    let solution = solve(config);
    assert_eq!(solution.blocked.len(), brute_force_minimum(&graph, 2));
}

#[test]
fn test_reverse_complement_symmetry() {
    init_logger();
    let graph = DeBruijnGraph::new(2, 3).unwrap();
    let config = DecyclingConfig::new(2, 3, 2).with_partition(PartitionSource::ReverseComplement);
    let solution = solve(config);

    let complementer = Complementer::from(&graph);
    let mut mapped: Vec<usize> = solution
        .blocked
        .iter()
        .map(|v| complementer.reverse_complement(*v))
        .collect();
    mapped.sort();
    assert_eq!(mapped, solution.blocked);
    assert!(solution.blocked.len() >= brute_force_minimum(&graph, 2));
    assert!(solution.selected_classes.is_some_and(|it| it >= 1));
    assert!(solution.longest_remaining_path.is_some_and(|it| it <= 2));
}

#[test]
fn test_label_partition() {
    init_logger();
    // One class per vertex behaves like the unpartitioned model.
    let labels = (0..8).collect();
    let config = DecyclingConfig::new(2, 3, 2).with_partition(PartitionSource::Labels(labels));
    let solution = solve(config);
    let graph = DeBruijnGraph::new(2, 3).unwrap();
    assert_eq!(solution.blocked.len(), brute_force_minimum(&graph, 2));
    assert_eq!(solution.selected_classes, Some(solution.blocked.len()));
}

#[test]
fn test_partition_size_mismatch() {
    init_logger();
    let config =
        DecyclingConfig::new(2, 3, 2).with_partition(PartitionSource::Labels(vec![0, 1, 2]));
    let result = DecyclingModel::build(config);
    assert!(matches!(
        result,
        Err(DecyclingError::PartitionSizeMismatch {
            expected: 8,
            found: 3
        })
    ));
}

#[test]
fn test_malformed_classes() {
    init_logger();
    let classes = vec![vec![0, 1], vec![1, 2, 3]];
    let config = DecyclingConfig::new(2, 2, 1).with_partition(PartitionSource::Classes(classes));
    let result = DecyclingModel::build(config);
    assert!(matches!(result, Err(DecyclingError::MalformedPartition(_))));
}

#[test]
fn test_invalid_parameters() {
    init_logger();
    assert!(matches!(
        DecyclingModel::build(DecyclingConfig::new(1, 3, 2)),
        Err(DecyclingError::InvalidParameters(_))
    ));
    assert!(matches!(
        DecyclingConfig::from_length(2, 3, 0),
        Err(DecyclingError::InvalidParameters(_))
    ));
    assert_eq!(
        DecyclingConfig::from_length(2, 3, 3).unwrap(),
        DecyclingConfig::new(2, 3, 2)
    );
}

#[test]
fn test_model_structure() {
    init_logger();
    let model = DecyclingModel::build(DecyclingConfig::new(2, 3, 2)).unwrap();
    assert_eq!(model.ds().len(), 8);
    assert_eq!(model.circuit().horizon(), 3);
    // PCR classes {001, 010, 100} and {011, 110, 101} give three cyclic triples each.
    let sets = model.model().ordered_sets();
    assert_eq!(sets.len(), 6);
    let ds = model.ds();
    assert_eq!(sets[0].members, vec![ds[1], ds[2], ds[4]]);
    assert_eq!(sets[1].members, vec![ds[2], ds[4], ds[1]]);
    assert_eq!(sets[2].members, vec![ds[4], ds[1], ds[2]]);
    assert_eq!(sets[5].members, vec![ds[5], ds[3], ds[6]]);
    assert_eq!(model.model().objectives().len(), 1);
    assert!(model.partition().is_none());

    let config = DecyclingConfig::new(2, 3, 2).with_partition(PartitionSource::ReverseComplement);
    let model = DecyclingModel::build(config).unwrap();
    assert!(model.model().ordered_sets().is_empty());
    let objectives = model.model().objectives();
    assert_eq!(objectives.len(), 2);
    assert_eq!(objectives[0].name, "classes");
    assert_eq!(model.partition().map(|it| it.len()), Some(4));

    // Horizons never exceed the vertex count.
    let model = DecyclingModel::build(DecyclingConfig::new(2, 2, 100)).unwrap();
    assert_eq!(model.circuit().horizon(), 4);
}

#[test]
fn test_unbounded_paths() {
    init_logger();
    let config = DecyclingConfig::new(2, 3, usize::MAX).with_cycle_bound(usize::MAX);
    assert_eq!(config.cycle_bound(), usize::MAX);
    let model = DecyclingModel::build(DecyclingConfig::new(2, 3, usize::MAX)).unwrap();
    assert_eq!(model.circuit().horizon(), 8);

    // Without a path bound, the minimum is one vertex per PCR class.
    let solution = model.solve(&mut GoodLpSolver::default()).unwrap();
    assert_eq!(solution.blocked.len(), 4);
    assert!(solution.longest_remaining_path.is_some());
}

fn fixed_solution(blocked: Vec<usize>, longest: Option<usize>) -> DecyclingSolution {
    DecyclingSolution {
        graph: DeBruijnGraph::new(2, 3).unwrap(),
        blocked,
        selected_classes: None,
        status: SolveStatus::Optimal,
        oracle: OracleStats::default(),
        lazy_cuts: 0,
        longest_remaining_path: longest,
    }
}

#[test]
fn test_output_format() {
    init_logger();
    let solution = fixed_solution(vec![0, 1, 5, 7], Some(2));
    assert_eq!(solution.kmers(), vec!["000", "001", "101", "111"]);
    assert_eq!(solution.record_file_name(), "2-3-3.txt");

    let path = std::env::temp_dir().join(format!("decycling-output-{}.txt", std::process::id()));
    solution.write_kmers(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, "000\n001\n101\n111");

    // An empty remainder is recorded as a path of one vertex.
    let everything = fixed_solution((0..8).collect(), Some(0));
    assert_eq!(everything.record_file_name(), "2-3-1.txt");
}

#[test]
fn test_write_failure() {
    init_logger();
    let solution = fixed_solution(vec![0], None);
    let path = std::env::temp_dir()
        .join("decycling-missing-directory")
        .join("nested")
        .join("out.txt");
    assert!(matches!(
        solution.write_kmers(&path),
        Err(DecyclingError::Io(_))
    ));
}

#[test]
#[cfg(feature = "serde")]
fn test_config_and_solution_serialization() {
    init_logger();
    let config = DecyclingConfig::new(2, 3, 2)
        .with_partition(PartitionSource::Labels(vec![0, 1, 1, 2, 1, 2, 2, 3]))
        .with_cycle_bound(4);
    let json = serde_json::to_string(&config).unwrap();
    let parsed: DecyclingConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);

    let solution = fixed_solution(vec![0, 1, 5, 7], Some(2));
    let json = serde_json::to_string(&solution).unwrap();
    let parsed: DecyclingSolution = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, solution);
}
