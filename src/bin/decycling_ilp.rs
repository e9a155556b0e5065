use clap::Parser;
use debruijn_decycling::construction::mykkeltveit_set;
use debruijn_decycling::decycling::{DecyclingConfig, DecyclingModel, PartitionSource};
use debruijn_decycling::graph::{DeBruijnGraph, remaining_path_length};
use debruijn_decycling::model::SolveStatus;
use debruijn_decycling::solver::{GoodLpSolver, SolverConfig};
use env_logger::Builder;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "decycling_ilp")]
#[command(about = "Compute a minimum decycling set of a De Bruijn graph with bounded remaining paths")]
struct Args {
    /// Alphabet size
    #[arg(value_name = "B")]
    base: usize,

    /// k-mer length
    #[arg(value_name = "K")]
    order: usize,

    /// Largest number of vertices allowed on a remaining path
    #[arg(value_name = "LENGTH")]
    length: usize,

    /// Block every k-mer together with its reverse complement
    #[arg(long)]
    sym: bool,

    /// Write the blocked k-mers to this file (one per line)
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Write the blocked k-mers to `{b}-{k}-{l}.txt`, where `l` is the longest remaining path
    #[arg(long)]
    record: bool,

    /// Also report the Mykkeltveit set of the graph
    #[arg(long)]
    mykkeltveit: bool,

    /// Exclude cycles with at most this many vertices up front (default: k + 2)
    #[arg(long, value_name = "N")]
    cycle_bound: Option<usize>,

    /// Stop re-solving after this many seconds
    #[arg(long, value_name = "SECS")]
    time_limit: Option<u64>,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let mut config = DecyclingConfig::from_length(args.base, args.order, args.length)
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });
    if args.sym {
        config = config.with_partition(PartitionSource::ReverseComplement);
    }
    if let Some(cycle_bound) = args.cycle_bound {
        config = config.with_cycle_bound(cycle_bound);
    }

    if args.mykkeltveit {
        let graph = DeBruijnGraph::new(args.base, args.order).unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });
        let set = mykkeltveit_set(&graph);
        let mut blocked = vec![false; graph.vertex_count()];
        for v in &set {
            blocked[*v] = true;
        }
        match remaining_path_length(&graph, &blocked) {
            Some(length) => println!(
                "Mykkeltveit set: {} vertices; longest remaining path: {} edges",
                set.len(),
                length
            ),
            None => println!("Mykkeltveit set: {} vertices; remaining graph is cyclic", set.len()),
        }
    }

    let model = DecyclingModel::build(config).unwrap_or_else(|e| {
        eprintln!("Failed to build the model: {}", e);
        std::process::exit(1);
    });

    let mut solver = GoodLpSolver::new(SolverConfig {
        time_limit: args.time_limit.map(Duration::from_secs),
        ..SolverConfig::default()
    });

    let solution = model.solve(&mut solver).unwrap_or_else(|e| {
        eprintln!("Solve failed: {}", e);
        std::process::exit(1);
    });

    println!("Selected vertices: {}", solution.blocked.len());
    if let Some(classes) = solution.selected_classes {
        println!("Selected partitions: {}", classes);
    }
    match solution.longest_remaining_path {
        Some(length) => println!("Longest remaining path: {} edges", length),
        None => println!("Remaining graph is cyclic"),
    }
    println!("Oracle: {}", solution.oracle);
    println!("Lazy cuts: {}", solution.lazy_cuts);
    match solution.status {
        SolveStatus::Optimal => println!("Status: optimal"),
        SolveStatus::Interrupted => println!("Status: interrupted (best known, not proven optimal)"),
    }

    let mut targets: Vec<PathBuf> = args.out.into_iter().collect();
    if args.record {
        targets.push(PathBuf::from(solution.record_file_name()));
    }
    for path in targets {
        if let Err(e) = solution.write_kmers(&path) {
            eprintln!("Failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!("Written to {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_value_options_accept_separate_values() {
        let args = Args::try_parse_from([
            "decycling_ilp",
            "2",
            "3",
            "3",
            "--out",
            "x.txt",
            "--cycle-bound",
            "4",
            "--time-limit",
            "10",
        ])
        .unwrap();
        assert_eq!(args.out, Some(PathBuf::from("x.txt")));
        assert_eq!(args.cycle_bound, Some(4));
        assert_eq!(args.time_limit, Some(10));
        assert!(args.verbose.is_none());
    }

    #[test]
    fn test_value_options_accept_equals() {
        let args =
            Args::try_parse_from(["decycling_ilp", "2", "3", "3", "--out=x.txt", "-v=debug"])
                .unwrap();
        assert_eq!(args.out, Some(PathBuf::from("x.txt")));
        assert!(matches!(args.verbose, Some(Some(super::LogLevel::Debug))));
    }

    #[test]
    fn test_verbose_without_level() {
        let args = Args::try_parse_from(["decycling_ilp", "2", "3", "3", "-v", "--sym"]).unwrap();
        assert!(matches!(args.verbose, Some(None)));
        assert!(args.sym);
    }
}
