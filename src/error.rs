use cancel_this::Cancelled;

/// Error type shared by model construction, k-mer coding and solving.
#[derive(Debug)]
pub enum DecyclingError {
    /// A k-mer contains a character that is not a digit of the alphabet.
    InvalidSymbol {
        symbol: char,
        position: usize,
        base: usize,
    },
    /// A k-mer does not have exactly `k` characters.
    LengthMismatch { expected: usize, found: usize },
    /// Graph or model parameters are out of the supported range.
    InvalidParameters(String),
    /// A partition vector does not assign a class to every vertex.
    PartitionSizeMismatch { expected: usize, found: usize },
    /// Partition classes overlap or do not cover the vertex set.
    MalformedPartition(String),
    /// The solver proved that no decycling set satisfies the bound.
    InfeasibleModel,
    /// The oracle and the model disagree about a candidate solution.
    OracleInconsistency(String),
    /// Any other failure reported by the solver backend.
    Solver(String),
    /// The solve was stopped before any candidate was accepted.
    Interrupted,
    /// The computation was cooperatively cancelled.
    Cancelled(Cancelled),
    /// Writing the output failed.
    Io(std::io::Error),
}

impl std::fmt::Display for DecyclingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecyclingError::InvalidSymbol {
                symbol,
                position,
                base,
            } => {
                write!(
                    f,
                    "Symbol `{}` at position {} is not a base-{} digit",
                    symbol, position, base
                )
            }
            DecyclingError::LengthMismatch { expected, found } => {
                write!(f, "Expected a k-mer of length {}, found {}", expected, found)
            }
            DecyclingError::InvalidParameters(msg) => write!(f, "Invalid parameters: {}", msg),
            DecyclingError::PartitionSizeMismatch { expected, found } => {
                write!(
                    f,
                    "Partition assigns {} vertices, but the graph has {}",
                    found, expected
                )
            }
            DecyclingError::MalformedPartition(msg) => write!(f, "Malformed partition: {}", msg),
            DecyclingError::InfeasibleModel => {
                write!(f, "No decycling set satisfies the requested path bound")
            }
            DecyclingError::OracleInconsistency(msg) => write!(f, "Oracle inconsistency: {}", msg),
            DecyclingError::Solver(msg) => write!(f, "Solver error: {}", msg),
            DecyclingError::Interrupted => {
                write!(f, "Solver stopped before any candidate was accepted")
            }
            DecyclingError::Cancelled(cancelled) => write!(f, "{}", cancelled),
            DecyclingError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for DecyclingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecyclingError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Cancelled> for DecyclingError {
    fn from(value: Cancelled) -> Self {
        DecyclingError::Cancelled(value)
    }
}

impl From<std::io::Error> for DecyclingError {
    fn from(value: std::io::Error) -> Self {
        DecyclingError::Io(value)
    }
}
