//! EliminationError: everything the standings table, loader and solver can fail with.

/// Errors that can occur while loading standings or answering elimination queries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EliminationError {
    /// Team name or id is not present in the standings table.
    UnknownTeam(String),
    /// Flow network violated a construction invariant (negative capacity, bad endpoint, broken duality).
    MalformedNetwork(String),
    /// Standings table violates a shape invariant (row length, symmetry, duplicate names).
    InvalidStandings(String),
    /// Division input could not be parsed.
    Parse { line: usize, message: String },
    /// Division file could not be read.
    Io(String),
}

impl std::fmt::Display for EliminationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EliminationError::UnknownTeam(team) => write!(f, "Unknown team: {}", team),
            EliminationError::MalformedNetwork(msg) => write!(f, "Malformed flow network: {}", msg),
            EliminationError::InvalidStandings(msg) => write!(f, "Invalid standings: {}", msg),
            EliminationError::Parse { line, message } => {
                write!(f, "Parse error on line {}: {}", line, message)
            }
            EliminationError::Io(msg) => write!(f, "Could not read division: {}", msg),
        }
    }
}

impl std::error::Error for EliminationError {}

impl From<std::io::Error> for EliminationError {
    fn from(e: std::io::Error) -> Self {
        EliminationError::Io(e.to_string())
    }
}
