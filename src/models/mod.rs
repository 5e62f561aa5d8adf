//! Data structures for a division: standings, elimination outcomes, reports, errors.

mod elimination;
mod error;
mod standings;

pub use elimination::{DivisionReport, Elimination, TeamStatus};
pub use error::EliminationError;
pub use standings::{Standings, TeamId, TeamRecord};
