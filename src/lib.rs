//! Division elimination: library with standings models and max-flow elimination logic.

pub mod logic;
pub mod models;

pub use logic::{
    analyze, analyze_team, certificate_holds, certificate_of_elimination, division_report,
    format_report, is_eliminated, is_trivially_eliminated, load_division, parse_division,
    parse_division_as, parse_division_csv, parse_division_json, team_status, trivial_witness,
    DivisionFormat,
};
pub use models::{
    DivisionReport, Elimination, EliminationError, Standings, TeamId, TeamRecord, TeamStatus,
};
