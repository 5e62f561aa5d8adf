//! Elimination logic: trivial check, network building, max flow, certificates, loading, reports.

mod certificate;
mod elimination;
mod loader;
pub mod max_flow;
pub mod network;
mod report;
mod trivial;

pub use certificate::certificate_holds;
pub use elimination::{analyze, analyze_team, certificate_of_elimination, is_eliminated, team_status};
pub use loader::{
    load_division, parse_division, parse_division_as, parse_division_csv, parse_division_json,
    DivisionFormat,
};
pub use report::{division_report, format_report};
pub use trivial::{is_trivially_eliminated, trivial_witness};
