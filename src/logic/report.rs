//! Division report: elimination status of every team.

use crate::logic::elimination::team_status;
use crate::models::{DivisionReport, EliminationError, Standings, TeamStatus};
use chrono::Utc;
use rayon::prelude::*;

/// Evaluate every team. Queries share nothing but the read-only table, so they run in parallel;
/// the result keeps table order.
pub fn division_report(standings: &Standings) -> Result<DivisionReport, EliminationError> {
    let teams: Vec<TeamStatus> = standings
        .team_ids()
        .into_par_iter()
        .map(|id| team_status(standings, id))
        .collect::<Result<_, _>>()?;
    let leader = standings
        .leader()
        .map(|id| standings.name(id).map(str::to_string))
        .transpose()?;
    Ok(DivisionReport {
        generated_at: Utc::now(),
        leader,
        teams,
    })
}

/// One line per team: `X is eliminated by the subset R = { A B }` or `X is not eliminated`.
pub fn format_report(report: &DivisionReport) -> String {
    let mut out = String::new();
    for status in &report.teams {
        match &status.certificate {
            Some(subset) if status.eliminated => {
                out.push_str(&format!(
                    "{} is eliminated by the subset R = {{ {} }}\n",
                    status.team,
                    subset.join(" ")
                ));
            }
            _ => out.push_str(&format!("{} is not eliminated\n", status.team)),
        }
    }
    out
}
