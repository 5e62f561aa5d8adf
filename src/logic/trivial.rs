//! Trivial elimination: some team already has more wins than the target can reach.

use crate::models::{EliminationError, Standings, TeamId};

/// True iff some other team's current wins exceed `team`'s maximum possible wins.
pub fn is_trivially_eliminated(standings: &Standings, team: TeamId) -> Result<bool, EliminationError> {
    Ok(trivial_witness(standings, team)?.is_some())
}

/// The league leader, if its wins alone eliminate `team`.
///
/// If any team is out of reach, the leader (most current wins) is too, so it is always a valid
/// single-team certificate.
pub fn trivial_witness(standings: &Standings, team: TeamId) -> Result<Option<TeamId>, EliminationError> {
    let cap = standings.record(team)?.max_wins();
    let out_of_reach = standings
        .records()
        .iter()
        .enumerate()
        .any(|(i, other)| i != team && cap < u64::from(other.wins));
    if !out_of_reach {
        return Ok(None);
    }
    Ok(standings.leader())
}
