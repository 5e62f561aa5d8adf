//! Certificate check: a subset R eliminates t iff (w(R) + g(R)) / |R| > wins[t] + remaining[t].

use crate::models::{EliminationError, Standings, TeamId};

/// Does `subset` prove that `team` cannot finish first?
///
/// w(R) is the total wins in R, g(R) the games left between members of R. Compared as
/// `w(R) + g(R) > ceiling * |R|` so no division is needed. An empty subset proves nothing.
pub fn certificate_holds(standings: &Standings, team: TeamId, subset: &[TeamId]) -> Result<bool, EliminationError> {
    let ceiling = standings.record(team)?.max_wins();
    if subset.is_empty() {
        return Ok(false);
    }

    let mut total: u64 = 0;
    for (a, &i) in subset.iter().enumerate() {
        total += u64::from(standings.record(i)?.wins);
        for &j in &subset[a + 1..] {
            standings.record(j)?;
            total += u64::from(standings.games_between(i, j));
        }
    }
    Ok(total > ceiling * subset.len() as u64)
}
