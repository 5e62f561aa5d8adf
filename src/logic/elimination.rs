//! Elimination decision and certificate extraction.

use crate::logic::certificate::certificate_holds;
use crate::logic::max_flow::solve;
use crate::logic::network::build;
use crate::logic::trivial::trivial_witness;
use crate::models::{Elimination, EliminationError, Standings, TeamId, TeamStatus};

/// Decide whether `team` can still finish first, and if not, why.
///
/// 1. Trivial check: if the leader is already out of reach, stop there.
/// 2. Build the candidate network and run max flow.
/// 3. Every game placed (source edges saturated) means alive; otherwise the candidate team
///    vertices on the source side of the min cut are the certificate.
pub fn analyze_team(standings: &Standings, team: TeamId) -> Result<Elimination, EliminationError> {
    if let Some(by) = trivial_witness(standings, team)? {
        log::debug!(
            "{} trivially eliminated by {}",
            standings.name(team)?,
            standings.name(by)?
        );
        return Ok(Elimination::Trivial { by });
    }

    let mut network = build(standings, team)?;
    let (source, sink) = (network.source(), network.sink());
    let solution = solve(&mut network.graph, source, sink)?;
    log::debug!(
        "{}: ceiling {}, {} candidates, flow {}/{}",
        standings.name(team)?,
        network.win_ceiling,
        network.team_vertices.len(),
        solution.max_flow,
        network.game_capacity
    );

    if !network.has_unplayed_games() {
        return Ok(Elimination::Alive);
    }

    let certificate: Vec<TeamId> = network
        .team_vertices
        .iter()
        .filter(|&&(_, vertex)| solution.in_cut(vertex))
        .map(|&(id, _)| id)
        .collect();
    if !certificate_holds(standings, team, &certificate)? {
        log::error!(
            "min cut for {} does not certify elimination: {:?}",
            standings.name(team)?,
            certificate
        );
        return Err(EliminationError::MalformedNetwork(format!(
            "min cut for team #{} is not a valid certificate",
            team
        )));
    }

    Ok(Elimination::Flow {
        certificate,
        max_flow: solution.max_flow,
        game_capacity: network.game_capacity,
    })
}

/// Same as [`analyze_team`], by name.
pub fn analyze(standings: &Standings, team: &str) -> Result<Elimination, EliminationError> {
    analyze_team(standings, standings.team_id(team)?)
}

/// Is the given team mathematically eliminated from first place?
pub fn is_eliminated(standings: &Standings, team: &str) -> Result<bool, EliminationError> {
    Ok(analyze(standings, team)?.is_eliminated())
}

/// Subset of teams that eliminates the given team (table order); None if not eliminated.
pub fn certificate_of_elimination(
    standings: &Standings,
    team: &str,
) -> Result<Option<Vec<String>>, EliminationError> {
    analyze(standings, team)?
        .certificate()
        .map(|ids| names_of(standings, &ids))
        .transpose()
}

/// Full status of one team (for reports / API responses).
pub fn team_status(standings: &Standings, team: TeamId) -> Result<TeamStatus, EliminationError> {
    let record = standings.record(team)?;
    let outcome = analyze_team(standings, team)?;
    let certificate = outcome
        .certificate()
        .map(|ids| names_of(standings, &ids))
        .transpose()?;
    Ok(TeamStatus {
        team: record.name.clone(),
        wins: record.wins,
        losses: record.losses,
        remaining: record.remaining,
        max_wins: record.max_wins(),
        eliminated: outcome.is_eliminated(),
        trivial: matches!(outcome, Elimination::Trivial { .. }),
        certificate,
    })
}

fn names_of(standings: &Standings, ids: &[TeamId]) -> Result<Vec<String>, EliminationError> {
    ids.iter()
        .map(|&id| standings.name(id).map(str::to_string))
        .collect()
}
