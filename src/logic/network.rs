//! Build the per-team elimination network.
//!
//! Layout: 0 = source, 1 = sink, then one game vertex per candidate pair with games left,
//! then one team vertex per candidate. Candidates are the other teams that can still reach
//! the target's win ceiling; everyone else can absorb any number of losses and is pruned.

use crate::logic::max_flow::{EdgeId, Flow, FlowNetwork};
use crate::models::{EliminationError, Standings, TeamId};

pub const SOURCE: usize = 0;
pub const SINK: usize = 1;

/// Flow network for one target team, plus the mapping back to table ids.
#[derive(Clone, Debug)]
pub struct EliminationNetwork {
    pub target: TeamId,
    /// `wins + remaining` of the target.
    pub win_ceiling: u64,
    pub graph: FlowNetwork,
    /// (table id, team vertex) for every candidate, in table order.
    pub team_vertices: Vec<(TeamId, usize)>,
    /// Forward edges out of the source, one per game vertex.
    pub game_edges: Vec<EdgeId>,
    /// Sum of the source edge capacities.
    pub game_capacity: Flow,
}

impl EliminationNetwork {
    pub fn source(&self) -> usize {
        SOURCE
    }

    pub fn sink(&self) -> usize {
        SINK
    }

    /// Is some source edge left with residual capacity (i.e. not every game could be played out)?
    pub fn has_unplayed_games(&self) -> bool {
        self.game_edges.iter().any(|&e| self.graph.residual(e) > 0)
    }
}

/// Candidate teams for `target`: every other team that can still reach the target's ceiling.
pub fn candidates(standings: &Standings, target: TeamId) -> Result<Vec<TeamId>, EliminationError> {
    let ceiling = standings.record(target)?.max_wins();
    Ok(standings
        .records()
        .iter()
        .enumerate()
        .filter(|(i, team)| *i != target && team.max_wins() >= ceiling)
        .map(|(i, _)| i)
        .collect())
}

/// Build the network for `target`.
///
/// Fails with `MalformedNetwork` if a candidate already has more wins than the target can
/// reach; callers run the trivial check first.
pub fn build(standings: &Standings, target: TeamId) -> Result<EliminationNetwork, EliminationError> {
    let ceiling = standings.record(target)?.max_wins();
    let teams = candidates(standings, target)?;

    let mut pairs: Vec<(TeamId, TeamId, u32)> = Vec::new();
    for (a, &i) in teams.iter().enumerate() {
        for &j in &teams[a + 1..] {
            let games = standings.games_between(i, j);
            if games > 0 {
                pairs.push((i, j, games));
            }
        }
    }

    let first_game = SINK + 1;
    let first_team = first_game + pairs.len();
    let mut graph = FlowNetwork::with_vertices(first_team + teams.len());
    let team_vertices: Vec<(TeamId, usize)> = teams
        .iter()
        .enumerate()
        .map(|(k, &id)| (id, first_team + k))
        .collect();
    // pairs only hold candidates, so every lookup below hits a filled slot
    let mut team_vertex = vec![SOURCE; standings.number_of_teams()];
    for &(id, vertex) in &team_vertices {
        team_vertex[id] = vertex;
    }

    let game_capacity: Flow = pairs.iter().map(|&(_, _, g)| Flow::from(g)).sum();
    let unbounded = game_capacity + 1;

    let mut game_edges = Vec::with_capacity(pairs.len());
    for (k, &(i, j, games)) in pairs.iter().enumerate() {
        let game = first_game + k;
        game_edges.push(graph.add_edge(SOURCE, game, Flow::from(games))?);
        graph.add_edge(game, team_vertex[i], unbounded)?;
        graph.add_edge(game, team_vertex[j], unbounded)?;
    }
    let sink_ceiling = Flow::try_from(ceiling).map_err(|_| {
        EliminationError::MalformedNetwork(format!("win ceiling {} out of range", ceiling))
    })?;
    for &(id, vertex) in &team_vertices {
        let wins = standings.record(id)?.wins;
        graph.add_edge(vertex, SINK, sink_ceiling - Flow::from(wins))?;
    }

    Ok(EliminationNetwork {
        target,
        win_ceiling: ceiling,
        graph,
        team_vertices,
        game_edges,
        game_capacity,
    })
}
