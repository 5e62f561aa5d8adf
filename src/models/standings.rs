//! TeamRecord and the read-only Standings table.

use crate::models::error::EliminationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Index of a team in the standings table (stable for the table's lifetime).
pub type TeamId = usize;

/// One row of the standings: current record plus games left against every team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub remaining: u32,
    /// Remaining games against each team, indexed by `TeamId`.
    pub against: Vec<u32>,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>, wins: u32, losses: u32, remaining: u32, against: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            wins,
            losses,
            remaining,
            against,
        }
    }

    /// Most wins this team can finish with (widened, so `u32::MAX` records cannot overflow).
    pub fn max_wins(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.remaining)
    }
}

/// Division standings. Built once, read-only afterwards.
///
/// Serializes as the plain list of team records; deserializing re-validates the table.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<TeamRecord>", into = "Vec<TeamRecord>")]
pub struct Standings {
    teams: Vec<TeamRecord>,
    /// Name -> id lookup.
    index: HashMap<String, TeamId>,
    /// First team (in table order) with the most current wins. None for an empty table.
    leader: Option<TeamId>,
}

impl Standings {
    /// Build a table from team records, checking row lengths, symmetry, the diagonal and names.
    pub fn new(teams: Vec<TeamRecord>) -> Result<Self, EliminationError> {
        let n = teams.len();
        let mut index = HashMap::with_capacity(n);
        for (id, team) in teams.iter().enumerate() {
            if team.name.trim().is_empty() {
                return Err(EliminationError::InvalidStandings(format!("team #{} has an empty name", id)));
            }
            if index.insert(team.name.clone(), id).is_some() {
                return Err(EliminationError::InvalidStandings(format!(
                    "duplicate team name {}",
                    team.name
                )));
            }
            if team.against.len() != n {
                return Err(EliminationError::InvalidStandings(format!(
                    "{} lists {} opponents, expected {}",
                    team.name,
                    team.against.len(),
                    n
                )));
            }
        }
        for i in 0..n {
            if teams[i].against[i] != 0 {
                return Err(EliminationError::InvalidStandings(format!(
                    "{} has {} games left against itself",
                    teams[i].name, teams[i].against[i]
                )));
            }
            for j in (i + 1)..n {
                if teams[i].against[j] != teams[j].against[i] {
                    return Err(EliminationError::InvalidStandings(format!(
                        "{} vs {} is {} but {} vs {} is {}",
                        teams[i].name,
                        teams[j].name,
                        teams[i].against[j],
                        teams[j].name,
                        teams[i].name,
                        teams[j].against[i]
                    )));
                }
            }
        }

        let mut leader: Option<TeamId> = None;
        for (id, team) in teams.iter().enumerate() {
            if leader.map_or(true, |l| team.wins > teams[l].wins) {
                leader = Some(id);
            }
        }

        Ok(Self { teams, index, leader })
    }

    pub fn number_of_teams(&self) -> usize {
        self.teams.len()
    }

    /// Team names in table order.
    pub fn teams(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.iter().map(|t| t.name.as_str())
    }

    /// All ids, `0..number_of_teams()`.
    pub fn team_ids(&self) -> std::ops::Range<TeamId> {
        0..self.teams.len()
    }

    pub fn records(&self) -> &[TeamRecord] {
        &self.teams
    }

    /// Look up a team id by name.
    pub fn team_id(&self, name: &str) -> Result<TeamId, EliminationError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| EliminationError::UnknownTeam(name.to_string()))
    }

    /// Record for a team id.
    pub fn record(&self, id: TeamId) -> Result<&TeamRecord, EliminationError> {
        self.teams
            .get(id)
            .ok_or_else(|| EliminationError::UnknownTeam(format!("#{}", id)))
    }

    /// Name for a team id.
    pub fn name(&self, id: TeamId) -> Result<&str, EliminationError> {
        self.record(id).map(|t| t.name.as_str())
    }

    pub fn wins(&self, team: &str) -> Result<u32, EliminationError> {
        Ok(self.record(self.team_id(team)?)?.wins)
    }

    pub fn losses(&self, team: &str) -> Result<u32, EliminationError> {
        Ok(self.record(self.team_id(team)?)?.losses)
    }

    /// Number of remaining games for the given team.
    pub fn remaining(&self, team: &str) -> Result<u32, EliminationError> {
        Ok(self.record(self.team_id(team)?)?.remaining)
    }

    /// Number of remaining games between two teams.
    pub fn against(&self, team_1: &str, team_2: &str) -> Result<u32, EliminationError> {
        let i = self.team_id(team_1)?;
        let j = self.team_id(team_2)?;
        Ok(self.games_between(i, j))
    }

    /// Remaining games between two ids.
    ///
    /// Both ids must be in range: they come from `team_id`, `team_ids` or a checked `record`,
    /// and `new` guarantees every row has `number_of_teams()` entries.
    pub(crate) fn games_between(&self, i: TeamId, j: TeamId) -> u32 {
        self.teams[i].against[j]
    }

    /// League leader: first team with the most current wins.
    pub fn leader(&self) -> Option<TeamId> {
        self.leader
    }

    /// Current win count of the league leader (0 for an empty table).
    pub fn max_wins(&self) -> u32 {
        self.leader.map_or(0, |l| self.teams[l].wins)
    }
}

impl TryFrom<Vec<TeamRecord>> for Standings {
    type Error = EliminationError;

    fn try_from(teams: Vec<TeamRecord>) -> Result<Self, Self::Error> {
        Standings::new(teams)
    }
}

impl From<Standings> for Vec<TeamRecord> {
    fn from(standings: Standings) -> Self {
        standings.teams
    }
}
