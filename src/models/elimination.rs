//! Elimination outcome and the per-team / per-division report views.

use crate::models::standings::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of an elimination query for one team.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Elimination {
    /// Team can still finish first.
    Alive,
    /// Some team already has more wins than this team can reach; `by` is the league leader.
    Trivial { by: TeamId },
    /// Proven by max flow: `certificate` is the source side of the min cut.
    Flow {
        certificate: Vec<TeamId>,
        max_flow: i64,
        game_capacity: i64,
    },
}

impl Elimination {
    pub fn is_eliminated(&self) -> bool {
        !matches!(self, Elimination::Alive)
    }

    /// Team ids that prove the elimination; None when the team is alive.
    pub fn certificate(&self) -> Option<Vec<TeamId>> {
        match self {
            Elimination::Alive => None,
            Elimination::Trivial { by } => Some(vec![*by]),
            Elimination::Flow { certificate, .. } => Some(certificate.clone()),
        }
    }
}

/// Status of one team (for API / display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamStatus {
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub remaining: u32,
    pub max_wins: u64,
    pub eliminated: bool,
    /// True when a single team's wins alone decide it.
    pub trivial: bool,
    /// Names of the teams in the certificate, in table order.
    pub certificate: Option<Vec<String>>,
}

/// Every team of a division, evaluated at `generated_at`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DivisionReport {
    pub generated_at: DateTime<Utc>,
    pub leader: Option<String>,
    pub teams: Vec<TeamStatus>,
}

impl DivisionReport {
    /// Names of eliminated teams, in table order.
    pub fn eliminated(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams
            .iter()
            .filter(|t| t.eliminated)
            .map(|t| t.team.as_str())
    }
}
