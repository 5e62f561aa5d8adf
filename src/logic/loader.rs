//! Division loading: whitespace text, CSV and JSON standings.
//!
//! Text layout: team count, then per team `name wins losses remaining g_0 .. g_{n-1}`.
//! Line breaks are not significant, but errors report the line of the offending token.

use crate::models::{EliminationError, Standings, TeamRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Input format of a division.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl DivisionFormat {
    /// Pick a format from a file extension (`.csv`, `.json`, anything else is text).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => DivisionFormat::Csv,
            Some(ext) if ext.eq_ignore_ascii_case("json") => DivisionFormat::Json,
            _ => DivisionFormat::Text,
        }
    }
}

/// Parse division contents in the given format.
pub fn parse_division_as(input: &str, format: DivisionFormat) -> Result<Standings, EliminationError> {
    match format {
        DivisionFormat::Text => parse_division(input),
        DivisionFormat::Csv => parse_division_csv(input),
        DivisionFormat::Json => parse_division_json(input),
    }
}

/// Read a division file; the format follows the file extension.
pub fn load_division(path: impl AsRef<Path>) -> Result<Standings, EliminationError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| EliminationError::Io(format!("{}: {}", path.display(), e)))?;
    let standings = parse_division_as(&contents, DivisionFormat::from_path(path))?;
    log::info!(
        "Loaded {} teams from {}",
        standings.number_of_teams(),
        path.display()
    );
    Ok(standings)
}

/// Tokens with their 1-based line numbers.
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        let inner = input
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));
        Self {
            inner: Box::new(inner),
            last_line: 1,
        }
    }

    fn next_token(&mut self, what: &str) -> Result<(usize, &'a str), EliminationError> {
        match self.inner.next() {
            Some((line, tok)) => {
                self.last_line = line;
                Ok((line, tok))
            }
            None => Err(EliminationError::Parse {
                line: self.last_line,
                message: format!("unexpected end of input, expected {}", what),
            }),
        }
    }

    fn number(&mut self, what: &str) -> Result<u32, EliminationError> {
        let (line, tok) = self.next_token(what)?;
        tok.parse::<u32>().map_err(|_| EliminationError::Parse {
            line,
            message: format!("expected {} (non-negative integer), found {:?}", what, tok),
        })
    }
}

/// Parse the whitespace text format.
pub fn parse_division(input: &str) -> Result<Standings, EliminationError> {
    let mut tokens = Tokens::new(input);
    let n = tokens.number("team count")? as usize;
    // each team needs a name, three counts and a row of n games
    let needed = n.checked_add(4).and_then(|row| row.checked_mul(n));
    let available = input.split_whitespace().count().saturating_sub(1);
    if needed.map_or(true, |needed| needed > available) {
        return Err(EliminationError::Parse {
            line: 1,
            message: format!(
                "team count {} needs more values than the {} present",
                n, available
            ),
        });
    }
    let mut teams = Vec::with_capacity(n);
    for _ in 0..n {
        let (_, name) = tokens.next_token("team name")?;
        let wins = tokens.number("wins")?;
        let losses = tokens.number("losses")?;
        let remaining = tokens.number("remaining")?;
        let against = (0..n)
            .map(|_| tokens.number("games against"))
            .collect::<Result<Vec<_>, _>>()?;
        teams.push(TeamRecord::new(name, wins, losses, remaining, against));
    }
    if let Some((line, tok)) = tokens.inner.next() {
        return Err(EliminationError::Parse {
            line,
            message: format!("trailing input after {} teams: {:?}", n, tok),
        });
    }
    Standings::new(teams)
}

/// Parse CSV: `name,wins,losses,remaining,g_0,..` per row; a first row starting with `team` is a header.
pub fn parse_division_csv(input: &str) -> Result<Standings, EliminationError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input.as_bytes());

    let mut teams = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let line = row + 1;
        let record = result.map_err(|e| EliminationError::Parse {
            line,
            message: e.to_string(),
        })?;
        let Some(name) = record.get(0) else {
            continue;
        };
        if row == 0 && name.eq_ignore_ascii_case("team") {
            continue;
        }
        if record.len() < 4 {
            return Err(EliminationError::Parse {
                line,
                message: format!("expected at least 4 columns, found {}", record.len()),
            });
        }
        let field = |idx: usize, what: &str| -> Result<u32, EliminationError> {
            let raw = record.get(idx).unwrap_or_default();
            raw.parse::<u32>().map_err(|_| EliminationError::Parse {
                line,
                message: format!("expected {} (non-negative integer), found {:?}", what, raw),
            })
        };
        let wins = field(1, "wins")?;
        let losses = field(2, "losses")?;
        let remaining = field(3, "remaining")?;
        let against = (4..record.len())
            .map(|idx| field(idx, "games against"))
            .collect::<Result<Vec<_>, _>>()?;
        teams.push(TeamRecord::new(name, wins, losses, remaining, against));
    }
    Standings::new(teams)
}

/// Parse a JSON array of team records.
pub fn parse_division_json(input: &str) -> Result<Standings, EliminationError> {
    let teams: Vec<TeamRecord> = serde_json::from_str(input).map_err(|e| EliminationError::Parse {
        line: e.line(),
        message: e.to_string(),
    })?;
    Standings::new(teams)
}
