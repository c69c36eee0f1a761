//! Win/loss record kept between sessions.
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use uno_engine::constants::HUMAN_PLAYER;
use uno_engine::player::PlayerId;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Missing `{0}` line")]
    MissingLine(&'static str),
    #[error("Malformed tally line `{0}`")]
    MalformedLine(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Stored as two lines, `Wins-<n>` and `Losses-<n>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
}

impl Tally {
    /// An empty save file is a fresh record.
    pub fn parse(text: &str) -> Result<Self, TallyError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut lines = text.lines().map(str::trim);
        let wins = parse_line(lines.next(), "Wins")?;
        let losses = parse_line(lines.next(), "Losses")?;

        Ok(Self { wins, losses })
    }

    pub fn load(path: &Path) -> Result<Self, TallyError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), TallyError> {
        fs::write(path, self.to_string())?;
        Ok(())
    }

    pub fn record(&mut self, winner: PlayerId) {
        if winner == HUMAN_PLAYER {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wins-{}\nLosses-{}", self.wins, self.losses)
    }
}

fn parse_line(line: Option<&str>, label: &'static str) -> Result<u32, TallyError> {
    let line = line.ok_or(TallyError::MissingLine(label))?;
    line.strip_prefix(label)
        .and_then(|rest| rest.strip_prefix('-'))
        .and_then(|count| count.parse().ok())
        .ok_or_else(|| TallyError::MalformedLine(line.to_string()))
}
