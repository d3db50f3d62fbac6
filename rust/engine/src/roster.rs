//! Persisted player roster.
//!
//! One record per line, comma-separated: `name, age, balance, wins, losses`.
//! Ages and counters are integers, the balance is a decimal dollar amount.
//! The file is read once at session start and written back once at session
//! end with every untouched record preserved in its original position.

use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::currency::{format_amount, parse_amount, Cents};
use crate::errors::RosterError;
use crate::player::Player;

/// One persisted player record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub age: u32,
    pub balance: Cents,
    pub wins: u32,
    pub losses: u32,
}

impl RosterEntry {
    fn parse(line: &str, line_no: usize) -> Result<Self, RosterError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 5 {
            return Err(RosterError::Malformed {
                line: line_no,
                reason: format!("expected 5 comma-separated fields, found {}", fields.len()),
            });
        }
        let malformed = |reason: String| RosterError::Malformed {
            line: line_no,
            reason,
        };
        let age = fields[1]
            .parse()
            .map_err(|_| malformed(format!("age is not an integer: {:?}", fields[1])))?;
        let balance = parse_amount(fields[2])
            .ok_or_else(|| malformed(format!("balance is not a currency amount: {:?}", fields[2])))?;
        let wins = fields[3]
            .parse()
            .map_err(|_| malformed(format!("wins is not an integer: {:?}", fields[3])))?;
        let losses = fields[4]
            .parse()
            .map_err(|_| malformed(format!("losses is not an integer: {:?}", fields[4])))?;
        Ok(Self {
            name: fields[0].to_string(),
            age,
            balance,
            wins,
            losses,
        })
    }

    fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.name,
            self.age,
            format_amount(self.balance),
            self.wins,
            self.losses
        )
    }
}

/// The full roster, in file order.
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Loads the roster. A missing file and a malformed record are both
    /// fatal: the session must not start against a broken roster.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                RosterError::Missing(path.display().to_string())
            } else {
                RosterError::Io(e)
            }
        })?;
        let mut entries = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            entries.push(RosterEntry::parse(line, idx + 1)?);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Copies the active player's balance and win/loss counters onto the
    /// matching record (by name). Other records are untouched. Returns false
    /// when no record matches.
    pub fn update(&mut self, player: &Player) -> bool {
        match self.entries.iter_mut().find(|e| e.name == player.name()) {
            Some(entry) => {
                entry.balance = player.balance();
                entry.wins = player.wins();
                entry.losses = player.losses();
                true
            }
            None => false,
        }
    }

    /// Writes every record back, preserving order.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RosterError> {
        let file = fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        for entry in &self.entries {
            writeln!(writer, "{}", entry.to_line())?;
        }
        writer.flush()?;
        Ok(())
    }
}
