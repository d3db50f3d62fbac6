//! Append-only session result log.
//!
//! Each completed session appends one human-readable block with the player's
//! name, ending balance, statistics, and a timestamp. The log is for people;
//! nothing parses it back.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::currency::format_amount;
use crate::player::Player;

pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one session block, stamping it with the local time.
    pub fn append(&self, player: &Player) -> std::io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        write_block(&mut writer, player, &timestamp)?;
        writer.flush()
    }
}

/// Writes one session block. Split out from [`ResultLog::append`] so tests
/// can inject the timestamp and the destination.
pub fn write_block(
    writer: &mut dyn Write,
    player: &Player,
    timestamp: &str,
) -> std::io::Result<()> {
    writeln!(writer, "Player: {}", player.name())?;
    writeln!(writer, "Ending Balance: ${}", format_amount(player.balance()))?;
    writeln!(writer, "Wins: {}", player.wins())?;
    writeln!(writer, "Losses: {}", player.losses())?;
    writeln!(writer, "Ties: {}", player.ties())?;
    writeln!(writer, "Timestamp: {}", timestamp)?;
    writeln!(writer, "{}", "=".repeat(30))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_contains_every_field_and_separator() {
        let player = Player::new("Ada", 36, 25_050);
        let mut out = Vec::new();
        write_block(&mut out, &player, "2026-01-02 03:04:05").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Player: Ada"));
        assert!(text.contains("Ending Balance: $250.50"));
        assert!(text.contains("Wins: 0"));
        assert!(text.contains("Losses: 0"));
        assert!(text.contains("Ties: 0"));
        assert!(text.contains("Timestamp: 2026-01-02 03:04:05"));
        assert!(text.contains(&"=".repeat(30)));
    }

    #[test]
    fn append_accumulates_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        let log = ResultLog::new(&path);
        let player = Player::new("Ada", 36, 10_000);
        log.append(&player).unwrap();
        log.append(&player).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("Player: Ada").count(), 2);
    }
}
