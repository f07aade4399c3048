use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;
use crate::leaderboard::{Leaderboard, ScoreEntry, CAPACITY};

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
    #[error("{path}: {reason}")]
    Parse {
        path: PathBuf,
        reason: String,
    },
}

/// Flat-file storage for the high score and the leaderboard.
///
/// Reads treat a missing file as "no data". The `load_*`/`save_*` helpers
/// never fail: problems are logged and the game carries on.
#[derive(Clone, Debug)]
pub struct ScoreStore {
    high_score_path: PathBuf,
    leaderboard_path: PathBuf,
}

impl ScoreStore {
    pub fn new(high_score_path: impl Into<PathBuf>, leaderboard_path: impl Into<PathBuf>) -> Self {
        Self {
            high_score_path: high_score_path.into(),
            leaderboard_path: leaderboard_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.high_score_path(), config.leaderboard_path())
    }

    pub fn load_high_score(&self) -> u32 {
        self.try_load_high_score().unwrap_or_else(|e| {
            log::warn!("{}; using high score 0", e);
            0
        })
    }

    pub fn try_load_high_score(&self) -> Result<u32, ScoreError> {
        let Some(text) = read_optional(&self.high_score_path)? else {
            return Ok(0);
        };
        let token = text.split_whitespace().next().unwrap_or("");
        if token.is_empty() {
            return Ok(0);
        }
        // leading digit run, like a `%d` scan
        let end = token.find(|c: char| !c.is_ascii_digit()).unwrap_or(token.len());
        if end > 0 && end < token.len() {
            log::warn!(
                "{}: ignoring {:?} after the high score",
                self.high_score_path.display(),
                &token[end..]
            );
        }
        token[..end].parse::<u32>().map_err(|e| ScoreError::Parse {
            path: self.high_score_path.clone(),
            reason: format!("bad high score {:?}: {}", token, e),
        })
    }

    pub fn save_high_score(&self, score: u32) {
        if let Err(e) = self.try_save_high_score(score) {
            log::warn!("{}", e);
        }
    }

    pub fn try_save_high_score(&self, score: u32) -> Result<(), ScoreError> {
        write_whole(&self.high_score_path, score.to_string())
    }

    pub fn load_leaderboard(&self) -> Leaderboard {
        self.try_load_leaderboard().unwrap_or_else(|e| {
            log::warn!("{}; starting with an empty leaderboard", e);
            Leaderboard::new()
        })
    }

    pub fn try_load_leaderboard(&self) -> Result<Leaderboard, ScoreError> {
        let Some(text) = read_optional(&self.leaderboard_path)? else {
            return Ok(Leaderboard::new());
        };
        Ok(parse_leaderboard(&text, &self.leaderboard_path))
    }

    pub fn save_leaderboard(&self, board: &Leaderboard) {
        if let Err(e) = self.try_save_leaderboard(board) {
            log::warn!("{}", e);
        }
    }

    pub fn try_save_leaderboard(&self, board: &Leaderboard) -> Result<(), ScoreError> {
        let mut buf = String::new();
        for entry in board.entries() {
            buf.push_str(&format!("{} {}\n", entry.name, entry.score));
        }
        write_whole(&self.leaderboard_path, buf)
    }

    pub fn high_score_path(&self) -> &Path {
        &self.high_score_path
    }

    pub fn leaderboard_path(&self) -> &Path {
        &self.leaderboard_path
    }
}

/// Parses `name score` lines. Stops at the first line that does not match
/// and keeps whatever was read before it.
pub fn parse_leaderboard(text: &str, path: &Path) -> Leaderboard {
    let mut entries = Vec::with_capacity(CAPACITY);
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let parsed = match (fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(score), None) => score.parse::<u32>().ok().map(|score| ScoreEntry {
                name: name.to_string(),
                score,
            }),
            _ => None,
        };
        let Some(entry) = parsed else {
            log::warn!(
                "{}:{}: malformed leaderboard line, ignoring the rest of the file",
                path.display(),
                lineno + 1
            );
            break;
        };
        entries.push(entry);
        if entries.len() >= CAPACITY {
            break;
        }
    }
    Leaderboard::from_entries(entries)
}

fn read_optional(path: &Path) -> Result<Option<String>, ScoreError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ScoreError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_whole(path: &Path, contents: String) -> Result<(), ScoreError> {
    fs::write(path, contents).map_err(|source| ScoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> ScoreStore {
        ScoreStore::new(dir.join("highscore.txt"), dir.join("leaderboard.txt"))
    }

    #[test]
    fn high_score_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.save_high_score(42);
        assert_eq!(store.load_high_score(), 42);
        assert_eq!(fs::read_to_string(store.high_score_path()).unwrap(), "42");
    }

    #[test]
    fn missing_files_mean_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert_eq!(store.try_load_high_score().unwrap(), 0);
        assert!(store.try_load_leaderboard().unwrap().is_empty());
    }

    #[test]
    fn high_score_tolerates_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.high_score_path(), "17\n").unwrap();
        assert_eq!(store.load_high_score(), 17);
    }

    #[test]
    fn high_score_keeps_leading_digits() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.high_score_path(), "17abc").unwrap();
        assert_eq!(store.try_load_high_score().unwrap(), 17);
        assert_eq!(store.load_high_score(), 17);
    }

    #[test]
    fn garbage_high_score_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.high_score_path(), "lots").unwrap();
        assert!(matches!(store.try_load_high_score(), Err(ScoreError::Parse { .. })));
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn leaderboard_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let mut board = Leaderboard::new();
        board.record("alice", 12);
        board.record("bob", 30);
        store.save_leaderboard(&board);
        assert_eq!(
            fs::read_to_string(store.leaderboard_path()).unwrap(),
            "bob 30\nalice 12\n"
        );
        assert_eq!(store.load_leaderboard(), board);
    }

    #[test]
    fn parsing_stops_at_first_bad_line() {
        let text = "ann 9\nbea 7\nthis is wrong\ncid 5\n";
        let board = parse_leaderboard(text, Path::new("leaderboard.txt"));
        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["ann", "bea"]);
    }

    #[test]
    fn parsing_reads_at_most_ten_lines() {
        let text: String = (0..12).map(|i| format!("p{} {}\n", i, 100 - i)).collect();
        let board = parse_leaderboard(&text, Path::new("leaderboard.txt"));
        assert_eq!(board.len(), CAPACITY);
        assert_eq!(board.lowest().map(|e| e.name.as_str()), Some("p9"));
    }

    #[test]
    fn unwritable_location_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir.path().join("missing").join("nested"));
        assert!(matches!(store.try_save_high_score(1), Err(ScoreError::Write { .. })));
        // best-effort variant swallows the failure
        store.save_high_score(1);
        store.save_leaderboard(&Leaderboard::new());
    }
}
