pub const CAPACITY: usize = 10;
pub const MAX_NAME_LEN: usize = 19;
pub const DEFAULT_NAME: &str = "???";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(name: &str, score: u32) -> Self {
        Self {
            name: sanitize_name(name),
            score,
        }
    }
}

/// Makes a name safe for the `name score` line format: at most 19 chars,
/// whitespace replaced, never empty.
pub fn sanitize_name(name: &str) -> String {
    let name: String = name
        .trim()
        .chars()
        .take(MAX_NAME_LEN)
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if name.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        name
    }
}

/// Top scores, highest first, never more than ten.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = ScoreEntry>) -> Self {
        let mut board = Self {
            entries: entries.into_iter().collect(),
        };
        board.rank();
        board
    }

    /// Whether `score` would earn a place: there is a free slot, or it beats
    /// the current last place.
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < CAPACITY {
            return true;
        }
        self.entries.last().map_or(true, |last| score > last.score)
    }

    /// Inserts the score if it qualifies. Returns whether it was kept.
    pub fn record(&mut self, name: &str, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.entries.push(ScoreEntry::new(name, score));
        self.rank();
        true
    }

    // sort_by is stable, so equal scores keep their insertion order
    fn rank(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(CAPACITY);
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lowest(&self) -> Option<&ScoreEntry> {
        self.entries.last()
    }
}
