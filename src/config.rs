use std::path::PathBuf;

use clap::Parser;

pub const GRID_WIDTH: u16 = 30;
pub const GRID_HEIGHT: u16 = 15;
pub const BASKET_WIDTH: u16 = 5;
pub const MOVE_STEP: u16 = 3;

const HIGH_SCORE_FILE: &str = "highscore.txt";
const LEADERBOARD_FILE: &str = "leaderboard.txt";
const LOG_FILE: &str = "catch-the-fruit.log";

/// Command line options.
#[derive(Parser, Debug)]
#[command(name = "catch-the-fruit", version, about = "Catch the falling fruit in your basket")]
pub struct Args {
    /// Directory holding the high score and leaderboard files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Play the single-round variant: no menu, no leaderboard
    #[arg(long)]
    pub classic: bool,

    /// Fixed seed for the fruit generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the log (defaults to the data directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub grid_width: u16,
    pub grid_height: u16,
    pub basket_width: u16,
    pub move_step: u16,
    pub data_dir: PathBuf,
    pub classic: bool,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            basket_width: BASKET_WIDTH,
            move_step: MOVE_STEP,
            data_dir: PathBuf::from("."),
            classic: false,
            seed: None,
            log_file: PathBuf::from(LOG_FILE),
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let log_file = args
            .log_file
            .unwrap_or_else(|| args.data_dir.join(LOG_FILE));
        Self {
            data_dir: args.data_dir,
            classic: args.classic,
            seed: args.seed,
            log_file,
            ..Self::default()
        }
    }
}

impl Config {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            log_file: data_dir.join(LOG_FILE),
            data_dir,
            ..Self::default()
        }
    }

    pub fn high_score_path(&self) -> PathBuf {
        self.data_dir.join(HIGH_SCORE_FILE)
    }

    pub fn leaderboard_path(&self) -> PathBuf {
        self.data_dir.join(LEADERBOARD_FILE)
    }

    /// Rightmost column the basket's left edge may occupy.
    pub fn max_basket_x(&self) -> u16 {
        self.grid_width.saturating_sub(self.basket_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_default_to_current_directory() {
        let args = Args::parse_from(["catch-the-fruit"]);
        let config = Config::from(args);
        assert_eq!(config.high_score_path(), PathBuf::from("./highscore.txt"));
        assert_eq!(config.leaderboard_path(), PathBuf::from("./leaderboard.txt"));
        assert_eq!(config.log_file, PathBuf::from("./catch-the-fruit.log"));
        assert!(!config.classic);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn args_override_paths_and_mode() {
        let args = Args::parse_from([
            "catch-the-fruit",
            "--data-dir",
            "/tmp/fruit",
            "--classic",
            "--seed",
            "7",
            "--log-file",
            "/tmp/game.log",
        ]);
        let config = Config::from(args);
        assert_eq!(config.leaderboard_path(), PathBuf::from("/tmp/fruit/leaderboard.txt"));
        assert_eq!(config.log_file, PathBuf::from("/tmp/game.log"));
        assert!(config.classic);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.grid_width, GRID_WIDTH);
    }

    #[test]
    fn basket_limit_leaves_room_for_full_span() {
        let config = Config::default();
        assert_eq!(config.max_basket_x(), 25);
    }
}
