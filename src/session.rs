use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;

pub const MIN_SPEED_MS: u64 = 200;
pub const MAX_SPEED_MS: u64 = 500;

/// Per-process context handed to the game: configuration plus the random
/// source used for every fruit spawn.
pub struct Session {
    pub config: Config,
    rng: StdRng,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Column in `[0, grid_width)` for a freshly spawned fruit.
    pub fn spawn_column(&mut self) -> u16 {
        self.rng.gen_range(0..self.config.grid_width)
    }

    /// Fall speed in milliseconds, in `[200, 500)`.
    pub fn spawn_speed(&mut self) -> u64 {
        self.rng.gen_range(MIN_SPEED_MS..MAX_SPEED_MS)
    }
}
